// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles for the a11y crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory `localStorage` stand-in
//! - [`document`] - Document fake recording visual state and calls
//! - [`scheduler`] - Scheduler on a manually advanced clock
//! - [`audit`] - Audit target with canned per-rule counts

pub mod audit;
pub mod config;
pub mod document;
pub mod scheduler;

pub use audit::FakeAuditTarget;
pub use config::InMemoryConfigStore;
pub use document::{DocCall, RecordingDocument};
pub use scheduler::ManualScheduler;
