// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings and adjustment engine for the a11y widget.
//!
//! Holds the persisted preference record, the bounded counter arithmetic,
//! the readable-font and panel toggles, and the markup checklist. DOM,
//! storage and timers are reached only through ports, so browser adapters stay
//! thin and everything here runs under plain `cargo test`.

pub mod adjust;
pub mod audit;
pub mod config;
pub mod document_port;
pub mod options;
pub mod prefs;
pub mod schedule;
pub mod toggle;
pub mod widget;

pub use adjust::{Counter, Direction};
pub use config::{ConfigError, ConfigService, ConfigStore, SettingsStore, PREFS_KEY};
pub use document_port::DocumentPort;
pub use options::{A11yError, Position, WidgetConfig, WidgetOptions};
pub use prefs::PreferenceRecord;
pub use schedule::{PanelAction, Scheduler, TimerId};
pub use toggle::ToggleState;
pub use widget::A11yWidget;
