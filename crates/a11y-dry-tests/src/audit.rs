// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Audit target fake keyed by rule id.

use std::collections::HashMap;

use a11y_core::audit::{AuditError, AuditTarget, RULES};

/// [`AuditTarget`] that reports canned match counts per rule.
#[derive(Debug, Clone, Default)]
pub struct FakeAuditTarget {
    counts: HashMap<&'static str, usize>,
    rejected: Vec<&'static str>,
}

impl FakeAuditTarget {
    /// A page with no violations.
    pub fn clean() -> Self {
        Self::default()
    }

    /// Report `count` matches for the rule `id`. Unknown ids are ignored.
    pub fn with_violation(mut self, id: &str, count: usize) -> Self {
        if let Some(rule) = RULES.iter().find(|r| r.id == id) {
            self.counts.insert(rule.selector, count);
        }
        self
    }

    /// Reject the selector of rule `id` as unsupported.
    pub fn rejecting(mut self, id: &str) -> Self {
        if let Some(rule) = RULES.iter().find(|r| r.id == id) {
            self.rejected.push(rule.selector);
        }
        self
    }
}

impl AuditTarget for FakeAuditTarget {
    fn count_matches(&self, selector: &str) -> Result<usize, AuditError> {
        if self.rejected.iter().any(|rejected| *rejected == selector) {
            return Err(AuditError::Selector(selector.to_owned()));
        }
        Ok(self.counts.get(selector).copied().unwrap_or(0))
    }
}
