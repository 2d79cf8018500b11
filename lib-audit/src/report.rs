//! Report Rendering
//!
//! Pass/fail verdicts per denomination per classification, rendered as
//! human-readable lines. Diagnostic output only; no machine-readable schema.

use std::fmt;

use lib_denomination::denomination_value;

use crate::reconcile::{AuditReport, ClassTally, DenominationTally};

/// Outcome of one denomination/classification check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

impl DenominationTally {
    /// Ordinary outputs past their window must be pruned: pass only when
    /// none still exist.
    pub fn ordinary_verdict(&self) -> Verdict {
        if self.ordinary.existing == 0 {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    /// Coinbase/conversion-derived outputs must persist: pass only when
    /// every expected outpoint still exists.
    pub fn derived_verdict(&self) -> Verdict {
        if self.derived.existing == self.derived.expected {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl AuditReport {
    /// Number of failing denomination/classification verdicts.
    pub fn failed_verdicts(&self) -> usize {
        self.tallies
            .iter()
            .map(|t| {
                usize::from(!t.ordinary_verdict().passed())
                    + usize::from(!t.derived_verdict().passed())
            })
            .sum()
    }

    /// One line per denomination, plus a header with the tip reference.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.tallies.len() + 1);
        lines.push(format!(
            "trim audit at height {}: {} verdict(s) failing",
            self.current_height,
            self.failed_verdicts()
        ));
        for tally in &self.tallies {
            lines.push(render_denomination(tally));
        }
        lines
    }
}

fn render_denomination(tally: &DenominationTally) -> String {
    let value = denomination_value(tally.denomination)
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "?".into());
    format!(
        "denomination {:>2} (value {:>7}): ordinary {} {} | coinbase/conversion {} {}",
        tally.denomination,
        value,
        render_class(&tally.ordinary),
        tally.ordinary_verdict(),
        render_class(&tally.derived),
        tally.derived_verdict(),
    )
}

fn render_class(tally: &ClassTally) -> String {
    if tally.indeterminate > 0 {
        format!(
            "expected={} existing={} indeterminate={}",
            tally.expected, tally.existing, tally.indeterminate
        )
    } else {
        format!("expected={} existing={}", tally.expected, tally.existing)
    }
}
