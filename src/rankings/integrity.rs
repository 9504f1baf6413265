use super::types::{Dataset, METRIC_FULL_MARK};
use crate::error::{CdResult, ComboError};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

pub const SYNERGY_MIN: f64 = 1.0;
pub const SYNERGY_MAX: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    /// Rank the issue belongs to, when it is tied to one combination.
    pub rank: Option<u32>,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        };
        match self.rank {
            Some(r) => write!(f, "[{}] #{}: {}", tag, r, self.message),
            None => write!(f, "[{}] {}", tag, self.message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    pub checked: usize,
    pub issues: Vec<Issue>,
}

impl IntegrityReport {
    fn push(&mut self, severity: Severity, rank: Option<u32>, message: String) {
        self.issues.push(Issue {
            severity,
            rank,
            message,
        });
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Warnings pass; any error fails the whole payload.
    pub fn ensure_no_errors(&self) -> CdResult<()> {
        match self.error_count() {
            0 => Ok(()),
            n => Err(ComboError::Validation(format!(
                "{} error(s) in {} rankings",
                n, self.checked
            ))),
        }
    }
}

/// Checks the invariants the browser relies on. Never fails; every
/// violation becomes an issue in the report.
pub fn check_dataset(ds: &Dataset) -> IntegrityReport {
    let mut report = IntegrityReport {
        checked: ds.rankings.len(),
        ..Default::default()
    };

    let mut seen = HashSet::with_capacity(ds.rankings.len());
    for c in &ds.rankings {
        let r = Some(c.rank);
        if c.rank == 0 {
            report.push(Severity::Error, r, "rank must be positive".to_string());
        }
        if !seen.insert(c.rank) {
            report.push(Severity::Error, r, "duplicate rank".to_string());
        }
        if !c.total_score.is_finite() || c.total_score < 0.0 {
            report.push(
                Severity::Error,
                r,
                format!("totalScore {} is negative or not finite", c.total_score),
            );
        }
        if !(SYNERGY_MIN..=SYNERGY_MAX).contains(&c.synergy_multiplier) {
            report.push(
                Severity::Error,
                r,
                format!(
                    "synergyMultiplier {} outside [{}, {}]",
                    c.synergy_multiplier, SYNERGY_MIN, SYNERGY_MAX
                ),
            );
        }
        for (metric, value) in c.scores.iter() {
            if !(0.0..=METRIC_FULL_MARK).contains(&value) {
                report.push(
                    Severity::Error,
                    r,
                    format!("{} = {} outside [0, {}]", metric.key(), value, METRIC_FULL_MARK),
                );
            }
        }
    }

    // Dense 1..N
    let n = u32::try_from(ds.rankings.len()).unwrap_or(u32::MAX);
    let missing: Vec<u32> = (1..=n).filter(|r| !seen.contains(r)).collect();
    if !missing.is_empty() {
        let preview: Vec<String> = missing.iter().take(10).map(|r| r.to_string()).collect();
        report.push(
            Severity::Error,
            None,
            format!(
                "ranks are not dense 1..{}: {} missing (first: {})",
                n,
                missing.len(),
                preview.join(", ")
            ),
        );
    }

    // Exporter keeps min(scored, topN) rows; zero means the field is absent
    let meta = &ds.metadata;
    let present = ds.rankings.len() as u64;
    let bounds = [
        ("scoredCombinations", meta.scored_combinations),
        ("topN", meta.top_n),
    ];
    for (field, bound) in bounds {
        if bound != 0 && present > bound {
            report.push(
                Severity::Warning,
                None,
                format!(
                    "{} rankings present but metadata.{} = {}",
                    present, field, bound
                ),
            );
        }
    }
    let expected = bounds.iter().map(|(_, b)| *b).filter(|b| *b != 0).min();
    if let Some(expected) = expected {
        if present < expected {
            report.push(
                Severity::Warning,
                None,
                format!("{} rankings present but metadata expects {}", present, expected),
            );
        }
    }

    report
}
