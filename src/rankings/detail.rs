use super::types::{Combination, Dataset, Metric, METRIC_FULL_MARK};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBreakdown {
    pub metric: &'static str,
    pub label: String,
    pub value: f64,
    pub full_mark: f64,
}

impl MetricBreakdown {
    /// Share of the full mark, clipped to [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.full_mark <= 0.0 {
            return 0.0;
        }
        (self.value / self.full_mark).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<'a> {
    pub combination: &'a Combination,
    /// `rank - 1`; may not exist (rank 1 points at 0).
    pub prev_rank: u32,
    /// `rank + 1`; may not exist.
    pub next_rank: u32,
    pub breakdown: Vec<MetricBreakdown>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RankLookup<'a> {
    Found(DetailView<'a>),
    NotFound(u32),
    /// Dataset never loaded.
    Unavailable,
}

pub fn breakdown(c: &Combination) -> Vec<MetricBreakdown> {
    c.scores
        .iter()
        .map(|(metric, value): (Metric, f64)| MetricBreakdown {
            metric: metric.key(),
            label: metric.label(),
            value,
            full_mark: METRIC_FULL_MARK,
        })
        .collect()
}

pub fn lookup(dataset: &Dataset, rank: u32) -> RankLookup<'_> {
    match dataset.find_by_rank(rank) {
        Some(c) => RankLookup::Found(DetailView {
            combination: c,
            prev_rank: rank.saturating_sub(1),
            next_rank: rank.saturating_add(1),
            breakdown: breakdown(c),
        }),
        None => RankLookup::NotFound(rank),
    }
}
