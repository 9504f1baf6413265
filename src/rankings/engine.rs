use super::filter::FilterCriteria;
use super::types::Combination;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 50;

#[derive(
    Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending rank.
    #[default]
    Rank,
    /// Descending total score.
    Score,
    /// Descending synergy multiplier.
    Synergy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<'a> {
    pub page: usize,
    pub items_per_page: usize,
    pub total_matched: usize,
    pub total_pages: usize,
    pub items: Vec<&'a Combination>,
}

impl QueryPage<'_> {
    pub fn empty(page: usize, items_per_page: usize) -> Self {
        Self {
            page,
            items_per_page,
            total_matched: 0,
            total_pages: 0,
            items: Vec::new(),
        }
    }
}

pub fn total_pages(total_matched: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_matched.div_ceil(items_per_page)
}

pub fn filter<'a>(rankings: &'a [Combination], criteria: &FilterCriteria) -> Vec<&'a Combination> {
    rankings.iter().filter(|c| criteria.matches(c)).collect()
}

/// Stable: equal keys keep their incoming order.
pub fn sort(items: &mut [&Combination], key: SortKey) {
    match key {
        SortKey::Rank => items.sort_by(|a, b| a.rank.cmp(&b.rank)),
        SortKey::Score => items.sort_by(|a, b| b.total_score.total_cmp(&a.total_score)),
        SortKey::Synergy => {
            items.sort_by(|a, b| b.synergy_multiplier.total_cmp(&a.synergy_multiplier))
        }
    }
}

/// 1-based page slice. Page 0 or past the end yields an empty slice.
pub fn paginate<'s, 'a>(
    items: &'s [&'a Combination],
    page: usize,
    items_per_page: usize,
) -> &'s [&'a Combination] {
    if page == 0 || items_per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// Filter, sort, then cut the requested page. Never mutates `rankings`.
pub fn run_query<'a>(
    rankings: &'a [Combination],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    page: usize,
    items_per_page: usize,
) -> QueryPage<'a> {
    let mut matched = filter(rankings, criteria);
    sort(&mut matched, sort_key);

    let total_matched = matched.len();
    let items = paginate(&matched, page, items_per_page).to_vec();

    debug!(
        "Query: {} of {} matched, sort={}, page {} ({} items)",
        total_matched,
        rankings.len(),
        sort_key,
        page,
        items.len()
    );

    QueryPage {
        page,
        items_per_page,
        total_matched,
        total_pages: total_pages(total_matched, items_per_page),
        items,
    }
}
