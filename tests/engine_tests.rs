mod common;

use combodex::rankings::engine::{paginate, run_query, sort, total_pages, SortKey};
use combodex::rankings::filter::FilterCriteria;
use common::{card, ranked, ranks, ComboBuilder};
use rstest::rstest;

#[test]
fn test_defaults_return_first_page_by_rank() {
    let mut data = ranked(120);
    data.reverse();

    let page = run_query(&data, &FilterCriteria::default(), SortKey::Rank, 1, 50);

    assert_eq!(page.total_matched, 120);
    assert_eq!(page.total_pages, 3);
    assert_eq!(ranks(&page.items), (1..=50).collect::<Vec<_>>());
}

#[rstest]
#[case(1, 1, 50)]
#[case(2, 51, 100)]
#[case(3, 101, 120)]
fn test_120_combos_paginate(#[case] page: usize, #[case] first: u32, #[case] last: u32) {
    let data = ranked(120);
    let result = run_query(&data, &FilterCriteria::default(), SortKey::Rank, page, 50);
    assert_eq!(ranks(&result.items), (first..=last).collect::<Vec<_>>());
}

#[rstest]
#[case(0)]
#[case(4)]
#[case(usize::MAX)]
fn test_out_of_range_page_is_empty(#[case] page: usize) {
    let data = ranked(120);
    let result = run_query(&data, &FilterCriteria::default(), SortKey::Rank, page, 50);
    assert!(result.items.is_empty());
    assert_eq!(result.total_matched, 120);
    assert_eq!(result.total_pages, 3);
}

#[rstest]
#[case(SortKey::Rank)]
#[case(SortKey::Score)]
#[case(SortKey::Synergy)]
fn test_name_filter_dragon(#[case] key: SortKey) {
    let mut data = ranked(40);
    for rank in [3, 7, 11, 19, 23, 31, 38] {
        data[rank - 1].card2 = card(&format!("Red-Eyes Black Dragon {}", rank), "Normal Monster");
    }

    let filters = FilterCriteria {
        card_name: Some("dragon".to_string()),
        ..Default::default()
    };
    let result = run_query(&data, &filters, key, 1, 50);

    assert_eq!(result.total_matched, 7);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.items.len(), 7);
}

#[test]
fn test_no_matches_means_zero_pages() {
    let data = ranked(10);
    let filters = FilterCriteria {
        min_score: 10_000.0,
        ..Default::default()
    };
    let result = run_query(&data, &filters, SortKey::Rank, 1, 50);
    assert_eq!(result.total_matched, 0);
    assert_eq!(result.total_pages, 0);
    assert!(result.items.is_empty());
}

#[test]
fn test_sort_by_score_descending_and_stable() {
    let data = vec![
        ComboBuilder::new(1).score(200.0).build(),
        ComboBuilder::new(2).score(300.0).build(),
        ComboBuilder::new(3).score(200.0).build(),
        ComboBuilder::new(4).score(300.0).build(),
    ];
    let mut items: Vec<_> = data.iter().collect();
    sort(&mut items, SortKey::Score);
    assert_eq!(ranks(&items), vec![2, 4, 1, 3]);
}

#[test]
fn test_sort_by_synergy_keeps_prior_order_on_ties() {
    let data = vec![
        ComboBuilder::new(1).synergy(1.5).score(10.0).build(),
        ComboBuilder::new(2).synergy(1.5).score(30.0).build(),
        ComboBuilder::new(3).synergy(2.0).score(20.0).build(),
    ];
    let mut items: Vec<_> = data.iter().collect();
    sort(&mut items, SortKey::Score);
    assert_eq!(ranks(&items), vec![2, 3, 1]);

    sort(&mut items, SortKey::Synergy);
    assert_eq!(ranks(&items), vec![3, 2, 1]);
}

#[test]
fn test_query_does_not_mutate_source() {
    let data = ranked(30);
    let before = data.clone();
    let _ = run_query(&data, &FilterCriteria::default(), SortKey::Score, 2, 7);
    let _ = run_query(&data, &FilterCriteria::default(), SortKey::Synergy, 1, 7);
    assert_eq!(data, before);
}

#[test]
fn test_paginate_last_partial_page() {
    let data = ranked(23);
    let items: Vec<_> = data.iter().collect();
    assert_eq!(paginate(&items, 3, 10).len(), 3);
    assert_eq!(paginate(&items, 4, 10).len(), 0);
    assert_eq!(total_pages(23, 10), 3);
}
