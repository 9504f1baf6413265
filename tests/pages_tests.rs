use combodex::rankings::pages::{format_labels, page_labels, PageLabel};
use rstest::rstest;

const E: PageLabel = PageLabel::Ellipsis;

fn p(n: usize) -> PageLabel {
    PageLabel::Page(n)
}

#[rstest]
#[case(1, 0, vec![])]
#[case(1, 1, vec![p(1)])]
#[case(3, 5, vec![p(1), p(2), p(3), p(4), p(5)])]
#[case(7, 20, vec![p(1), E, p(6), p(7), p(8), E, p(20)])]
#[case(1, 20, vec![p(1), p(2), E, p(20)])]
#[case(2, 20, vec![p(1), p(2), p(3), E, p(20)])]
#[case(3, 20, vec![p(1), p(2), p(3), p(4), E, p(20)])]
#[case(4, 20, vec![p(1), E, p(3), p(4), p(5), E, p(20)])]
#[case(19, 20, vec![p(1), E, p(18), p(19), p(20)])]
#[case(20, 20, vec![p(1), E, p(19), p(20)])]
#[case(3, 6, vec![p(1), p(2), p(3), p(4), E, p(6)])]
#[case(99, 6, vec![p(1), E, p(5), p(6)])] // current clamped into range
#[case(0, 6, vec![p(1), p(2), E, p(6)])]
fn test_page_labels(#[case] current: usize, #[case] total: usize, #[case] expected: Vec<PageLabel>) {
    assert_eq!(page_labels(current, total), expected);
}

#[test]
fn test_labels_never_repeat_or_double_ellipsis() {
    for total in 0..40 {
        for current in 0..=total + 1 {
            let labels = page_labels(current, total);

            let pages: Vec<usize> = labels
                .iter()
                .filter_map(|l| match l {
                    PageLabel::Page(n) => Some(*n),
                    PageLabel::Ellipsis => None,
                })
                .collect();
            let mut sorted = pages.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(pages, sorted, "pages out of order or repeated: {}/{}", current, total);

            for w in labels.windows(2) {
                assert!(
                    !(w[0] == PageLabel::Ellipsis && w[1] == PageLabel::Ellipsis),
                    "double ellipsis at {}/{}",
                    current,
                    total
                );
            }

            if total > 0 {
                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total));
            }
        }
    }
}

#[test]
fn test_format_labels() {
    let labels = page_labels(7, 20);
    assert_eq!(format_labels(&labels, 7), "1 ... 6 [7] 8 ... 20");
}

#[test]
fn test_labels_serialize_as_numbers_and_dots() {
    let json = serde_json::to_string(&page_labels(7, 20)).unwrap();
    assert_eq!(json, r#"[1,"...",6,7,8,"...",20]"#);
}
