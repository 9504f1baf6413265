use serde::{Serialize, Serializer};
use std::fmt;

/// Strips shorter than this list every page.
pub const MAX_PLAIN_PAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

// Numbers for pages, "..." for gaps.
impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => s.serialize_u64(*n as u64),
            Self::Ellipsis => s.serialize_str("..."),
        }
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{}", n),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Compact page strip: first and last page, the current page with one
/// neighbour on each side, and an ellipsis over every gap.
pub fn page_labels(current_page: usize, total_pages: usize) -> Vec<PageLabel> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= MAX_PLAIN_PAGES {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let lo = current.saturating_sub(1).max(1);
    let hi = (current + 1).min(total_pages);

    let mut pages = vec![1];
    pages.extend(lo..=hi);
    pages.push(total_pages);
    pages.dedup();

    let mut labels = Vec::with_capacity(pages.len() + 2);
    let mut prev: Option<usize> = None;
    for p in pages {
        if let Some(prev) = prev {
            if p - prev > 1 {
                labels.push(PageLabel::Ellipsis);
            }
        }
        labels.push(PageLabel::Page(p));
        prev = Some(p);
    }
    labels
}

pub fn format_labels(labels: &[PageLabel], current_page: usize) -> String {
    labels
        .iter()
        .map(|l| match l {
            PageLabel::Page(n) if *n == current_page => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::PageLabel::{Ellipsis, Page};
    use super::*;

    #[test]
    fn middle_page_has_two_gaps() {
        assert_eq!(
            page_labels(7, 20),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn display_marks_current_page() {
        let labels = page_labels(2, 3);
        assert_eq!(format_labels(&labels, 2), "1 [2] 3");
    }
}
