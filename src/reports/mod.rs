use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use combodex::config::DisplayParams;
use combodex::rankings::detail::{DetailView, MetricBreakdown};
use combodex::rankings::filter::CardCategory;
use combodex::rankings::integrity::{IntegrityReport, Severity};
use combodex::rankings::types::{Combination, DatasetMetadata, Metric};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

// Podium colours for the top three
fn rank_cell(rank: u32) -> Cell {
    let cell = Cell::new(format!("#{}", rank)).add_attribute(Attribute::Bold);
    match rank {
        1 => cell.fg(Color::Yellow),
        2 => cell.fg(Color::Grey),
        3 => cell.fg(Color::DarkYellow),
        _ => cell,
    }
}

fn bucket_name(card_type: &str) -> String {
    CardCategory::classify(card_type)
        .map(|c| c.to_string())
        .unwrap_or_else(|| "?".to_string())
}

pub fn combo_type_label(c: &Combination) -> String {
    format!(
        "{} + {}",
        bucket_name(&c.card1.card_type),
        bucket_name(&c.card2.card_type)
    )
}

/// Text bar for a 0..1 fraction, e.g. `#######.............`.
/// Shortens `s` to at most `width` chars, marking the cut with "...".
pub fn truncate_label(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

pub fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn rankings(items: &[&Combination], display: &DisplayParams) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Card 1"),
        Cell::new("Card 2"),
        Cell::new("Type"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Synergy").fg(Color::Green),
    ]);

    for c in items {
        table.add_row(vec![
            rank_cell(c.rank),
            Cell::new(truncate_label(&c.card1.name, display.name_width)),
            Cell::new(truncate_label(&c.card2.name, display.name_width)),
            Cell::new(combo_type_label(c)),
            Cell::new(format!("{:.2}", c.total_score)).fg(Color::Cyan),
            Cell::new(format!("{:.2}x", c.synergy_multiplier)).fg(Color::Green),
        ]);
    }

    align_right(&mut table, 4..=5);
    println!("\n{}", table);
}

pub fn detail(view: &DetailView<'_>, display: &DisplayParams) {
    let c = view.combination;

    println!("\n#{}  {}", c.rank, c.title());
    println!(
        "Total Score: {:.2}   Synergy: {:.2}x",
        c.total_score, c.synergy_multiplier
    );

    let mut cards = new_table();
    cards.add_row(vec![
        Cell::new("Card").add_attribute(Attribute::Bold),
        Cell::new("Type"),
        Cell::new("Attribute"),
        Cell::new("Image"),
    ]);
    for card in c.cards() {
        cards.add_row(vec![
            Cell::new(&card.name).add_attribute(Attribute::Bold),
            Cell::new(&card.card_type),
            Cell::new(card.attribute.as_deref().unwrap_or("-")),
            Cell::new(&card.image_url_small),
        ]);
    }
    println!("\n{}", cards);

    breakdown(&view.breakdown, display.bar_width);

    if !c.explanation.is_empty() {
        println!("\nAnalysis:\n  {}", c.explanation);
    }

    println!(
        "\n<< #{}   |   #{} >>",
        view.prev_rank, view.next_rank
    );
}

pub fn breakdown(entries: &[MetricBreakdown], bar_width: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Profile"),
    ]);

    for e in entries {
        table.add_row(vec![
            Cell::new(&e.label),
            Cell::new(format!("{:.0}/{:.0}", e.value, e.full_mark)).fg(Color::Cyan),
            Cell::new(bar(e.fraction(), bar_width)).fg(Color::Cyan),
        ]);
    }

    align_right(&mut table, 1..=1);
    println!("\n{}", table);
}

pub fn metadata(meta: &DatasetMetadata, loaded: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Statistic").add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);

    table.add_row(vec![
        Cell::new("Combinations analyzed"),
        Cell::new(meta.total_combinations.to_string()).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Top ranked"),
        Cell::new(meta.scored_combinations.to_string()).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Rankings loaded"),
        Cell::new(loaded.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Metrics"),
        Cell::new(Metric::iter().count().to_string()),
    ]);
    table.add_row(vec![Cell::new("Top N"), Cell::new(meta.top_n.to_string())]);

    if let Some(cards) = meta.cards_analyzed {
        table.add_row(vec![Cell::new("Cards analyzed"), Cell::new(cards.to_string())]);
    }
    if let Some(min) = meta.min_score_threshold {
        table.add_row(vec![
            Cell::new("Min score threshold"),
            Cell::new(format!("{:.0}", min)),
        ]);
    }
    if let Some(date) = &meta.generation_date {
        table.add_row(vec![Cell::new("Generated"), Cell::new(date)]);
    }

    align_right(&mut table, 1..=1);
    println!("\n{}", table);

    if !meta.weights.is_empty() {
        let mut weights = new_table();
        weights.add_row(vec![
            Cell::new("Metric Weight").add_attribute(Attribute::Bold),
            Cell::new("Value"),
        ]);
        for (name, w) in &meta.weights {
            weights.add_row(vec![Cell::new(name), Cell::new(format!("{:.2}", w))]);
        }
        align_right(&mut weights, 1..=1);
        println!("\n{}", weights);
    }
}

pub fn metrics() {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Metric"),
        Cell::new("Measures"),
    ]);

    for m in Metric::iter() {
        table.add_row(vec![
            Cell::new(m.key()).fg(Color::Cyan),
            Cell::new(m.label()).add_attribute(Attribute::Bold),
            Cell::new(m.description()),
        ]);
    }
    println!("\n{}", table);
}

pub fn integrity(report: &IntegrityReport, limit: usize) {
    if report.is_clean() {
        println!("\n✅ {} combinations checked, no issues.", report.checked);
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Severity").add_attribute(Attribute::Bold),
        Cell::new("Rank"),
        Cell::new("Issue"),
    ]);

    for issue in report.issues.iter().take(limit) {
        let sev = match issue.severity {
            Severity::Error => Cell::new("ERROR").fg(Color::Red),
            Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        };
        table.add_row(vec![
            sev,
            Cell::new(issue.rank.map(|r| format!("#{}", r)).unwrap_or_default()),
            Cell::new(&issue.message),
        ]);
    }
    println!("\n{}", table);

    if report.issues.len() > limit {
        println!("... {} more issues not shown", report.issues.len() - limit);
    }
    println!(
        "\n{} combinations checked: {} errors, {} warnings",
        report.checked,
        report.error_count(),
        report.warning_count()
    );
}
