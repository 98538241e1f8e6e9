use crate::domain::model::SurveyReport;
use crate::utils::error::Result;
use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, ContentArrangement, Table};

pub const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Title line followed by an ASCII table, one row per language.
pub fn render_table(report: &SurveyReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS.iter().map(|h| Cell::new(h)));

    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.language),
            Cell::new(row.stats.vacancies_found).set_alignment(CellAlignment::Right),
            Cell::new(row.stats.vacancies_processed).set_alignment(CellAlignment::Right),
            Cell::new(row.stats.average_salary).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n{}", report.title, table)
}

pub fn render_json(reports: &[SurveyReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Found counts only, used by `--count-only`.
pub fn render_counts(title: &str, counts: &[(String, u64)]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec![Cell::new(HEADERS[0]), Cell::new(HEADERS[1])]);

    for (language, found) in counts {
        table.add_row(vec![
            Cell::new(language),
            Cell::new(found).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n{}", title, table)
}
