//! The two concrete tables of a fact sheet: contracts and sourcing projects.

use crate::LayoutError;
use crate::table::{FormattedTable, TableSpec, format_table};
use factsheet_style::FontAttributes;
use factsheet_types::{Color, ContractRecord, ContractTerm, FormatWarning, Point, ProjectRecord};

pub const CONTRACT_ROW_CAP: usize = 4;
pub const PROJECT_ROW_CAP: usize = 3;

const HEADER_FILL: Color = Color::rgb(0x00, 0x37, 0x81);

impl TableSpec {
    pub fn contracts() -> Self {
        TableSpec::new(
            "contracts",
            &["Contract ID", "Contract", "Description", "Term", "Category", "Value (€m)"],
        )
        .with_column_widths(&[62.0, 84.0, 100.0, 56.0, 74.0, 60.0])
        .with_char_limits(&[9, 14, 18, 9, 12, 9])
        .with_row_cap(CONTRACT_ROW_CAP)
        .with_row_height(18.0)
        .with_font(FontAttributes::new("Helvetica", 8.0))
        .with_header_fill(HEADER_FILL, Color::WHITE)
    }

    pub fn projects() -> Self {
        TableSpec::new("projects", &["Project ID", "Project", "Description", "Baseline (€m)"])
            .with_column_widths(&[62.0, 120.0, 190.0, 64.0])
            .with_char_limits(&[9, 20, 34, 10])
            .with_row_cap(PROJECT_ROW_CAP)
            .with_row_height(18.0)
            .with_font(FontAttributes::new("Helvetica", 8.0))
            .with_header_fill(HEADER_FILL, Color::WHITE)
    }
}

/// Two decimals, no thousands separator.
pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

/// `{startYear}-{endYear}`, or `N/A` when the date pair is unusable.
pub fn format_term(term: ContractTerm) -> String {
    match term {
        ContractTerm::Years { start, end } => format!("{start}-{end}"),
        ContractTerm::Unknown | ContractTerm::Inverted => "N/A".to_string(),
    }
}

pub fn contracts_table(
    spec: &TableSpec,
    origin: Point,
    contracts: &[&ContractRecord],
) -> Result<FormattedTable, LayoutError> {
    let mut warnings = Vec::new();
    let rows: Vec<Vec<String>> = contracts
        .iter()
        .map(|c| {
            let term = c.term();
            if term == ContractTerm::Inverted {
                warnings.push(FormatWarning::new(
                    &spec.name,
                    format!("contract {} expires before it takes effect", c.contract_id),
                ));
            }
            vec![
                c.contract_id.clone(),
                c.contract_name.clone(),
                c.description.clone(),
                format_term(term),
                c.category.clone(),
                format_money(c.total_value),
            ]
        })
        .collect();

    let mut table = format_table(spec, origin, &rows)?;
    warnings.append(&mut table.warnings);
    table.warnings = warnings;
    Ok(table)
}

pub fn projects_table(
    spec: &TableSpec,
    origin: Point,
    projects: &[&ProjectRecord],
) -> Result<FormattedTable, LayoutError> {
    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|p| {
            vec![
                p.project_id.clone(),
                p.project_name.clone(),
                p.short_description.clone(),
                format_money(p.baseline_spend),
            ]
        })
        .collect();
    format_table(spec, origin, &rows)
}
