use factsheet_types::DataShapeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Malformed table input: {0}")]
    DataShape(#[from] DataShapeError),
}

pub mod table;
pub mod variants;

pub use self::table::{FormattedTable, TableSpec, format_table};
pub use self::variants::{contracts_table, format_money, format_term, projects_table};
