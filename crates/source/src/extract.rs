//! Typed extraction of records from the cleaned datasets.
//!
//! Every required column is resolved before the first row is read, so a
//! renamed column fails the whole extraction. Individual rows with a bad
//! amount are dropped with a warning.

use crate::dataset::Dataset;
use crate::error::SourceError;
use crate::schema::{contracts, sourcing, spend};
use chrono::{NaiveDate, NaiveDateTime};
use factsheet_types::{ContractRecord, ProjectRecord, SpendRecord, VendorId};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn spend_records(ds: &Dataset) -> Result<Vec<SpendRecord>, SourceError> {
    let idx = ds.column_indices(&[spend::VENDOR, spend::CATEGORY, spend::SPEND_2024])?;
    let records = ds
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(n, row)| {
            let amount = parse_amount(ds.name(), n, spend::SPEND_2024, &row[idx[2]])?;
            Some(SpendRecord {
                vendor: VendorId::new(row[idx[0]].as_str()),
                category: row[idx[1]].clone(),
                spend_2024: amount,
            })
        })
        .collect();
    Ok(records)
}

pub fn contract_records(ds: &Dataset) -> Result<Vec<ContractRecord>, SourceError> {
    let idx = ds.column_indices(&[
        contracts::CONTRACT_ID,
        contracts::CONTRACT_NAME,
        contracts::DESCRIPTION,
        contracts::EFFECTIVE_DATE,
        contracts::EXPIRATION_DATE,
        contracts::CATEGORY,
        contracts::AMOUNT,
        contracts::SUPPLIER,
    ])?;
    let records = ds
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(n, row)| {
            let amount = parse_amount(ds.name(), n, contracts::AMOUNT, &row[idx[6]])?;
            Some(ContractRecord {
                contract_id: row[idx[0]].clone(),
                contract_name: row[idx[1]].clone(),
                description: row[idx[2]].clone(),
                effective_date: parse_date(&row[idx[3]]),
                expiration_date: parse_date(&row[idx[4]]),
                category: row[idx[5]].clone(),
                total_value: amount,
                supplier: VendorId::new(row[idx[7]].as_str()),
            })
        })
        .collect();
    Ok(records)
}

pub fn project_records(ds: &Dataset) -> Result<Vec<ProjectRecord>, SourceError> {
    let idx = ds.column_indices(&[
        sourcing::PROJECT_ID,
        sourcing::PROJECT_NAME,
        sourcing::SHORT_DESCRIPTION,
        sourcing::CATEGORY,
        sourcing::BASELINE,
        sourcing::SUPPLIER,
    ])?;
    let records = ds
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(n, row)| {
            let amount = parse_amount(ds.name(), n, sourcing::BASELINE, &row[idx[4]])?;
            Some(ProjectRecord {
                project_id: row[idx[0]].clone(),
                project_name: row[idx[1]].clone(),
                short_description: row[idx[2]].clone(),
                category: row[idx[3]].clone(),
                baseline_spend: amount,
                supplier: VendorId::new(row[idx[5]].as_str()),
            })
        })
        .collect();
    Ok(records)
}

/// Parses a non-negative, finite €m amount. Logs and returns `None` otherwise.
fn parse_amount(dataset: &str, row: usize, column: &str, cell: &str) -> Option<f64> {
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        Ok(v) => {
            log::warn!("Dropping row {row} of '{dataset}': '{column}' is {v}, expected a non-negative amount");
            None
        }
        Err(_) => {
            log::warn!("Dropping row {row} of '{dataset}': '{column}' value '{cell}' is not a number");
            None
        }
    }
}

/// Parses a date cell in any of the accepted formats. Blank or unparseable
/// cells yield `None`.
pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(cell, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cell, fmt) {
            return Some(dt.date());
        }
    }
    log::debug!("Unrecognised date '{cell}'");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contracts_ds(rows: &[[&str; 8]]) -> Dataset {
        let headers = [
            contracts::CONTRACT_ID,
            contracts::CONTRACT_NAME,
            contracts::DESCRIPTION,
            contracts::EFFECTIVE_DATE,
            contracts::EXPIRATION_DATE,
            contracts::CATEGORY,
            contracts::AMOUNT,
            contracts::SUPPLIER,
        ];
        Dataset::new(
            contracts::DATASET,
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date("2024-03-15"), expected);
        assert_eq!(parse_date("2024-03-15 00:00:00"), expected);
        assert_eq!(parse_date("15.03.2024"), expected);
        assert_eq!(parse_date("03/15/2024"), expected);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_contract_extraction() {
        let ds = contracts_ds(&[
            ["CW1", "Cloud", "Hosting", "2021-01-01", "2024-12-31", "IT Infrastructure", "12.5", "Acme"],
            ["CW2", "Net", "WAN", "", "2025-01-01", "IT Infrastructure", "1", "Acme"],
        ]);
        let records = contract_records(&ds).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total_value, 12.5);
        assert_eq!(records[0].supplier, VendorId::new("Acme"));
        assert!(records[1].effective_date.is_none());
        assert!(records[1].expiration_date.is_some());
    }

    #[test]
    fn test_bad_amounts_drop_rows() {
        let ds = contracts_ds(&[
            ["CW1", "a", "b", "", "", "IT Infrastructure", "n/a", "Acme"],
            ["CW2", "a", "b", "", "", "IT Infrastructure", "-3", "Acme"],
            ["CW3", "a", "b", "", "", "IT Infrastructure", " 4.25 ", "Acme"],
        ]);
        let records = contract_records(&ds).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].contract_id, "CW3");
        assert_eq!(records[0].total_value, 4.25);
    }

    #[test]
    fn test_renamed_column_is_schema_error() {
        let ds = Dataset::new(
            spend::DATASET,
            vec!["Vendor".into(), spend::CATEGORY.into(), spend::SPEND_2024.into()],
            vec![],
        );
        match spend_records(&ds) {
            Err(SourceError::MissingColumn { column, .. }) => assert_eq!(column, spend::VENDOR),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_project_extraction() {
        let headers = [
            sourcing::PROJECT_ID,
            sourcing::PROJECT_NAME,
            sourcing::CATEGORY,
            sourcing::BASELINE,
            sourcing::SUPPLIER,
            sourcing::SHORT_DESCRIPTION,
        ];
        let ds = Dataset::new(
            sourcing::DATASET,
            headers.iter().map(|h| h.to_string()).collect(),
            vec![vec![
                "SP1".into(),
                "Laptop refresh".into(),
                "IT Infrastructure".into(),
                "3.75".into(),
                "Acme".into(),
                "Replace fleet".into(),
            ]],
        );
        let records = project_records(&ds).unwrap();
        assert_eq!(records[0].project_name, "Laptop refresh");
        assert_eq!(records[0].short_description, "Replace fleet");
        assert_eq!(records[0].baseline_spend, 3.75);
    }
}
