//! Typed rows extracted from the three input datasets.

use crate::ids::VendorId;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the IT spend extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendRecord {
    pub vendor: VendorId,
    pub category: String,
    /// Current-year spend in €m. Never negative.
    pub spend_2024: f64,
}

/// One row of the contracting report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub contract_id: String,
    pub contract_name: String,
    pub description: String,
    pub effective_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub category: String,
    /// Total contract value in €m.
    pub total_value: f64,
    pub supplier: VendorId,
}

/// The validity of a contract's date pair, used when formatting its term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractTerm {
    Years { start: i32, end: i32 },
    /// At least one of the dates is missing.
    Unknown,
    /// Expiration precedes the effective date.
    Inverted,
}

impl ContractRecord {
    pub fn term(&self) -> ContractTerm {
        match (self.effective_date, self.expiration_date) {
            (Some(start), Some(end)) if end < start => ContractTerm::Inverted,
            (Some(start), Some(end)) => ContractTerm::Years {
                start: start.year(),
                end: end.year(),
            },
            _ => ContractTerm::Unknown,
        }
    }
}

/// One row of the sourcing event participation extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project_id: String,
    pub project_name: String,
    pub short_description: String,
    pub category: String,
    /// Baseline spend in €m.
    pub baseline_spend: f64,
    pub supplier: VendorId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(effective: Option<NaiveDate>, expiration: Option<NaiveDate>) -> ContractRecord {
        ContractRecord {
            contract_id: "CW10001".into(),
            contract_name: "Contract 1".into(),
            description: "Cloud Services".into(),
            effective_date: effective,
            expiration_date: expiration,
            category: "IT Infrastructure".into(),
            total_value: 12.5,
            supplier: VendorId::new("Acme"),
        }
    }

    #[test]
    fn test_term_years() {
        let c = contract(NaiveDate::from_ymd_opt(2020, 1, 1), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(c.term(), ContractTerm::Years { start: 2020, end: 2025 });
    }

    #[test]
    fn test_term_unknown_when_a_date_is_missing() {
        let c = contract(NaiveDate::from_ymd_opt(2020, 1, 1), None);
        assert_eq!(c.term(), ContractTerm::Unknown);
        assert_eq!(contract(None, None).term(), ContractTerm::Unknown);
    }

    #[test]
    fn test_term_inverted() {
        let c = contract(NaiveDate::from_ymd_opt(2026, 1, 1), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(c.term(), ContractTerm::Inverted);
    }
}
