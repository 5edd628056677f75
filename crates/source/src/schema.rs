//! Column names and cleaning filters of the three input extracts.
//!
//! Names are matched exactly, including brackets and spacing.

use crate::dataset::{Filter, Predicate};

pub mod spend {
    pub const DATASET: &str = "IT spend";
    pub const VENDOR: &str = "Vendor Name";
    pub const CATEGORY: &str = "Category";
    pub const SPEND_2024: &str = "Spend 2024 (€m)";
    pub const CLEANED_FILE: &str = "cleaned_Supplier_fact_sheet_IT_spend_2024.csv";
}

pub mod contracts {
    pub const DATASET: &str = "Contracting report";
    pub const CONTRACT_ID: &str = "[PCW] Contract Id";
    pub const CONTRACT_NAME: &str = "[PCW]Contract (Contract)";
    pub const DESCRIPTION: &str = "[PCW] Description";
    pub const EFFECTIVE_DATE: &str = "[PCW]Contract (Effective Date)";
    pub const EXPIRATION_DATE: &str = "[PCW]Contract (Expiration Date)";
    pub const CATEGORY: &str = "[PCW] OneProcurement Category";
    pub const AMOUNT: &str = "sum(Contract Amount) (€m)";
    pub const SUPPLIER: &str = "[PCW]Affected Parties (Supplier Name (L1))";
    pub const CLEANED_FILE: &str = "cleaned_Supplier_fact_sheet_Contracting_report.csv";
}

pub mod sourcing {
    pub const DATASET: &str = "Sourcing events";
    pub const PROJECT_ID: &str = "[SPRJ]Project (Project Id)";
    pub const PROJECT_NAME: &str = "[SPRJ]Project (Project Name)";
    pub const CATEGORY: &str = "[SPRJ] OneProcurement Category";
    pub const BASELINE: &str = "sum(Baseline Spend) (€m)";
    pub const SUPPLIER: &str = "[SPT]Supplier (Supplier Name (L1))";
    pub const SHORT_DESCRIPTION: &str = "Short Description";
    pub const CLEANED_FILE: &str = "cleaned_Supplier_fact_sheet_sourcing_event_participation.csv";
}

pub const IT_SPEND_CATEGORIES: [&str; 2] = ["IT Hardware", "Telecoms and Network"];
pub const IT_INFRASTRUCTURE: &str = "IT Infrastructure";

pub fn spend_filter() -> Filter {
    Filter::new(spend::CATEGORY, Predicate::one_of(IT_SPEND_CATEGORIES))
}

pub fn contracts_filter() -> Filter {
    Filter::new(contracts::CATEGORY, Predicate::equals(IT_INFRASTRUCTURE))
}

pub fn sourcing_filter() -> Filter {
    Filter::new(sourcing::CATEGORY, Predicate::equals(IT_INFRASTRUCTURE))
}
