//! Vendor profile content supplied by the external profile store.
//!
//! The on-disk representation uses the PascalCase keys of the store file
//! (`KeyAccountManagers`, `Financials`, `Msg`, ...). Every field is optional
//! in the file and defaults to empty.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Financials {
    pub revenue: String,
    pub market_cap: String,
    pub growth_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VendorProfile {
    pub financials: Financials,
    pub key_account_managers: Vec<String>,
    pub key_stakeholders: Vec<String>,
    pub market_trends: String,
    pub strategy: String,
    #[serde(rename = "Msg")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_store_entry() {
        let json = r#"{
            "KeyAccountManagers": ["Acme Manager 1, +49 123 456 7890"],
            "KeyStakeholders": [],
            "Financials": { "Revenue": "10 USD", "MarketCap": "20 USD", "GrowthRate": "3%" },
            "MarketTrends": "- Cloud first",
            "Strategy": "- Negotiate competitive pricing.",
            "Msg": "- Strengthen partnership for mutual growth."
        }"#;
        let profile: VendorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.financials.market_cap, "20 USD");
        assert_eq!(profile.key_account_managers.len(), 1);
        assert_eq!(profile.message, "- Strengthen partnership for mutual growth.");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile: VendorProfile = serde_json::from_str(r#"{ "Strategy": "x" }"#).unwrap();
        assert_eq!(profile.strategy, "x");
        assert!(profile.financials.revenue.is_empty());
        assert!(profile.key_stakeholders.is_empty());
    }
}
