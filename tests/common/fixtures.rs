use std::path::Path;

pub const IT_SPEND_FILE: &str = "it_spend.csv";
pub const CONTRACTS_FILE: &str = "contracting_report.csv";
pub const SOURCING_FILE: &str = "sourcing_events.csv";
pub const PROFILES_FILE: &str = "vendors.json";

pub const IT_SPEND_HEADERS: [&str; 3] = ["Vendor Name", "Category", "Spend 2024 (€m)"];

pub const CONTRACT_HEADERS: [&str; 8] = [
    "[PCW] Contract Id",
    "[PCW]Contract (Contract)",
    "[PCW] Description",
    "[PCW]Contract (Effective Date)",
    "[PCW]Contract (Expiration Date)",
    "[PCW] OneProcurement Category",
    "sum(Contract Amount) (€m)",
    "[PCW]Affected Parties (Supplier Name (L1))",
];

pub const SOURCING_HEADERS: [&str; 6] = [
    "[SPRJ]Project (Project Id)",
    "[SPRJ]Project (Project Name)",
    "[SPRJ] OneProcurement Category",
    "sum(Baseline Spend) (€m)",
    "[SPT]Supplier (Supplier Name (L1))",
    "Short Description",
];

pub fn write_csv(path: &Path, headers: &[&str], rows: &[&[&str]]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(*row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Vendors across the three inputs:
/// - Acme: spend, two infrastructure contracts, one project, has a profile
/// - Initech: spend only, no profile
/// - Globex: a contract only (its spend is outside the IT categories)
/// - Hooli: a sourcing event only
pub fn write_standard_inputs(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    write_csv(
        &dir.join(IT_SPEND_FILE),
        &IT_SPEND_HEADERS,
        &[
            &["Acme", "IT Hardware", "10.5"],
            &["Acme", "Telecoms and Network", "2.25"],
            &["Globex", "Software", "5"],
            &["Initech", "IT Hardware", "3"],
        ],
    )?;
    write_csv(
        &dir.join(CONTRACTS_FILE),
        &CONTRACT_HEADERS,
        &[
            &["CW1001", "Server Racks", "Rack server supply", "2022-01-01", "2025-12-31", "IT Infrastructure", "4.2", "Acme"],
            &["CW1002", "WAN Links", "Managed WAN", "01.07.2023", "", "IT Infrastructure", "1.75", "Acme"],
            &["CW1003", "Cleaning", "Office cleaning", "2023-01-01", "2024-01-01", "Facilities", "0.3", "Acme"],
            &["CW2001", "Storage", "SAN storage", "2021-05-01", "2024-04-30", "IT Infrastructure", "2", "Globex"],
        ],
    )?;
    write_csv(
        &dir.join(SOURCING_FILE),
        &SOURCING_HEADERS,
        &[
            &["SP-17", "DC Refresh", "IT Infrastructure", "3.5", "Acme", "Datacentre hardware refresh"],
            &["SP-18", "Network RFP", "IT Infrastructure", "1", "Hooli", "Campus network tender"],
            &["SP-19", "Catering", "Facilities", "0.2", "Acme", "Canteen services"],
        ],
    )?;
    Ok(())
}

pub fn write_profiles(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let profiles = serde_json::json!({
        "Acme": {
            "KeyAccountManagers": ["Jane Doe", "John Roe"],
            "KeyStakeholders": ["CIO Office"],
            "Financials": { "Revenue": "$12.4B", "MarketCap": "$30B", "GrowthRate": "4.5%" },
            "MarketTrends": "- Hybrid cloud adoption\n- Edge computing",
            "Strategy": "Expand managed infrastructure services",
            "Msg": "Preferred hardware partner"
        }
    });
    std::fs::write(dir.join(PROFILES_FILE), serde_json::to_string_pretty(&profiles)?)?;
    Ok(())
}
