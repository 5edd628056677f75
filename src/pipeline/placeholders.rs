//! The placeholder values of one fact sheet.

use chrono::NaiveDate;
use factsheet_template::PlaceholderMap;
use factsheet_types::{Financials, VendorId, VendorProfile};
use itertools::Itertools;

pub const TIMESTAMP: &str = "[Timestamp]";
pub const VENDOR_NAME: &str = "[Vendor Name]";
pub const KEY_ACCOUNT_MANAGERS: &str = "[KeyAccountManagers]";
pub const KEY_STAKEHOLDERS: &str = "[KeyStakeholders]";
pub const FINANCIALS: &str = "[Financials]";
pub const MARKET_TRENDS: &str = "[MarketTrends]";
pub const STRATEGY: &str = "[Strategy]";
pub const MESSAGE: &str = "[Msg]";

/// Every token, in substitution order.
pub const TOKENS: [&str; 8] = [
    TIMESTAMP,
    VENDOR_NAME,
    KEY_ACCOUNT_MANAGERS,
    KEY_STAKEHOLDERS,
    FINANCIALS,
    MARKET_TRENDS,
    STRATEGY,
    MESSAGE,
];

const NOT_AVAILABLE: &str = "Data not available";
const BULLET: &str = "•";

pub fn timestamp(date: NaiveDate) -> String {
    format!("VENDOR FACT SHEET - AS AT {}", date.format("%d.%m.%Y"))
}

/// Builds the map for `vendor`. A missing profile, or a profile with empty
/// fields, yields the "data not available" variants.
pub fn build_placeholders(vendor: &VendorId, profile: Option<&VendorProfile>, date: NaiveDate) -> PlaceholderMap {
    let empty = VendorProfile::default();
    let profile = profile.unwrap_or(&empty);

    PlaceholderMap::new()
        .with(TIMESTAMP, timestamp(date))
        .with(VENDOR_NAME, vendor.as_str())
        .with(KEY_ACCOUNT_MANAGERS, bullet_list(&profile.key_account_managers))
        .with(KEY_STAKEHOLDERS, bullet_list(&profile.key_stakeholders))
        .with(FINANCIALS, financials(&profile.financials))
        .with(
            MARKET_TRENDS,
            bullet_text(&profile.market_trends).unwrap_or_else(|| bullet("Market trend data not available")),
        )
        .with(STRATEGY, bullet_text(&profile.strategy).unwrap_or_else(|| bullet(NOT_AVAILABLE)))
        .with(MESSAGE, bullet_text(&profile.message).unwrap_or_else(|| bullet(NOT_AVAILABLE)))
}

fn bullet(line: &str) -> String {
    format!("{BULLET} {line}")
}

fn bullet_list(items: &[String]) -> String {
    let lines = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(bullet)
        .join("\n");
    if lines.is_empty() { bullet(NOT_AVAILABLE) } else { lines }
}

/// One bullet per non-blank line, with any leading `-` or `•` marker dropped.
fn bullet_text(text: &str) -> Option<String> {
    let lines = text
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '•']).trim())
        .filter(|line| !line.is_empty())
        .map(bullet)
        .join("\n");
    (!lines.is_empty()).then_some(lines)
}

fn financials(financials: &Financials) -> String {
    let metric = |value: &str| {
        let value = value.trim();
        if value.is_empty() { NOT_AVAILABLE.to_string() } else { value.to_string() }
    };
    [
        ("Revenue", metric(&financials.revenue)),
        ("Market Cap", metric(&financials.market_cap)),
        ("Growth Rate", metric(&financials.growth_rate)),
    ]
    .iter()
    .map(|(label, value)| bullet(&format!("{label}: {value}")))
    .join("\n")
}
