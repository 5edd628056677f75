mod common;

use common::fixtures::{self, CONTRACT_HEADERS, IT_SPEND_FILE, SOURCING_HEADERS};
use common::pdf_assertions::count_form_xobjects;
use common::{GeneratedPdf, TestResult, Workspace};
use factsheet::source::SourceError;
use factsheet::traits::{ProfileError, ProfileLookup, ProfileProvider};
use factsheet::types::VendorId;
use factsheet::PipelineError;
use std::sync::Arc;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn file_names(dir: &std::path::Path) -> Result<Vec<String>, std::io::Error> {
    let mut names = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<Vec<_>, _>>()?;
    names.sort();
    Ok(names)
}

#[test]
fn test_acme_end_to_end() -> TestResult {
    init_logger();
    let ws = Workspace::new()?;
    let summary = ws.builder().build()?.run()?;

    assert_eq!(summary.processed.len(), 2);
    assert!(summary.failed.is_empty(), "{summary}");
    assert_eq!(
        file_names(&ws.output_dir())?,
        vec!["Acme_Vendor_Fact_Sheet.pdf", "Initech_Vendor_Fact_Sheet.pdf"]
    );
    assert!(ws.chart("Acme").is_file());

    let pdf = GeneratedPdf::from_path(&ws.sheet("Acme"))?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Acme");
    assert_pdf_contains_text!(pdf, "VENDOR FACT SHEET - AS AT 05.03.2024");
    assert_pdf_contains_text!(pdf, "Jane Doe");
    assert_pdf_contains_text!(pdf, "Revenue: $12.4B");
    assert_pdf_contains_text!(pdf, "Hybrid cloud adoption");
    assert_pdf_not_contains_text!(pdf, "[Vendor Name]");
    assert_pdf_not_contains_text!(pdf, "[Financials]");
    assert_pdf_has_font!(pdf, "Helvetica-Bold");
    assert_eq!(count_form_xobjects(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_tables_hold_only_infrastructure_rows() -> TestResult {
    let ws = Workspace::new()?;
    ws.builder().build()?.run()?;

    let pdf = GeneratedPdf::from_path(&ws.sheet("Acme"))?;
    assert_pdf_contains_text!(pdf, "CW1001");
    assert_pdf_contains_text!(pdf, "2022-2025");
    assert_pdf_contains_text!(pdf, "CW1002");
    assert_pdf_contains_text!(pdf, "N/A");
    assert_pdf_contains_text!(pdf, "4.20");
    assert_pdf_contains_text!(pdf, "SP-17");
    assert_pdf_not_contains_text!(pdf, "CW1003");
    assert_pdf_not_contains_text!(pdf, "SP-19");
    // another vendor's contract
    assert_pdf_not_contains_text!(pdf, "CW2001");
    Ok(())
}

#[test]
fn test_vendor_without_profile_still_gets_a_sheet() -> TestResult {
    let ws = Workspace::new()?;
    ws.builder().build()?.run()?;

    let pdf = GeneratedPdf::from_path(&ws.sheet("Initech"))?;
    assert_pdf_contains_text!(pdf, "Initech");
    assert_pdf_contains_text!(pdf, "Revenue: Data not available");
    assert_pdf_contains_text!(pdf, "Market trend data not available");
    assert_pdf_not_contains_text!(pdf, "[Financials]");
    Ok(())
}

#[test]
fn test_vendors_without_spend_are_skipped() -> TestResult {
    let ws = Workspace::new()?;
    let summary = ws.builder().build()?.run()?;

    let skipped: Vec<&str> = summary.skipped.iter().map(|(v, _)| v.as_str()).collect();
    assert_eq!(skipped, vec!["Globex", "Hooli"]);
    assert!(summary.skipped.iter().all(|(_, reason)| reason == "no IT spend rows"));
    assert!(!ws.sheet("Globex").exists());
    assert!(!ws.chart("Hooli").exists());
    Ok(())
}

#[derive(Debug)]
struct Unreachable;

impl ProfileProvider for Unreachable {
    fn lookup(&self, _vendor: &VendorId) -> Result<ProfileLookup, ProfileError> {
        Err(ProfileError::Unavailable("connection refused".into()))
    }

    fn name(&self) -> &'static str {
        "unreachable"
    }
}

#[test]
fn test_failing_profile_lookup_degrades() -> TestResult {
    init_logger();
    let ws = Workspace::new()?;
    let summary = ws
        .builder()
        .with_profile_provider(Arc::new(Unreachable))
        .build()?
        .run()?;

    assert_eq!(summary.processed.len(), 2);
    let pdf = GeneratedPdf::from_path(&ws.sheet("Acme"))?;
    assert_pdf_contains_text!(pdf, "Revenue: Data not available");
    assert_pdf_not_contains_text!(pdf, "Jane Doe");
    Ok(())
}

#[test]
fn test_rerun_overwrites_outputs() -> TestResult {
    let ws = Workspace::new()?;
    let pipeline = ws.builder().build()?;
    pipeline.run()?;
    let first = std::fs::read(ws.chart("Acme"))?;
    pipeline.run()?;

    assert_eq!(file_names(&ws.output_dir())?.len(), 2);
    assert_eq!(file_names(&ws.chart_dir())?.len(), 2);
    // same seed, same simulated history
    assert_eq!(std::fs::read(ws.chart("Acme"))?, first);
    Ok(())
}

#[test]
fn test_renamed_column_aborts_the_batch() -> TestResult {
    let ws = Workspace::new()?;
    fixtures::write_csv(
        &ws.path(IT_SPEND_FILE),
        &["Vendor", "Category", "Spend 2024 (€m)"],
        &[&["Acme", "IT Hardware", "1"]],
    )?;

    let result = ws.builder().build()?.run();
    match result {
        Err(PipelineError::Source(SourceError::MissingColumn { column, .. })) => {
            assert_eq!(column, "Vendor Name");
        }
        other => panic!("expected a missing column error, got {other:?}"),
    }
    assert!(!ws.output_dir().exists());
    Ok(())
}

#[test]
fn test_cleaned_tables_are_exported() -> TestResult {
    let ws = Workspace::new()?;
    ws.builder().with_cleaned_dir(ws.path("clean")).build()?.run()?;

    assert_eq!(
        file_names(&ws.path("clean"))?,
        vec![
            "cleaned_Supplier_fact_sheet_Contracting_report.csv",
            "cleaned_Supplier_fact_sheet_IT_spend_2024.csv",
            "cleaned_Supplier_fact_sheet_sourcing_event_participation.csv",
        ]
    );

    let mut reader = csv::Reader::from_path(ws.path("clean").join("cleaned_Supplier_fact_sheet_Contracting_report.csv"))?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    assert_eq!(headers, CONTRACT_HEADERS);
    assert_eq!(reader.records().count(), 3);

    let mut reader = csv::Reader::from_path(
        ws.path("clean").join("cleaned_Supplier_fact_sheet_sourcing_event_participation.csv"),
    )?;
    assert_eq!(reader.headers()?.len(), SOURCING_HEADERS.len());
    assert_eq!(reader.records().count(), 2);
    Ok(())
}

#[test]
fn test_vendor_names_with_separators() -> TestResult {
    let ws = Workspace::new()?;
    fixtures::write_csv(
        &ws.path(IT_SPEND_FILE),
        &fixtures::IT_SPEND_HEADERS,
        &[&["AT&T / EMEA", "Telecoms and Network", "7"]],
    )?;
    let summary = ws.builder().build()?.run()?;

    assert_eq!(summary.processed.len(), 1);
    assert!(ws.sheet("AT&T _ EMEA").is_file());
    let pdf = GeneratedPdf::from_path(&ws.sheet("AT&T _ EMEA"))?;
    assert_pdf_contains_text!(pdf, "AT&T / EMEA");
    Ok(())
}

#[test]
fn test_vendor_names_sharing_a_file_stem() -> TestResult {
    init_logger();
    let ws = Workspace::new()?;
    fixtures::write_csv(
        &ws.path(IT_SPEND_FILE),
        &fixtures::IT_SPEND_HEADERS,
        &[&["A/B", "IT Hardware", "3"], &["A_B", "IT Hardware", "5"]],
    )?;
    let summary = ws.builder().build()?.run()?;

    // "A/B" sorts first and keeps the stem
    let processed: Vec<&str> = summary.processed.iter().map(|r| r.vendor.as_str()).collect();
    assert_eq!(processed, vec!["A/B"]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0.as_str(), "A_B");
    assert!(summary.failed[0].1.contains("already taken by A/B"), "{summary}");

    assert_eq!(file_names(&ws.output_dir())?, vec!["A_B_Vendor_Fact_Sheet.pdf"]);
    assert_eq!(file_names(&ws.chart_dir())?, vec!["A_B_spend_chart.pdf"]);
    let pdf = GeneratedPdf::from_path(&ws.sheet("A_B"))?;
    assert_pdf_contains_text!(pdf, "A/B");
    Ok(())
}

#[test]
fn test_failed_vendor_does_not_stop_the_batch() -> TestResult {
    init_logger();
    let ws = Workspace::new()?;
    // a directory where Acme's chart should go makes that write fail
    std::fs::create_dir_all(ws.chart("Acme"))?;
    let summary = ws.builder().build()?.run()?;

    let failed: Vec<&str> = summary.failed.iter().map(|(v, _)| v.as_str()).collect();
    assert_eq!(failed, vec!["Acme"]);
    let processed: Vec<&str> = summary.processed.iter().map(|r| r.vendor.as_str()).collect();
    assert_eq!(processed, vec!["Initech"]);
    assert_eq!(summary.total(), 4);

    assert!(!ws.sheet("Acme").exists());
    assert_eq!(file_names(&ws.output_dir())?, vec!["Initech_Vendor_Fact_Sheet.pdf"]);
    let pdf = GeneratedPdf::from_path(&ws.sheet("Initech"))?;
    assert_pdf_contains_text!(pdf, "Initech");
    Ok(())
}
