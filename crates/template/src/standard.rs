//! The built-in single-page fact sheet.
//!
//! A 16:9 slide: a banner carrying the date line, the vendor name, six
//! profile sections down the left half, and the right half reserved for the
//! spend chart and the two tables that the assembler places at run time.

use crate::Template;
use crate::builders::*;
use factsheet_idf::Document;
use factsheet_types::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

pub const PAGE_WIDTH: f32 = 960.0;
pub const PAGE_HEIGHT: f32 = 540.0;

/// Where the run-time content goes on the standard page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardLayout {
    pub page: usize,
    pub chart_frame: Rect,
    pub contracts_origin: Point,
    pub projects_origin: Point,
}

impl Default for StandardLayout {
    fn default() -> Self {
        Self {
            page: 0,
            chart_frame: Rect::new(500.0, 48.0, 436.0, 220.0),
            contracts_origin: Point::new(500.0, 296.0),
            projects_origin: Point::new(500.0, 412.0),
        }
    }
}

fn section(x: f32, y: f32, width: f32, height: f32, title: &str, name: &str, token: &str) -> [TextBox; 2] {
    [
        TextBox::new(x, y, width, 16.0).paragraph(h2(title)).padding(0.0),
        TextBox::new(x, y + 16.0, width, height).named(name).paragraph(p(token)),
    ]
}

pub fn standard_template() -> Template {
    let layout = StandardLayout::default();
    let mut page = PageBuilder::new(PAGE_WIDTH, PAGE_HEIGHT)
        .element(rect(0.0, 0.0, PAGE_WIDTH, 36.0, BRAND_BLUE))
        .element(
            TextBox::new(24.0, 8.0, 600.0, 24.0)
                .named("timestamp")
                .paragraph(banner("[Timestamp]"))
                .padding(0.0),
        )
        .element(
            TextBox::new(24.0, 44.0, 440.0, 34.0)
                .named("vendor-name")
                .paragraph(h1("[Vendor Name]"))
                .padding(0.0),
        )
        .element(rect(24.0, 80.0, 440.0, 1.0, Color::gray(200)));

    let sections = [
        section(24.0, 88.0, 212.0, 60.0, "Financials", "financials", "[Financials]"),
        section(252.0, 88.0, 212.0, 60.0, "Key Account Managers", "key-account-managers", "[KeyAccountManagers]"),
        section(24.0, 172.0, 212.0, 76.0, "Key Stakeholders", "key-stakeholders", "[KeyStakeholders]"),
        section(252.0, 172.0, 212.0, 76.0, "Market Trends", "market-trends", "[MarketTrends]"),
        section(24.0, 272.0, 440.0, 96.0, "Strategy", "strategy", "[Strategy]"),
        section(24.0, 392.0, 440.0, 116.0, "Key Messages", "message", "[Msg]"),
    ];
    for [heading, body] in sections {
        page = page.element(heading).element(body);
    }

    let contracts_heading_y = layout.contracts_origin.y - 20.0;
    let projects_heading_y = layout.projects_origin.y - 20.0;
    page = page
        .element(
            TextBox::new(layout.contracts_origin.x, contracts_heading_y, 436.0, 16.0)
                .paragraph(h2("IT Infrastructure Contracts"))
                .padding(0.0),
        )
        .element(
            TextBox::new(layout.projects_origin.x, projects_heading_y, 436.0, 16.0)
                .paragraph(h2("Sourcing Event Participation"))
                .padding(0.0),
        )
        .element(
            TextBox::new(24.0, 516.0, 912.0, 16.0)
                .paragraph(caption("Spend before 2024 is estimated. Profile content is supplied by the vendor profile store."))
                .padding(0.0),
        );

    Template {
        name: "standard".to_string(),
        document: Document::new(vec![page.build()]),
    }
}
