//! Order summary - the priced view of a basket at submission time

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced basket line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    /// Product name, `None` when the id is unknown to the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub quantity: u32,
    /// Pack price; zero for unknown ids
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl OrderLine {
    /// Whether the catalog could resolve this line's product id
    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}

/// Submitted order snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Client-generated reference (UUID v4)
    pub reference: String,
    /// Submission time (Unix millis)
    pub submitted_at: i64,
    pub lines: Vec<OrderLine>,
    pub total_units: u64,
    pub total_price: Decimal,
}

impl OrderSummary {
    /// Lines whose product id the catalog could not resolve
    pub fn unresolved_lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.iter().filter(|line| !line.is_resolved())
    }
}
