//! POS invoice model
//!
//! Read-only input to the receipt renderer. Field names follow the hosting
//! application's document schema, so invoices deserialize straight from its
//! API payloads.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Document workflow state, integer-coded on the wire (0/1/2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum DocStatus {
    #[default]
    Draft,
    Submitted,
    Cancelled,
}

impl From<u8> for DocStatus {
    fn from(value: u8) -> Self {
        match value {
            1 => DocStatus::Submitted,
            2 => DocStatus::Cancelled,
            _ => DocStatus::Draft,
        }
    }
}

impl From<DocStatus> for u8 {
    fn from(value: DocStatus) -> Self {
        match value {
            DocStatus::Draft => 0,
            DocStatus::Submitted => 1,
            DocStatus::Cancelled => 2,
        }
    }
}

/// One sold item on the invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub item_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    pub qty: f64,
    pub amount: f64,
}

/// Tax or charge line applied to the invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxLine {
    pub description: String,
    pub tax_amount: f64,
}

/// Payment record stored on the invoice, in profile display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_of_payment: Option<String>,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
    #[serde(default, rename = "default")]
    pub is_default: bool,
    /// Ordinal position within the invoice's payment table (1-based).
    #[serde(default)]
    pub idx: u32,
}

/// POS invoice document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Document number (e.g. "POS-INV-2024-00001").
    pub name: String,
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub posting_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_time: Option<NaiveTime>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub taxes: Vec<TaxLine>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_total: Option<f64>,
    pub grand_total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_amount: Option<f64>,
    #[serde(default)]
    pub docstatus: DocStatus,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_profile: Option<String>,
}

impl Invoice {
    /// Customer display name, falling back to the customer reference.
    pub fn customer_display(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(&self.customer)
    }

    /// Net total before taxes, falling back to the gross total.
    pub fn subtotal(&self) -> f64 {
        self.net_total.unwrap_or(self.total)
    }

    /// Payment records with a non-zero amount.
    pub fn active_payments(&self) -> impl Iterator<Item = &PaymentRecord> {
        self.payments.iter().filter(|p| p.amount != 0.0)
    }
}

impl LineItem {
    /// Display name, falling back to the item code.
    pub fn display_name(&self) -> &str {
        self.item_name.as_deref().unwrap_or(&self.item_code)
    }
}
