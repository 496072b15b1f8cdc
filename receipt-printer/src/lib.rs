//! # receipt-printer
//!
//! ESC/POS receipt rendering for 80mm thermal printers.
//!
//! ## Scope
//!
//! This crate turns a POS invoice into printable output:
//! - ESC/POS line building (bold, centering, double height)
//! - fixed-width layout helpers (wrapping, columns, money)
//! - the receipt renderer itself
//! - Windows-1252 payload encoding
//! - payment diagnostics for invoices and POS profiles
//!
//! Talking to a physical printer (TCP, drivers) is the caller's job; the
//! output here is the payload a transport would send.
//!
//! ## Example
//!
//! ```ignore
//! use receipt_printer::ReceiptRenderer;
//!
//! let receipt = ReceiptRenderer::new(&invoice, &settings, &company, &nuit).render();
//! for line in receipt.lines() {
//!     println!("{line}");
//! }
//! let bytes = receipt_printer::to_printer_bytes(&receipt.to_payload());
//! ```

mod diagnostics;
mod encoding;
mod error;
mod escpos;
mod layout;
mod render;
mod source;

// Re-exports
pub use diagnostics::{
    PaymentDetail, PaymentReport, ProfileMethodDetail, ProfileReport, inspect_payments,
    inspect_profile,
};
pub use encoding::to_printer_bytes;
pub use error::{SourceError, SourceResult};
pub use escpos::ReceiptBuilder;
pub use layout::{
    dashed_line, format_amount, format_custom_block, format_table_row, pad_cols, solid_line,
    truncate_cols, wrap_text,
};
pub use render::{DEFAULT_WIDTH, ReceiptRenderer, RenderedReceipt};
pub use source::{
    PosDataSource, resolve_company, resolve_customer_tax_id, resolve_settings, resolve_width,
};
