//! Shared types for POS receipt printing
//!
//! Data models exchanged between the hosting POS application and the
//! receipt rendering crate: invoices, profile configuration, render
//! settings, and resolved company info.

pub mod company;
pub mod invoice;
pub mod profile;
pub mod settings;

// Re-exports
pub use company::CompanyInfo;
pub use invoice::{DocStatus, Invoice, LineItem, PaymentRecord, TaxLine};
pub use profile::{PosProfile, ProfilePaymentMethod};
pub use settings::RenderSettings;
