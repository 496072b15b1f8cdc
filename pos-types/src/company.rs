//! Company info for the receipt header
//!
//! Resolved once by the caller from the company and address records. Lookups
//! that fail leave fields empty; the renderer skips empty fields instead of
//! erroring.

use serde::{Deserialize, Serialize};

/// Company identity printed on the receipt header and contact footer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    /// Taxpayer number (NUIT).
    pub tax_id: String,
    pub phone: String,
    pub email: String,
}

impl CompanyInfo {
    /// Fallback info when the company record cannot be resolved: keep the
    /// display name, leave everything else empty.
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
