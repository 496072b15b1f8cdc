//! POS profile model
//!
//! A profile defines which payment methods a terminal offers, their display
//! order and which one is preselected. Consumed by the payment diagnostics;
//! the renderer only reads what is already stored on the invoice.

use serde::{Deserialize, Serialize};

/// Payment method row configured on a POS profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePaymentMethod {
    pub mode_of_payment: String,
    #[serde(default, rename = "default")]
    pub is_default: bool,
    /// Display order within the profile (1-based).
    #[serde(default)]
    pub idx: u32,
    #[serde(default = "default_true")]
    pub allow_in_returns: bool,
}

fn default_true() -> bool {
    true
}

/// POS profile configuration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosProfile {
    pub name: String,
    #[serde(default)]
    pub payments: Vec<ProfilePaymentMethod>,
}

impl PosProfile {
    /// The preselected payment method, if any row carries the default flag.
    pub fn default_method(&self) -> Option<&ProfilePaymentMethod> {
        self.payments.iter().find(|m| m.is_default)
    }
}
