//! Receipt render settings
//!
//! Singleton configuration owned by the hosting application. Every field is
//! optional on the wire; the renderer resolves defaults at the boundary.

use serde::{Deserialize, Serialize};

/// Settings controlling receipt layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Characters per line. 80mm paper fits 48, 58mm fits 32.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_width: Option<usize>,
    /// Free text printed under the company header. May contain simple
    /// `<br>`/`<p>` markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_header: Option<String>,
    /// Free text printed above the status line. Same markup rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_footer: Option<String>,
    #[serde(default)]
    pub enable_qr_code: bool,
}
