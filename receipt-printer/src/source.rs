//! Boundary between the renderer and the hosting data layer
//!
//! The host application owns the actual records (database, API, cache);
//! this crate only sees them through [`PosDataSource`]. Lookup failures are
//! degraded to defaults here, once, so the renderer never deals with missing
//! data and never fails.

use crate::error::SourceResult;
use pos_types::{CompanyInfo, PosProfile, RenderSettings};
use tracing::warn;

use crate::render::DEFAULT_WIDTH;

/// Record lookups provided by the hosting application
pub trait PosDataSource {
    /// Company record with a resolved postal address
    fn company(&self, name: &str) -> SourceResult<CompanyInfo>;

    /// Customer taxpayer number (NUIT)
    fn customer_tax_id(&self, customer: &str) -> SourceResult<String>;

    /// Receipt render settings singleton
    fn settings(&self) -> SourceResult<RenderSettings>;

    /// POS profile configuration (used by diagnostics)
    fn profile(&self, name: &str) -> SourceResult<PosProfile>;
}

/// Resolve company info, degrading to name-only on failure
pub fn resolve_company(source: &impl PosDataSource, company: &str) -> CompanyInfo {
    match source.company(company) {
        Ok(info) => info,
        Err(e) => {
            warn!(company, error = %e, "company lookup failed, printing name only");
            CompanyInfo::name_only(company)
        }
    }
}

/// Resolve the customer NUIT, degrading to empty on failure
pub fn resolve_customer_tax_id(source: &impl PosDataSource, customer: &str) -> String {
    match source.customer_tax_id(customer) {
        Ok(tax_id) => tax_id,
        Err(e) => {
            warn!(customer, error = %e, "customer lookup failed, omitting NUIT");
            String::new()
        }
    }
}

/// Resolve render settings, degrading to defaults on failure
pub fn resolve_settings(source: &impl PosDataSource) -> RenderSettings {
    match source.settings() {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "settings lookup failed, using defaults");
            RenderSettings::default()
        }
    }
}

/// Effective paper width for a settings record
pub fn resolve_width(settings: &RenderSettings) -> usize {
    match settings.paper_width {
        Some(w) if w > 0 => w,
        _ => DEFAULT_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    struct FailingSource;

    impl PosDataSource for FailingSource {
        fn company(&self, name: &str) -> SourceResult<CompanyInfo> {
            Err(SourceError::NotFound(name.to_string()))
        }

        fn customer_tax_id(&self, customer: &str) -> SourceResult<String> {
            Err(SourceError::Backend(format!("no connection for {customer}")))
        }

        fn settings(&self) -> SourceResult<RenderSettings> {
            Err(SourceError::Backend("settings table missing".into()))
        }

        fn profile(&self, name: &str) -> SourceResult<PosProfile> {
            Err(SourceError::NotFound(name.to_string()))
        }
    }

    #[test]
    fn failed_company_lookup_keeps_name() {
        let info = resolve_company(&FailingSource, "Mercearia Central");
        assert_eq!(info.name, "Mercearia Central");
        assert!(info.address.is_empty());
        assert!(info.tax_id.is_empty());
        assert!(info.phone.is_empty());
        assert!(info.email.is_empty());
    }

    #[test]
    fn failed_customer_lookup_gives_empty_nuit() {
        assert_eq!(resolve_customer_tax_id(&FailingSource, "CUST-1"), "");
    }

    #[test]
    fn failed_settings_lookup_gives_defaults() {
        let settings = resolve_settings(&FailingSource);
        assert_eq!(resolve_width(&settings), DEFAULT_WIDTH);
        assert!(settings.receipt_footer.is_none());
        assert!(!settings.enable_qr_code);
    }

    #[test]
    fn zero_width_falls_back_to_default() {
        let settings = RenderSettings {
            paper_width: Some(0),
            ..Default::default()
        };
        assert_eq!(resolve_width(&settings), DEFAULT_WIDTH);

        let settings = RenderSettings {
            paper_width: Some(32),
            ..Default::default()
        };
        assert_eq!(resolve_width(&settings), 32);
    }
}
