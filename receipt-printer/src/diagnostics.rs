//! Payment diagnostics
//!
//! Ad-hoc inspection of the payment data stored on invoices and POS
//! profiles, for chasing "wrong payment method on the receipt" reports.
//! Reports serialize to JSON and print as console summaries; they never
//! touch the records they describe.

use crate::render::payment_lines;
use pos_types::{Invoice, PosProfile};
use serde::Serialize;
use std::fmt;

/// One stored payment record, as the invoice holds it
#[derive(Debug, Clone, Serialize)]
pub struct PaymentDetail {
    /// Position in the stored payment table (0-based, storage order)
    pub index: usize,
    pub mode_of_payment: Option<String>,
    pub amount: f64,
    pub reference_no: Option<String>,
    pub is_default: bool,
}

/// Payment summary for a single invoice
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReport {
    pub invoice: String,
    pub customer: String,
    pub posting_date: String,
    pub grand_total: f64,
    pub change_amount: f64,
    pub pos_profile: Option<String>,
    pub payments_count: usize,
    /// Records with a non-zero amount
    pub active_payments_count: usize,
    /// Noteworthy but not an error: the receipt simply omits the section
    pub no_payments: bool,
    pub payments: Vec<PaymentDetail>,
    /// The payment lines the renderer would emit for this invoice
    pub printed_lines: Vec<String>,
}

/// Summarize the payment data stored on an invoice
pub fn inspect_payments(invoice: &Invoice) -> PaymentReport {
    let payments: Vec<PaymentDetail> = invoice
        .payments
        .iter()
        .enumerate()
        .map(|(index, p)| PaymentDetail {
            index,
            mode_of_payment: p.mode_of_payment.clone(),
            amount: p.amount,
            reference_no: p.reference_no.clone(),
            is_default: p.is_default,
        })
        .collect();

    PaymentReport {
        invoice: invoice.name.clone(),
        customer: invoice.customer_display().to_string(),
        posting_date: invoice.posting_date.to_string(),
        grand_total: invoice.grand_total,
        change_amount: invoice.change_amount.unwrap_or(0.0),
        pos_profile: invoice.pos_profile.clone(),
        payments_count: invoice.payments.len(),
        active_payments_count: invoice.active_payments().count(),
        no_payments: invoice.payments.is_empty(),
        payments,
        printed_lines: payment_lines(invoice),
    }
}

impl fmt::Display for PaymentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice:  {}", self.invoice)?;
        writeln!(f, "Customer: {} ({})", self.customer, self.posting_date)?;
        writeln!(
            f,
            "Total:    {:.2}  (change {:.2})",
            self.grand_total, self.change_amount
        )?;
        if let Some(profile) = &self.pos_profile {
            writeln!(f, "Profile:  {profile}")?;
        }
        writeln!(
            f,
            "Payments: {} stored, {} active",
            self.payments_count, self.active_payments_count
        )?;

        if self.no_payments {
            writeln!(f, "  !! no payment records - section will be omitted")?;
        }
        for p in &self.payments {
            writeln!(
                f,
                "  [{}] {} = {:.2}{}{}",
                p.index,
                p.mode_of_payment.as_deref().unwrap_or("(none)"),
                p.amount,
                if p.is_default { " [default]" } else { "" },
                p.reference_no
                    .as_deref()
                    .map(|r| format!(" ref={r}"))
                    .unwrap_or_default(),
            )?;
        }

        writeln!(f, "Receipt will show:")?;
        for line in &self.printed_lines {
            writeln!(f, "  {}", readable(line))?;
        }
        Ok(())
    }
}

/// One payment method row from a POS profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileMethodDetail {
    pub idx: u32,
    pub mode_of_payment: String,
    pub is_default: bool,
    pub allow_in_returns: bool,
}

/// Payment method summary for a POS profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub profile: String,
    pub methods_count: usize,
    pub default_method: Option<String>,
    /// Methods configured more than once (a common misconfiguration)
    pub duplicates: Vec<String>,
    pub methods: Vec<ProfileMethodDetail>,
}

/// Summarize the payment methods configured on a POS profile
pub fn inspect_profile(profile: &PosProfile) -> ProfileReport {
    let methods: Vec<ProfileMethodDetail> = profile
        .payments
        .iter()
        .map(|m| ProfileMethodDetail {
            idx: m.idx,
            mode_of_payment: m.mode_of_payment.clone(),
            is_default: m.is_default,
            allow_in_returns: m.allow_in_returns,
        })
        .collect();

    let mut duplicates = Vec::new();
    for (i, m) in profile.payments.iter().enumerate() {
        let repeated = profile.payments[..i]
            .iter()
            .any(|prev| prev.mode_of_payment == m.mode_of_payment);
        if repeated && !duplicates.contains(&m.mode_of_payment) {
            duplicates.push(m.mode_of_payment.clone());
        }
    }

    ProfileReport {
        profile: profile.name.clone(),
        methods_count: profile.payments.len(),
        default_method: profile.default_method().map(|m| m.mode_of_payment.clone()),
        duplicates,
        methods,
    }
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Profile:  {}", self.profile)?;
        writeln!(f, "Methods:  {}", self.methods_count)?;
        writeln!(
            f,
            "Default:  {}",
            self.default_method.as_deref().unwrap_or("(none)")
        )?;
        for m in &self.methods {
            writeln!(
                f,
                "  [{}] {}{}{}",
                m.idx,
                m.mode_of_payment,
                if m.is_default { " [default]" } else { "" },
                if m.allow_in_returns { "" } else { " [no returns]" },
            )?;
        }
        for dup in &self.duplicates {
            writeln!(f, "  !! duplicate method: {dup}")?;
        }
        Ok(())
    }
}

/// Swap ESC/POS emphasis codes for readable markers in console output
fn readable(line: &str) -> String {
    line.replace("\x1B\x45\x01", "[BOLD]")
        .replace("\x1B\x45\x00", "[/BOLD]")
        .replace("\x1B\x61\x01", "[CENTER]")
        .replace("\x1B\x61\x00", "[/CENTER]")
}
