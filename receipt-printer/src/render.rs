//! Receipt renderer
//!
//! Turns a POS invoice plus resolved company/customer info into the ESC/POS
//! line sequence for an 80mm thermal receipt. Pure function of its inputs:
//! no lookups, no I/O, no mutation of the invoice.

use crate::escpos::ReceiptBuilder;
use crate::layout::{format_amount, format_custom_block, format_table_row, truncate_cols};
use crate::source::resolve_width;
use chrono::NaiveTime;
use pos_types::{CompanyInfo, DocStatus, Invoice, RenderSettings};
use tracing::debug;

/// Characters per line for 80mm thermal paper
pub const DEFAULT_WIDTH: usize = 48;

/// Rendered receipt: an ordered, immutable sequence of output lines
///
/// Each line is either plain text or text wrapped in ESC/POS emphasis pairs.
/// The transport joins the lines with `\n` and ships them to the printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReceipt {
    lines: Vec<String>,
}

impl RenderedReceipt {
    /// Output lines in print order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the receipt, yielding its lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Newline-joined payload for the transport
    pub fn to_payload(&self) -> String {
        self.lines.join("\n")
    }
}

/// Receipt renderer for a single invoice
pub struct ReceiptRenderer<'a> {
    invoice: &'a Invoice,
    settings: &'a RenderSettings,
    company: &'a CompanyInfo,
    customer_tax_id: &'a str,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(
        invoice: &'a Invoice,
        settings: &'a RenderSettings,
        company: &'a CompanyInfo,
        customer_tax_id: &'a str,
    ) -> Self {
        Self {
            invoice,
            settings,
            company,
            customer_tax_id,
            width: resolve_width(settings),
        }
    }

    pub fn render(&self) -> RenderedReceipt {
        debug!(
            invoice = %self.invoice.name,
            width = self.width,
            payments = self.invoice.payments.len(),
            "rendering receipt"
        );

        let mut b = ReceiptBuilder::new(self.width);

        self.header(&mut b);
        self.customer_block(&mut b);
        self.items_table(&mut b);
        self.totals(&mut b);
        self.payment_block(&mut b);
        self.footer(&mut b);

        // Feed before tear-off
        b.feed(2);

        RenderedReceipt { lines: b.finish() }
    }

    /// Truncate to paper width and trim the edges
    fn fit(&self, s: &str) -> String {
        truncate_cols(s, self.width).trim().to_string()
    }

    // === Header: company identity, centered ===

    fn header(&self, b: &mut ReceiptBuilder) {
        b.centered_bold(&self.fit(&self.company.name));

        if !self.company.address.is_empty() {
            b.centered(&self.fit(&self.company.address));
        }
        if !self.company.tax_id.is_empty() {
            b.centered(&self.fit(&format!("NUIT: {}", self.company.tax_id)));
        }
        if let Some(header) = self.settings.receipt_header.as_deref() {
            b.extend(format_custom_block(header, self.width));
        }

        b.dashed_sep();
    }

    // === Customer block: who, when, which document ===

    fn customer_block(&self, b: &mut ReceiptBuilder) {
        b.labelled("Cliente:", self.invoice.customer_display());

        if !self.customer_tax_id.is_empty() {
            b.labelled("NUIT:", self.customer_tax_id);
        }

        let time = self.invoice.posting_time.unwrap_or(NaiveTime::MIN);
        let posted = self.invoice.posting_date.and_time(time);
        b.labelled("Data:", &posted.format("%d/%m/%Y %H:%M").to_string());

        b.labelled("Fatura No:", &self.invoice.name);
        b.dashed_sep();
    }

    // === Items table ===

    fn items_table(&self, b: &mut ReceiptBuilder) {
        let col1_width = self.width * 60 / 100;
        let col2_width = self.width * 10 / 100;

        let header = format_table_row("Descricao", "Qtd", "Valor", self.width, col1_width, col2_width);
        b.bold(&header);

        for item in &self.invoice.items {
            let qty = format!("{:.0}", item.qty);
            let amount = format_amount(item.amount, false);
            b.line(&format_table_row(
                item.display_name(),
                &qty,
                &amount,
                self.width,
                col1_width,
                col2_width,
            ));
        }

        b.dashed_sep();
    }

    // === Totals: subtotal, taxes, grand total ===

    fn totals(&self, b: &mut ReceiptBuilder) {
        b.line_lr("Sub-total", &format_amount(self.invoice.subtotal(), true));

        for tax in &self.invoice.taxes {
            b.line_lr(
                &truncate_cols(&tax.description, 20),
                &format_amount(tax.tax_amount, true),
            );
        }

        b.line_lr_bold("TOTAL", &format_amount(self.invoice.grand_total, true));
        b.dashed_sep();
    }

    // === Payment block ===

    fn payment_block(&self, b: &mut ReceiptBuilder) {
        b.extend(payment_lines(self.invoice));

        let change = self.invoice.change_amount.unwrap_or(0.0);
        if change > 0.0 {
            b.line(&format!("Troco: {}", format_amount(change, true)));
        }

        b.dashed_sep();
    }

    // === Footer: big total, legal lines, contact, status ===

    fn footer(&self, b: &mut ReceiptBuilder) {
        b.centered_bold(&self.fit("TOTAL A PAGAR"));
        b.centered_double_height(&self.fit(&format_amount(self.invoice.grand_total, true)));
        b.solid_sep();

        b.centered(&self.fit("Processado por Computador"));
        b.dashed_sep();

        if self.settings.enable_qr_code {
            b.centered("[QR CODE]");
            b.dashed_sep();
        }

        let mut contact_parts = Vec::new();
        if !self.company.phone.is_empty() {
            contact_parts.push(self.company.phone.as_str());
        }
        if !self.company.email.is_empty() {
            contact_parts.push(self.company.email.as_str());
        }
        if !contact_parts.is_empty() {
            b.centered(&self.fit(&contact_parts.join(" | ")));
        }

        if let Some(footer) = self.settings.receipt_footer.as_deref() {
            b.extend(format_custom_block(footer, self.width));
        }

        let status = if self.invoice.docstatus == DocStatus::Submitted {
            "**** FATURA FINAL ****"
        } else {
            "**** FATURA RASCUNHO ****"
        };
        b.centered(&self.fit(status));
    }
}

/// Payment lines exactly as the receipt prints them
///
/// Business rule: only the first stored payment record is printed, even on
/// split payments. Missing mode label defaults to "Dinheiro" (cash). Shared
/// with diagnostics so reports show the line that would actually print.
pub(crate) fn payment_lines(invoice: &Invoice) -> Vec<String> {
    let mut b = ReceiptBuilder::new(DEFAULT_WIDTH);

    if let Some(payment) = invoice.payments.first() {
        let mode = payment.mode_of_payment.as_deref().unwrap_or("Dinheiro");
        b.labelled("Pagamento:", mode);

        let reference = payment.reference_no.as_deref().filter(|r| !r.is_empty());
        if let Some(reference) = reference {
            b.labelled("Ref.:", reference);
        }
    }

    b.finish()
}
