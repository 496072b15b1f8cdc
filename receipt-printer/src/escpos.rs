//! ESC/POS line builder
//!
//! Builds receipt content as an ordered list of lines. Emphasis is applied
//! per line as a balanced on/off code pair, so every line is self-contained
//! and the printer never carries style state across lines.

/// ESC a 1 - center alignment on
pub(crate) const ALIGN_CENTER: &str = "\x1B\x61\x01";
/// ESC a 0 - back to left alignment
pub(crate) const ALIGN_LEFT: &str = "\x1B\x61\x00";
/// ESC E 1 - bold on
pub(crate) const BOLD_ON: &str = "\x1B\x45\x01";
/// ESC E 0 - bold off
pub(crate) const BOLD_OFF: &str = "\x1B\x45\x00";
/// GS ! 0x01 - double height
pub(crate) const DOUBLE_HEIGHT: &str = "\x1D\x21\x01";
/// GS ! 0x00 - back to normal size
pub(crate) const SIZE_RESET: &str = "\x1D\x21\x00";

/// Line-oriented ESC/POS builder
///
/// Accumulates receipt lines for a given paper width.
///
/// Common widths:
/// - 58mm paper: 32 characters
/// - 80mm paper: 48 characters
pub struct ReceiptBuilder {
    lines: Vec<String>,
    width: usize,
}

impl ReceiptBuilder {
    /// Create a new builder with the specified paper width in characters
    pub fn new(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            width,
        }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Append a plain text line
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.lines.push(s.to_string());
        self
    }

    /// Append an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Append n empty lines (paper feed before tear-off)
    pub fn feed(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.blank();
        }
        self
    }

    // === Styled Lines ===

    /// Centered line
    pub fn centered(&mut self, s: &str) -> &mut Self {
        self.lines.push(format!("{ALIGN_CENTER}{s}{ALIGN_LEFT}"));
        self
    }

    /// Bold line
    pub fn bold(&mut self, s: &str) -> &mut Self {
        self.lines.push(format!("{BOLD_ON}{s}{BOLD_OFF}"));
        self
    }

    /// Bold centered line
    pub fn centered_bold(&mut self, s: &str) -> &mut Self {
        self.lines
            .push(format!("{ALIGN_CENTER}{BOLD_ON}{s}{BOLD_OFF}{ALIGN_LEFT}"));
        self
    }

    /// Double-height centered line
    pub fn centered_double_height(&mut self, s: &str) -> &mut Self {
        self.lines
            .push(format!("{ALIGN_CENTER}{DOUBLE_HEIGHT}{s}{SIZE_RESET}{ALIGN_LEFT}"));
        self
    }

    /// Bold key followed by a plain value ("Cliente: João")
    pub fn labelled(&mut self, label: &str, value: &str) -> &mut Self {
        self.lines
            .push(format!("{BOLD_ON}{label}{BOLD_OFF} {value}"));
        self
    }

    // === Layout Helpers ===

    /// Left and right text on one line, gap filled with spaces
    ///
    /// Falls back to a single separating space when both sides together
    /// exceed the paper width.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = left.chars().count();
        let rw = right.chars().count();

        if lw + rw >= self.width {
            self.lines.push(format!("{left} {right}"));
        } else {
            let spaces = self.width - lw - rw;
            self.lines.push(format!("{left}{}{right}", " ".repeat(spaces)));
        }
        self
    }

    /// Bold variant of [`line_lr`](Self::line_lr)
    pub fn line_lr_bold(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = left.chars().count();
        let rw = right.chars().count();

        let inner = if lw + rw >= self.width {
            format!("{left} {right}")
        } else {
            format!("{left}{}{right}", " ".repeat(self.width - lw - rw))
        };
        self.lines.push(format!("{BOLD_ON}{inner}{BOLD_OFF}"));
        self
    }

    // === Separators ===

    /// Line of '-' characters
    pub fn dashed_sep(&mut self) -> &mut Self {
        self.lines.push("-".repeat(self.width));
        self
    }

    /// Line of '=' characters
    pub fn solid_sep(&mut self) -> &mut Self {
        self.lines.push("=".repeat(self.width));
        self
    }

    // === Build ===

    /// Append pre-rendered lines (e.g. a formatted custom block)
    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) -> &mut Self {
        self.lines.extend(lines);
        self
    }

    /// Finalize and return the accumulated lines
    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

impl Default for ReceiptBuilder {
    fn default() -> Self {
        Self::new(48)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_lines_are_balanced_pairs() {
        let mut b = ReceiptBuilder::new(32);
        b.centered("LOJA CENTRAL").bold("TOTAL");
        let lines = b.finish();
        assert_eq!(lines[0], "\x1B\x61\x01LOJA CENTRAL\x1B\x61\x00");
        assert_eq!(lines[1], "\x1B\x45\x01TOTAL\x1B\x45\x00");
    }

    #[test]
    fn labelled_keeps_value_plain() {
        let mut b = ReceiptBuilder::new(48);
        b.labelled("Cliente:", "Maria");
        assert_eq!(b.finish()[0], "\x1B\x45\x01Cliente:\x1B\x45\x00 Maria");
    }

    #[test]
    fn line_lr_fills_gap() {
        let mut b = ReceiptBuilder::new(20);
        b.line_lr("Sub-total", "9,99");
        let lines = b.finish();
        assert_eq!(lines[0].chars().count(), 20);
        assert!(lines[0].starts_with("Sub-total"));
        assert!(lines[0].ends_with("9,99"));
    }

    #[test]
    fn line_lr_overflow_uses_single_space() {
        let mut b = ReceiptBuilder::new(10);
        b.line_lr("long-left-side", "right");
        assert_eq!(b.finish()[0], "long-left-side right");
    }

    #[test]
    fn separators_match_width() {
        let mut b = ReceiptBuilder::new(10);
        b.dashed_sep().solid_sep();
        let lines = b.finish();
        assert_eq!(lines[0], "----------");
        assert_eq!(lines[1], "==========");
    }
}
