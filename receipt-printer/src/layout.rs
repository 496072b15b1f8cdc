//! Fixed-width layout helpers
//!
//! Text wrapping, column padding, money formatting and custom header/footer
//! block formatting. All widths are in characters; the target code page is
//! single-byte, so one `char` is one printed column.

use crate::escpos::{ALIGN_CENTER, ALIGN_LEFT};

/// Wrap text into fixed-length chunks not exceeding `width` characters
///
/// Splits at `char` boundaries, never mid-character. The final remainder
/// chunk may be shorter. Concatenating the chunks reproduces the input.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut chunk = String::new();
    let mut chunk_len = 0;
    for c in text.chars() {
        chunk.push(c);
        chunk_len += 1;
        if chunk_len == width {
            lines.push(std::mem::take(&mut chunk));
            chunk_len = 0;
        }
    }
    if !chunk.is_empty() {
        lines.push(chunk);
    }
    lines
}

/// Truncate a string to at most `width` characters
pub fn truncate_cols(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Pad (or truncate) a string to exactly `width` characters
pub fn pad_cols(s: &str, width: usize, align_right: bool) -> String {
    let current = s.chars().count();
    if current >= width {
        return truncate_cols(s, width);
    }
    let spaces = width - current;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Format a monetary amount with two decimals and thousands grouping
///
/// `include_currency` appends the fixed " MZN" suffix.
pub fn format_amount(amount: f64, include_currency: bool) -> String {
    let fixed = format!("{amount:.2}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = format!("{sign}{grouped}.{frac_part}");
    if include_currency {
        out.push_str(" MZN");
    }
    out
}

/// Dashed section separator
pub fn dashed_line(width: usize) -> String {
    "-".repeat(width)
}

/// Solid section separator
pub fn solid_line(width: usize) -> String {
    "=".repeat(width)
}

/// Format a 3-column items row
///
/// Description left-aligned and truncated to `col1_width`; quantity and
/// value right-aligned. The value column takes what remains after the two
/// single-space separators. Numeric columns are never truncated: an
/// oversized quantity or amount overflows the row and prints in full.
pub fn format_table_row(
    col1: &str,
    col2: &str,
    col3: &str,
    width: usize,
    col1_width: usize,
    col2_width: usize,
) -> String {
    let col3_width = width.saturating_sub(col1_width + col2_width + 2);
    format!(
        "{} {col2:>col2_width$} {col3:>col3_width$}",
        pad_cols(col1, col1_width, false),
    )
}

/// Format free header/footer text into centered receipt lines
///
/// Normalizes `<br>` and `<p>` markup to newlines, strips any remaining
/// tags, drops blank lines, wraps to `width` and centers each wrapped line
/// with the ESC/POS alignment pair.
pub fn format_custom_block(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let clean = strip_markup(text);

    let mut formatted = Vec::new();
    for line in clean.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for wrapped in wrap_text(line, width) {
            formatted.push(format!("{ALIGN_CENTER}{wrapped}{ALIGN_LEFT}"));
        }
    }
    formatted
}

/// Replace `<br>`/`<p>` variants with newlines and drop every other tag
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }

        let mut tag = String::new();
        let mut closed = false;
        for t in chars.by_ref() {
            if t == '>' {
                closed = true;
                break;
            }
            tag.push(t);
        }
        if !closed {
            // Unterminated tag, keep the raw text
            out.push('<');
            out.push_str(&tag);
            break;
        }

        if is_break_tag(&tag) {
            out.push('\n');
        }
        // Any other tag is stripped
    }
    out
}

/// `br`, `br/`, `p ...`, `/p` in any case, with or without attributes
fn is_break_tag(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .trim_end_matches('/')
        .trim()
        .to_ascii_lowercase();
    let name = name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    name == "br" || name == "p"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_text_chunks_bounded_and_lossless() {
        for width in 1..=10 {
            let input = "abcdefghijklmnopqrstuvwxyz0123456789";
            let chunks = wrap_text(input, width);
            for chunk in &chunks {
                assert!(chunk.chars().count() <= width);
            }
            assert_eq!(chunks.concat(), input);
        }
    }

    #[test]
    fn wrap_text_empty_input() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn wrap_text_multibyte_safe() {
        let chunks = wrap_text("ção açúcar", 3);
        assert_eq!(chunks.concat(), "ção açúcar");
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 3);
        }
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(1234.5, false), "1,234.50");
        assert_eq!(format_amount(1234.5, true), "1,234.50 MZN");
        assert_eq!(format_amount(0.0, false), "0.00");
        assert_eq!(format_amount(999.999, false), "1,000.00");
        assert_eq!(format_amount(1234567.89, false), "1,234,567.89");
        assert_eq!(format_amount(-1234.5, false), "-1,234.50");
    }

    #[test]
    fn table_row_truncates_and_aligns() {
        let long_desc = "X".repeat(40);
        let row = format_table_row(&long_desc, "2", "1,234.50", 48, 28, 4);
        assert_eq!(row.chars().count(), 48);
        // Description cut to exactly col1_width
        assert_eq!(&row[..28], "X".repeat(28).as_str());
        // Qty right-aligned in 4 columns after one separating space
        assert_eq!(&row[28..33], "    2");
        // Value right-aligned in the remaining 14 columns
        assert!(row.ends_with("      1,234.50"));
    }

    #[test]
    fn numeric_columns_overflow_instead_of_truncating() {
        // Narrow paper: 32 chars leaves only 8 for the value column
        let row = format_table_row("Cimento", "2", "12,345.67", 32, 19, 3);
        assert!(row.contains("12,345.67"));

        // Oversized quantity also prints in full
        let row = format_table_row("Pao", "1000", "5.00", 32, 19, 3);
        assert!(row.contains("1000"));
    }

    #[test]
    fn table_row_pads_short_description() {
        let row = format_table_row("Pao", "10", "50.00", 48, 28, 4);
        assert_eq!(row.chars().count(), 48);
        assert!(row.starts_with("Pao "));
    }

    #[test]
    fn custom_block_normalizes_markup() {
        let lines = format_custom_block("<p>Obrigado!</p>Volte<br/>sempre", 48);
        assert_eq!(
            lines,
            vec![
                "\x1B\x61\x01Obrigado!\x1B\x61\x00",
                "\x1B\x61\x01Volte\x1B\x61\x00",
                "\x1B\x61\x01sempre\x1B\x61\x00",
            ]
        );
    }

    #[test]
    fn custom_block_strips_unknown_tags_and_blanks() {
        let lines = format_custom_block("<div><b>Promo</b></div><p>  </p>", 48);
        assert_eq!(lines, vec!["\x1B\x61\x01Promo\x1B\x61\x00"]);
    }

    #[test]
    fn custom_block_wraps_long_lines() {
        let text = "A".repeat(10);
        let lines = format_custom_block(&text, 4);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("AAAA"));
        assert!(lines[2].contains("AA"));
    }

    #[test]
    fn custom_block_empty() {
        assert!(format_custom_block("", 48).is_empty());
    }

    #[test]
    fn pad_cols_behaviour() {
        assert_eq!(pad_cols("hi", 5, false), "hi   ");
        assert_eq!(pad_cols("hi", 5, true), "   hi");
        assert_eq!(pad_cols("hello world", 5, false), "hello");
    }
}
