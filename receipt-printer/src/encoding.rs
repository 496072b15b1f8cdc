//! Windows-1252 encoding for the printer payload
//!
//! Receipts here are Portuguese, so the payload is sent on a single-byte
//! Latin code page (WPC1252 on Epson-compatible printers). This module
//! converts the rendered UTF-8 payload to printer bytes while preserving
//! ESC/POS command bytes exactly.

/// Convert a rendered UTF-8 payload to Windows-1252 printer bytes
///
/// ASCII bytes (0x00-0x7F) pass through untouched, which protects ESC/POS
/// commands from being corrupted. Only bytes >= 0x80 are treated as UTF-8
/// sequences and re-encoded.
///
/// Also handles re-selecting the code page after an INIT command (ESC @),
/// which resets the printer to its default character table.
pub fn to_printer_bytes(payload: &str) -> Vec<u8> {
    let bytes = payload.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() + 8);

    // ESC t 16 - select WPC1252 character code table
    result.extend_from_slice(&[0x1B, 0x74, 16]);

    let mut buffer = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        // INIT (ESC @) resets the code table; re-select after it
        if b == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == 0x40 {
            flush_buffer(&mut buffer, &mut result);
            result.extend_from_slice(&[0x1B, 0x40, 0x1B, 0x74, 16]);
            i += 2;
            continue;
        }

        if b < 128 {
            // Command byte or ASCII text
            flush_buffer(&mut buffer, &mut result);
            result.push(b);
        } else {
            // Part of a UTF-8 sequence
            buffer.push(b);
        }
        i += 1;
    }

    flush_buffer(&mut buffer, &mut result);
    result
}

/// Flush pending non-ASCII bytes, converting UTF-8 to Windows-1252
fn flush_buffer(buffer: &mut Vec<u8>, result: &mut Vec<u8>) {
    if buffer.is_empty() {
        return;
    }

    let s = String::from_utf8_lossy(buffer);
    let (encoded, _, _) = encoding_rs::WINDOWS_1252.encode(&s);
    result.extend_from_slice(&encoded);
    buffer.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        let bytes = to_printer_bytes("TOTAL 1,234.50");
        assert_eq!(&bytes[..3], &[0x1B, 0x74, 16]);
        assert_eq!(&bytes[3..], b"TOTAL 1,234.50");
    }

    #[test]
    fn commands_survive_encoding() {
        let bytes = to_printer_bytes("\x1B\x45\x01TOTAL\x1B\x45\x00");
        assert_eq!(&bytes[3..6], &[0x1B, 0x45, 0x01]);
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x45, 0x00]));
    }

    #[test]
    fn portuguese_accents_map_to_cp1252() {
        let bytes = to_printer_bytes("ção");
        // ç = 0xE7, ã = 0xE3 in Windows-1252
        assert_eq!(&bytes[3..], &[0xE7, 0xE3, b'o']);
    }

    #[test]
    fn init_reselects_code_table() {
        let bytes = to_printer_bytes("\x1B\x40Olá");
        assert_eq!(&bytes[..3], &[0x1B, 0x74, 16]);
        assert_eq!(&bytes[3..8], &[0x1B, 0x40, 0x1B, 0x74, 16]);
        assert_eq!(&bytes[8..], &[b'O', b'l', 0xE1]);
    }
}
