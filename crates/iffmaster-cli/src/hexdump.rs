//! Hex + ISO-8859-1 dump of chunk payloads, 16 bytes per row.

use std::fmt::Write;

pub const ROW_LEN: usize = 16;

/// Printable form of one byte. NUL, TAB, LF and CR are escaped; other control
/// bytes become `.`.
pub fn iso_char(byte: u8) -> String {
    match byte {
        0 => "\\0".to_string(),
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        b'\r' => "\\r".to_string(),
        0x01..=0x1F | 0x7F..=0x9F => ".".to_string(),
        _ => char::from(byte).to_string(),
    }
}

/// Render `data` as `offset  hex bytes  text` rows. Empty input gives an
/// empty string.
pub fn hexdump(data: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in data.chunks(ROW_LEN).enumerate() {
        let _ = write!(out, "{:08x} ", row * ROW_LEN);
        for i in 0..ROW_LEN {
            match chunk.get(i) {
                Some(byte) => {
                    let _ = write!(out, " {byte:02X}");
                }
                None => out.push_str("   "),
            }
        }
        out.push_str("  ");
        for &byte in chunk {
            out.push_str(&iso_char(byte));
        }
        out.push('\n');
    }
    out
}
