//! Text chunks that may appear inside any group (ANNO, AUTH, NAME, ...).

use crate::cursor::{latin1, Cursor};
use crate::error::DecodeResult;
use crate::field::Fields;

/// Whole payload as ISO-8859-1 text.
pub fn iso8859(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    let bytes = c.read_bytes(c.remaining())?;
    out.push("String", latin1(bytes));
    Ok(())
}

/// Whole payload as UTF-8 text. Invalid sequences become U+FFFD.
pub fn utf8(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    let bytes = c.read_bytes(c.remaining())?;
    out.push("String", String::from_utf8_lossy(bytes));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldEntry;

    fn run(f: fn(&mut Cursor, &mut Fields) -> DecodeResult<()>, data: &[u8]) -> Vec<FieldEntry> {
        let mut out = Fields::new();
        f(&mut Cursor::new(data), &mut out).unwrap();
        out.into_vec()
    }

    #[test]
    fn test_iso8859() {
        assert_eq!(
            run(iso8859, b"Caf\xe9"),
            [FieldEntry::new("String", "Café")]
        );
        assert_eq!(run(iso8859, b""), [FieldEntry::new("String", "")]);
    }

    #[test]
    fn test_utf8() {
        assert_eq!(
            run(utf8, "Grüße".as_bytes()),
            [FieldEntry::new("String", "Grüße")]
        );
        assert_eq!(run(utf8, b"a\xffb"), [FieldEntry::new("String", "a\u{fffd}b")]);
    }
}
