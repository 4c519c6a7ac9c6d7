//! ANIM chunks. They live inside the `FORM ILBM` frames of an ANIM stream,
//! so their type keys carry the ILBM prefix.

use crate::cursor::Cursor;
use crate::error::DecodeResult;
use crate::field::{lookup, Fields};

const OPERATION: [(u8, &str); 9] = [
    (0, "Direct"),
    (1, "XOR"),
    (2, "Long Delta"),
    (3, "Short Delta"),
    (4, "Short/Long Delta"),
    (5, "Byte Vertical Delta"),
    (6, "Stereo Op 5"),
    (7, "Short/Long Vertical Delta"),
    (74, "Graham"),
];

/// Meaning of bits 0..=5 of `AnimHeader.bits`, as (clear, set).
const BITS: [(&str, &str); 6] = [
    ("Short Data", "Long Data"),
    ("Store", "XOR"),
    ("Separate Info", "One Info for All"),
    ("Not RLC", "RLC"),
    ("Horizontal", "Vertical"),
    ("Short Info Offsets", "Long Info Offsets"),
];

/// `AnimHeader`:
///
/// ```text
/// UBYTE operation, mask; UWORD w, h; WORD x, y; ULONG abstime, reltime;
/// UBYTE interleave, pad0; ULONG bits; ULONG pad[16];
/// ```
///
/// The trailing pad array is not read.
pub fn anhd(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    if let Some(name) = lookup(c.read_u8()?, &OPERATION) {
        out.push("Operation", name);
    }
    out.push("Mask", c.read_u8()?);

    let w = c.read_u16()?;
    let h = c.read_u16()?;
    out.pair("Width : Height", w, h);

    let x = c.read_i16()?;
    let y = c.read_i16()?;
    out.pair("Position x : y", x, y);

    out.push("Absolute Time", c.read_u32()?);
    out.push("Relative Time", c.read_u32()?);
    out.push("Interleave", c.read_u8()?);
    c.skip(1)?;

    let bits = c.read_u32()?;
    for (bit, (clear, set)) in BITS.iter().enumerate() {
        let value = if bits & (1 << bit) == 0 { clear } else { set };
        out.push(format!("Bit {bit}"), value);
    }
    Ok(())
}

/// `DPAnimChunk`: `UWORD version, nframes; ULONG flags;`
pub fn dpan(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Version", c.read_u16()?);
    out.push("Number of Frames", c.read_u16()?);
    out.push("Flags", format!("{:032b}", c.read_u32()?));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldEntry;

    fn e(label: &str, value: &str) -> FieldEntry {
        FieldEntry::new(label, value)
    }

    fn anhd_payload(operation: u8, bits: u32) -> Vec<u8> {
        let mut data = vec![operation, 0];
        data.extend_from_slice(&[0x01, 0x40, 0x00, 0xC8]); // w, h
        data.extend_from_slice(&[0x00, 0x02, 0xFF, 0xFE]); // x, y
        data.extend_from_slice(&0u32.to_be_bytes()); // abstime
        data.extend_from_slice(&2u32.to_be_bytes()); // reltime
        data.extend_from_slice(&[0, 0]); // interleave, pad0
        data.extend_from_slice(&bits.to_be_bytes());
        data.extend_from_slice(&[0; 64]);
        data
    }

    #[test]
    fn test_anhd() {
        let data = anhd_payload(5, 0b10_0001);
        let mut out = Fields::new();
        anhd(&mut Cursor::new(&data), &mut out).unwrap();
        assert_eq!(
            out.into_vec(),
            [
                e("Operation", "Byte Vertical Delta"),
                e("Mask", "0"),
                e("Width : Height", "320 : 200"),
                e("Position x : y", "2 : -2"),
                e("Absolute Time", "0"),
                e("Relative Time", "2"),
                e("Interleave", "0"),
                e("Bit 0", "Long Data"),
                e("Bit 1", "Store"),
                e("Bit 2", "Separate Info"),
                e("Bit 3", "Not RLC"),
                e("Bit 4", "Horizontal"),
                e("Bit 5", "Long Info Offsets"),
            ]
        );
    }

    #[test]
    fn test_anhd_operation_codes() {
        let mut out = Fields::new();
        anhd(&mut Cursor::new(&anhd_payload(74, 0)), &mut out).unwrap();
        assert_eq!(out.into_vec()[0], e("Operation", "Graham"));

        let mut out = Fields::new();
        anhd(&mut Cursor::new(&anhd_payload(8, 0)), &mut out).unwrap();
        assert_eq!(out.into_vec()[0], e("Mask", "0"));
    }

    #[test]
    fn test_anhd_empty_payload_is_an_error() {
        let mut out = Fields::new();
        assert!(anhd(&mut Cursor::new(&[]), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_dpan() {
        let mut out = Fields::new();
        dpan(&mut Cursor::new(&[0, 4, 0, 24, 0, 0, 0, 1]), &mut out).unwrap();
        assert_eq!(
            out.into_vec(),
            [
                e("Version", "4"),
                e("Number of Frames", "24"),
                e("Flags", "00000000000000000000000000000001"),
            ]
        );
    }
}
