//! ILBM bitmap chunks. ACBM and PREF reuse several of these layouts.

use crate::cursor::Cursor;
use crate::error::DecodeResult;
use crate::field::{lookup, Fields};

const MASKING: [(u8, &str); 4] = [
    (0, "None"),
    (1, "Has Mask"),
    (2, "Has Transparent Color"),
    (3, "Lasso"),
];

const COMPRESSION: [(u8, &str); 2] = [(0, "None"), (1, "Byte Run 1")];

const CRNG_FLAGS: [(u32, &str); 2] = [(0, "Active"), (1, "Reverse")];

/// `BitmapHeader`:
///
/// ```text
/// UWORD w, h; WORD x, y; UBYTE nPlanes, masking, compression, pad1;
/// UWORD transparentColor; UBYTE xAspect, yAspect; WORD pageWidth, pageHeight;
/// ```
///
/// Masking and compression codes without a name produce no entry.
pub fn bmhd(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    let w = c.read_u16()?;
    let h = c.read_u16()?;
    out.pair("Width : Height", w, h);

    let x = c.read_i16()?;
    let y = c.read_i16()?;
    out.pair("Position x : y", x, y);

    out.push("Number of planes", c.read_u8()?);

    if let Some(name) = lookup(c.read_u8()?, &MASKING) {
        out.push("Masking", name);
    }
    if let Some(name) = lookup(c.read_u8()?, &COMPRESSION) {
        out.push("Compression", name);
    }
    c.skip(1)?;

    out.push("Transparent Color", c.read_u16()?);

    let x_aspect = c.read_u8()?;
    let y_aspect = c.read_u8()?;
    out.pair("Aspect Ratio x : y", x_aspect, y_aspect);

    let page_w = c.read_i16()?;
    let page_h = c.read_i16()?;
    out.pair("Page Width : Height", page_w, page_h);
    Ok(())
}

/// `ColorRegister[n]`, one entry per complete RGB triplet. A trailing partial
/// triplet is ignored.
pub fn cmap(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    let mut index = 0;
    while c.remaining() >= 3 {
        let r = c.read_u8()?;
        let g = c.read_u8()?;
        let b = c.read_u8()?;
        out.push(format!("Color {index}"), format!("{r} : {g} : {b}"));
        index += 1;
    }
    Ok(())
}

/// `Point2D` hotspot.
pub fn grab(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    let x = c.read_i16()?;
    let y = c.read_i16()?;
    out.pair("Position x : y", x, y);
    Ok(())
}

/// Amiga display mode id. Shown as raw bits; no mode names are assigned.
pub fn camg(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("View Mode", format!("{:032b}", c.read_u32()?));
    Ok(())
}

pub fn dpi(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Horizontal DPI", c.read_u16()?);
    out.push("Vertical DPI", c.read_u16()?);
    Ok(())
}

/// `DestMerge`: `UBYTE depth, pad1; UWORD planePick, planeOnOff, planeMask;`
pub fn dest(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Depth", c.read_u8()?);
    c.skip(1)?;
    out.push("Plane Pick", format!("{:016b}", c.read_u16()?));
    out.push("Plane On/Off", format!("{:016b}", c.read_u16()?));
    out.push("Plane Mask", format!("{:016b}", c.read_u16()?));
    Ok(())
}

pub fn sprt(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Sprite Precedence", c.read_u16()?);
    Ok(())
}

/// `CRange`: `WORD pad1, rate, flags; UBYTE low, high;`
pub fn crng(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(2)?;
    out.push("Rate", c.read_i16()?);
    let flags = c.read_i16()? as u16;
    out.set_bits("Flags", u32::from(flags), &CRNG_FLAGS);
    out.push("Low", c.read_u8()?);
    out.push("High", c.read_u8()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldEntry;

    type Decode = fn(&mut Cursor, &mut Fields) -> DecodeResult<()>;

    fn run(f: Decode, data: &[u8]) -> (Vec<FieldEntry>, bool) {
        let mut out = Fields::new();
        let ok = f(&mut Cursor::new(data), &mut out).is_ok();
        (out.into_vec(), ok)
    }

    fn e(label: &str, value: &str) -> FieldEntry {
        FieldEntry::new(label, value)
    }

    const BMHD_320X200: [u8; 20] = [
        0x01, 0x40, 0x00, 0xC8, // w, h
        0x00, 0x00, 0x00, 0x00, // x, y
        0x05, 0x00, 0x01, 0x00, // nPlanes, masking, compression, pad1
        0x00, 0x00, // transparentColor
        0x0A, 0x0B, // xAspect, yAspect
        0x01, 0x40, 0x00, 0xC8, // pageWidth, pageHeight
    ];

    #[test]
    fn test_bmhd() {
        let (fields, ok) = run(bmhd, &BMHD_320X200);
        assert!(ok);
        assert_eq!(
            fields,
            [
                e("Width : Height", "320 : 200"),
                e("Position x : y", "0 : 0"),
                e("Number of planes", "5"),
                e("Masking", "None"),
                e("Compression", "Byte Run 1"),
                e("Transparent Color", "0"),
                e("Aspect Ratio x : y", "10 : 11"),
                e("Page Width : Height", "320 : 200"),
            ]
        );
    }

    #[test]
    fn test_bmhd_unknown_codes_are_skipped() {
        let mut data = BMHD_320X200;
        data[9] = 9; // masking
        data[10] = 2; // compression
        let (fields, ok) = run(bmhd, &data);
        assert!(ok);
        assert_eq!(fields.len(), 6);
        assert!(fields.iter().all(|f| f.label != "Masking" && f.label != "Compression"));
    }

    #[test]
    fn test_bmhd_negative_position() {
        let mut data = BMHD_320X200;
        data[4..8].copy_from_slice(&[0xFF, 0xF6, 0x00, 0x14]);
        let (fields, _) = run(bmhd, &data);
        assert_eq!(fields[1], e("Position x : y", "-10 : 20"));
    }

    #[test]
    fn test_bmhd_truncated() {
        let (fields, ok) = run(bmhd, &BMHD_320X200[..9]);
        assert!(!ok);
        assert_eq!(
            fields,
            [
                e("Width : Height", "320 : 200"),
                e("Position x : y", "0 : 0"),
                e("Number of planes", "5"),
            ]
        );
    }

    #[test]
    fn test_cmap() {
        let (fields, ok) = run(cmap, &[0, 0, 0, 255, 128, 1, 7]);
        assert!(ok);
        assert_eq!(fields, [e("Color 0", "0 : 0 : 0"), e("Color 1", "255 : 128 : 1")]);

        let (fields, ok) = run(cmap, &[]);
        assert!(ok);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_grab_and_sprt() {
        assert_eq!(run(grab, &[0, 16, 0xFF, 0xFF]).0, [e("Position x : y", "16 : -1")]);
        assert_eq!(run(sprt, &[0, 3]).0, [e("Sprite Precedence", "3")]);
    }

    #[test]
    fn test_camg() {
        let (fields, _) = run(camg, &[0x00, 0x00, 0x88, 0x04]);
        assert_eq!(fields, [e("View Mode", "00000000000000001000100000000100")]);
    }

    #[test]
    fn test_dpi() {
        let (fields, ok) = run(dpi, &[0, 72, 0, 72]);
        assert!(ok);
        assert_eq!(fields, [e("Horizontal DPI", "72"), e("Vertical DPI", "72")]);
    }

    #[test]
    fn test_dest() {
        let (fields, ok) = run(dest, &[4, 0, 0x00, 0x0F, 0x00, 0x01, 0xFF, 0xFF]);
        assert!(ok);
        assert_eq!(
            fields,
            [
                e("Depth", "4"),
                e("Plane Pick", "0000000000001111"),
                e("Plane On/Off", "0000000000000001"),
                e("Plane Mask", "1111111111111111"),
            ]
        );
    }

    #[test]
    fn test_crng_flags() {
        let (fields, ok) = run(crng, &[0, 0, 0x0A, 0xAA, 0x00, 0x03, 16, 31]);
        assert!(ok);
        assert_eq!(
            fields,
            [
                e("Rate", "2730"),
                e("Flags", "Active"),
                e("Flags", "Reverse"),
                e("Low", "16"),
                e("High", "31"),
            ]
        );

        let (fields, _) = run(crng, &[0, 0, 0, 0, 0, 0, 1, 2]);
        assert_eq!(fields, [e("Rate", "0"), e("Low", "1"), e("High", "2")]);
    }
}
