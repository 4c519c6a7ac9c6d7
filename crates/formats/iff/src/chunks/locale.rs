//! `PREF.LCLE`: `LocalePrefs` followed by the embedded `CountryPrefs`.

use crate::cursor::Cursor;
use crate::error::DecodeResult;
use crate::field::Fields;

const REGION_NAME_SIZE: usize = 32;
const PREFERRED_LANGUAGES: usize = 10;
const LANGUAGE_NAME_SIZE: usize = 30;

pub fn lcle(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(4 * 4)?;
    out.push("Region Name", c.read_fixed_str(REGION_NAME_SIZE)?);
    for _ in 0..PREFERRED_LANGUAGES {
        out.push("Preferred Language", c.read_fixed_str(LANGUAGE_NAME_SIZE)?);
    }
    out.push("GMT Offset", c.read_i32()?);
    out.push("Flags", format!("{:032b}", c.read_u32()?));
    country(c, out)
}

fn country(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(4 * 4)?;
    out.push("Region Code", c.read_u32()?);
    out.push("Telephone Code", c.read_u32()?);
    out.push("Measuring System", c.read_u8()?);

    text(c, out, "DateTime Format", 80)?;
    text(c, out, "Date Format", 40)?;
    text(c, out, "Time Format", 40)?;
    text(c, out, "Short DateTime Format", 80)?;
    text(c, out, "Short Date Format", 40)?;
    text(c, out, "Short Time Format", 40)?;

    text(c, out, "Decimal Point", 10)?;
    text(c, out, "Group Separator", 10)?;
    text(c, out, "Frac Group Separator", 10)?;
    grouping(c, out, "Grouping")?;
    grouping(c, out, "Frac Grouping")?;
    text(c, out, "Mon Decimal Point", 10)?;
    text(c, out, "Mon Group Separator", 10)?;
    text(c, out, "Mon Frac Group Separator", 10)?;
    grouping(c, out, "Mon Grouping")?;
    grouping(c, out, "Mon Frac Grouping")?;
    out.push("Mon Frac Digits", c.read_u8()?);
    out.push("Mon Int Frac Digits", c.read_u8()?);

    text(c, out, "Mon CS", 10)?;
    text(c, out, "Mon Small CS", 10)?;
    text(c, out, "Mon Int CS", 10)?;

    text(c, out, "Mon Positive Sign", 10)?;
    out.push("Mon Positive Space Sep", c.read_u8()?);
    out.push("Mon Positive Sign Pos", c.read_u8()?);
    out.push("Mon Positive CS Pos", c.read_u8()?);
    text(c, out, "Mon Negative Sign", 10)?;
    out.push("Mon Negative Space Sep", c.read_u8()?);
    out.push("Mon Negative Sign Pos", c.read_u8()?);
    out.push("Mon Negative CS Pos", c.read_u8()?);

    out.push("Calendar Type", c.read_u8()?);
    Ok(())
}

fn text(c: &mut Cursor, out: &mut Fields, label: &str, len: usize) -> DecodeResult<()> {
    out.push(label, c.read_fixed_str(len)?);
    Ok(())
}

/// `UBYTE[10]` digit grouping table, shown as a list of numbers.
fn grouping(c: &mut Cursor, out: &mut Fields, label: &str) -> DecodeResult<()> {
    let bytes = c.read_bytes(10)?;
    out.push(label, format!("{bytes:?}"));
    Ok(())
}
