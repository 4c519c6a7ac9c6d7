//! AmigaOS / AROS / MorphOS preferences chunks (`FORM PREF`).
//!
//! Layouts follow the `prefs/*.h` structures. Reserved arrays are skipped;
//! pointer fields stored in the file (`STRPTR`) carry no meaning and are skipped
//! as well.

use crate::cursor::Cursor;
use crate::error::DecodeResult;
use crate::field::{lookup, Fields};

const FONT_TYPE: [(u16, &str); 3] = [(0, "WBFONT"), (1, "SYSFONT"), (2, "SCREENFONT")];

/// Named `ic_Flags` bits, in display order.
const ICTL_FLAGS: [(u32, &str); 15] = [
    (0, "ICF_NOACTIVEWINDOW"),
    (1, "ICF_COERCE_LACE"),
    (2, "ICF_STRGAD_FILTER"),
    (3, "ICF_MENUSNAP"),
    (4, "ICF_MODEPROMOTE"),
    (31, "ICF_STICKYMENUS (MorphOS)"),
    (30, "ICF_OPAQUEMOVE (MorphOS)"),
    (29, "ICF_PRIVILEDGEDREFRESH (MorphOS)"),
    (28, "ICF_OFFSCREENLAYERS (MorphOS)"),
    (27, "ICF_DEFPUBSCREEN (MorphOS)"),
    (26, "ICF_SCREENACTIVATION (MorphOS)"),
    (17, "ICF_PULLDOWNTITLEMENUS (AROS)"),
    (16, "ICF_POPUPMENUS (AROS)"),
    (15, "ICF_3DMENUS (AROS)"),
    (14, "ICF_AVOIDWINBORDERERASE (AROS)"),
];

const FONT_NAME_SIZE: usize = 128;
const KEYMAP_SIZE: usize = 16;
const KEYMAP_NAME_SIZE: usize = 64;
const ALT_KEYMAP_SIZE: usize = 64;
const PALETTE_PENS: usize = 32;
const PALETTE_COLORS: usize = 32;

/// `PrefHeader`: `UBYTE ph_Version, ph_Type; ULONG ph_Flags;`
pub fn prhd(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Version", c.read_u8()?);
    out.push("Type", c.read_u8()?);
    out.push("Flags", format!("{:032b}", c.read_u32()?));
    Ok(())
}

/// `AslPrefs`
pub fn asl(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(4 * 4)?;
    out.push("Sort By", c.read_u8()?);
    out.push("Sort Drawers", c.read_u8()?);
    out.push("Sort Order", c.read_u8()?);
    out.push("Size Position", c.read_u8()?);
    out.push("Relative Left", c.read_i16()?);
    out.push("Relative Top", c.read_i16()?);
    out.push("Relative Width", c.read_u8()?);
    out.push("Relative Height", c.read_u8()?);
    Ok(())
}

/// `FontPrefs` with its embedded `TextAttr`.
pub fn font(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(4 * 3 + 2)?;
    if let Some(name) = lookup(c.read_u16()?, &FONT_TYPE) {
        out.push("Type", name);
    }
    out.push("Front Pen", c.read_u8()?);
    out.push("Back Pen", c.read_u8()?);
    out.push("Drawmode", format!("{:08b}", c.read_u8()?));
    // fp_pad, then ta_Name (STRPTR)
    c.skip(1 + 4)?;
    out.push("Size", c.read_u16()?);
    out.push("Style", c.read_u8()?);
    out.push("TextAttr Flags", format!("{:08b}", c.read_u8()?));
    out.push("Name", c.read_fixed_str(FONT_NAME_SIZE)?);
    Ok(())
}

/// `IControlPrefs`. Flags are listed one entry per named bit that is set.
pub fn ictl(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(4 * 4)?;
    out.push("Timeout", c.read_u16()?);
    out.push("Meta Drag", format!("{:016b}", c.read_i16()? as u16));
    out.set_bits("Flag", c.read_u32()?, &ICTL_FLAGS);
    out.push("WBtoFront", c.read_u8()?);
    out.push("FrontToBack", c.read_u8()?);
    out.push("ReqTrue", c.read_u8()?);
    out.push("ReqFalse", c.read_u8()?);
    c.skip(2)?;
    for i in 0..2 {
        out.push(format!("VDragModes {i}"), c.read_u16()?);
    }
    Ok(())
}

/// `FileInputPrefs`. The `timeval` pairs are stored as plain ULONGs.
pub fn inpt(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Keymap", c.read_fixed_str(KEYMAP_SIZE)?);
    out.push("Pointer Ticks", c.read_u16()?);
    out.push("DoubleClick Seconds", c.read_u32()?);
    out.push("DoubleClick Micro", c.read_u32()?);
    out.push("Key Repeat Delay Seconds", c.read_u32()?);
    out.push("Key Repeat Delay Micro", c.read_u32()?);
    out.push("Key Repeat Speed Seconds", c.read_u32()?);
    out.push("Key Repeat Speed Micro", c.read_u32()?);
    out.push("Mouse Acceleration", c.read_i16()?);
    out.push("Classic Keyboard", c.read_u32()?);
    out.push("Keymap Name", c.read_fixed_str(KEYMAP_NAME_SIZE)?);
    out.push("Switch Mouse Buttons", c.read_u32()?);
    Ok(())
}

/// `KMSPrefs` (keymap switcher).
pub fn kmsw(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Enabled", c.read_u8()?);
    out.push("Reserved", c.read_u8()?);
    out.push("Switch Qualifier", format!("{:016b}", c.read_u16()?));
    out.push("Switch Code", format!("{:016b}", c.read_u16()?));
    out.push("Alternative Keymap", c.read_fixed_str(ALT_KEYMAP_SIZE)?);
    Ok(())
}

/// `OverscanPrefs`
pub fn oscn(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(4)?;
    out.push("Magic", c.read_u32()?);
    out.push("HStart", c.read_u16()?);
    out.push("HStop", c.read_u16()?);
    out.push("VStart", c.read_u16()?);
    out.push("VStop", c.read_u16()?);
    out.push("DisplayID", format!("{:032b}", c.read_u32()?));

    let (x, y) = (c.read_i16()?, c.read_i16()?);
    out.push("ViewPos", format!("({x}, {y})"));
    let (x, y) = (c.read_i16()?, c.read_i16()?);
    out.push("Text", format!("({x}, {y})"));

    let min_x = c.read_i16()?;
    let min_y = c.read_i16()?;
    let max_x = c.read_i16()?;
    let max_y = c.read_i16()?;
    out.push("Standard", format!("({min_x}, {min_y}, {max_x}, {max_y})"));
    Ok(())
}

/// `PalettePrefs`: pen tables followed by 32 `ColorSpec` entries.
pub fn palt(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(4 * 4)?;
    for i in 0..PALETTE_PENS {
        out.push(format!("4 Color Pen {i}"), c.read_u16()?);
    }
    for i in 0..PALETTE_PENS {
        out.push(format!("8 Color Pen {i}"), c.read_u16()?);
    }
    for i in 0..PALETTE_COLORS {
        let index = c.read_i16()?;
        let r = c.read_u16()?;
        let g = c.read_u16()?;
        let b = c.read_u16()?;
        out.push(format!("Color {i}"), format!("{index}: {r}, {g}, {b}"));
    }
    Ok(())
}

/// Pre-3.x `PointerPrefs` header. The image data that follows is not decoded.
pub fn pntr(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    c.skip(4 * 4)?;
    out.push("Which", c.read_u16()?);
    out.push("Size", c.read_u16()?);
    out.push("Width", c.read_u16()?);
    out.push("Height", c.read_u16()?);
    out.push("Depth", c.read_u16()?);
    out.push("YSize", c.read_u16()?);
    let (x, y) = (c.read_u16()?, c.read_u16()?);
    out.push("Position", format!("({x}, {y})"));
    Ok(())
}

/// `NewPointerPrefs`; the file name runs to the end of the chunk.
pub fn nptr(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Which", c.read_u16()?);
    out.push("Alpha Value", c.read_u16()?);
    out.push("Which In File", c.read_u32()?);
    let (x, y) = (c.read_u16()?, c.read_u16()?);
    out.push("Hotspot Coordinates", format!("({x}, {y})"));
    out.push("File", c.read_fixed_str(c.remaining())?);
    Ok(())
}
