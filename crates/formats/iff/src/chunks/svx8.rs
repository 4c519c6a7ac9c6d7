//! 8SVX sampled voice chunks.

use crate::cursor::Cursor;
use crate::error::DecodeResult;
use crate::field::{fixed, lookup, Fields};

const COMPRESSION: [(u8, &str); 2] = [(0, "None"), (1, "Fibonacci-Delta-Encoded")];

/// `Voice8Header`:
///
/// ```text
/// ULONG oneShotHiSamples, repeatHiSamples, samplesPerHiCycle;
/// UWORD samplesPerSec; UBYTE ctOctave, sCompression; Fixed volume;
/// ```
pub fn vhdr(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("One Shot Hi Samples", c.read_u32()?);
    out.push("Repeat Hi Samples", c.read_u32()?);
    out.push("Samples Per Hi Cycle", c.read_u32()?);
    out.push("Samples Per Sec", c.read_u16()?);
    out.push("Octave", c.read_u8()?);
    if let Some(name) = lookup(c.read_u8()?, &COMPRESSION) {
        out.push("Compression", name);
    }
    out.push("Volume", fixed(c.read_i32()?));
    Ok(())
}

/// `EGPoint` of an attack or release envelope: `UWORD duration; Fixed dest;`
pub fn envelope(c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
    out.push("Duration", c.read_u16()?);
    out.push("Dest", fixed(c.read_i32()?));
    Ok(())
}
