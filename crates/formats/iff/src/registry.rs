//! Chunk type registry: description and field decoder per type key.
//!
//! Type keys are built by the reader (`ILBM`, `ILBM.BMHD`, `(any).ANNO`, ...).
//! Several keys share one [`Decoder`] when their binary layout is identical.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::chunks::{anim, any, ilbm, locale, pref, svx8};
use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use crate::field::{FieldEntry, Fields};

/// Description returned for type keys missing from the registry.
pub const UNKNOWN: &str = "(unknown)";

/// Field row for registered types whose layout is not decoded.
pub const NOT_AVAILABLE: &str = "(not available)";

/// Binary layout a registered chunk type is decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoder {
    Iso8859Text,
    Utf8Text,
    IlbmBmhd,
    IlbmCmap,
    IlbmGrab,
    IlbmCamg,
    IlbmDpi,
    IlbmDest,
    IlbmSprt,
    IlbmCrng,
    AnimAnhd,
    AnimDpan,
    SvxVhdr,
    SvxEnvelope,
    PrefPrhd,
    PrefAsl,
    PrefFont,
    PrefIctl,
    PrefInpt,
    PrefKmsw,
    PrefLcle,
    PrefOscn,
    PrefPalt,
    PrefPntr,
    PrefNptr,
}

impl Decoder {
    fn run(self, c: &mut Cursor, out: &mut Fields) -> DecodeResult<()> {
        match self {
            Self::Iso8859Text => any::iso8859(c, out),
            Self::Utf8Text => any::utf8(c, out),
            Self::IlbmBmhd => ilbm::bmhd(c, out),
            Self::IlbmCmap => ilbm::cmap(c, out),
            Self::IlbmGrab => ilbm::grab(c, out),
            Self::IlbmCamg => ilbm::camg(c, out),
            Self::IlbmDpi => ilbm::dpi(c, out),
            Self::IlbmDest => ilbm::dest(c, out),
            Self::IlbmSprt => ilbm::sprt(c, out),
            Self::IlbmCrng => ilbm::crng(c, out),
            Self::AnimAnhd => anim::anhd(c, out),
            Self::AnimDpan => anim::dpan(c, out),
            Self::SvxVhdr => svx8::vhdr(c, out),
            Self::SvxEnvelope => svx8::envelope(c, out),
            Self::PrefPrhd => pref::prhd(c, out),
            Self::PrefAsl => pref::asl(c, out),
            Self::PrefFont => pref::font(c, out),
            Self::PrefIctl => pref::ictl(c, out),
            Self::PrefInpt => pref::inpt(c, out),
            Self::PrefKmsw => pref::kmsw(c, out),
            Self::PrefLcle => locale::lcle(c, out),
            Self::PrefOscn => pref::oscn(c, out),
            Self::PrefPalt => pref::palt(c, out),
            Self::PrefPntr => pref::pntr(c, out),
            Self::PrefNptr => pref::nptr(c, out),
        }
    }

    /// Decode `payload`, keeping the fields read before a failure.
    pub fn decode(self, payload: &[u8]) -> (Vec<FieldEntry>, Option<DecodeError>) {
        let mut fields = Fields::new();
        let result = self.run(&mut Cursor::new(payload), &mut fields);
        (fields.into_vec(), result.err())
    }
}

/// One row of the registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub key: &'static str,
    pub description: &'static str,
    pub decoder: Option<Decoder>,
}

const fn known(key: &'static str, description: &'static str) -> RegistryEntry {
    RegistryEntry {
        key,
        description,
        decoder: None,
    }
}

const fn decoded(key: &'static str, description: &'static str, decoder: Decoder) -> RegistryEntry {
    RegistryEntry {
        key,
        description,
        decoder: Some(decoder),
    }
}

use Decoder::*;

static ENTRIES: &[RegistryEntry] = &[
    // generic chunks
    decoded("(any).ANNO", "Annotation", Iso8859Text),
    decoded("(any).AUTH", "Author", Iso8859Text),
    known("(any).CHRS", "Character String"),
    known("(any).CSET", "Character Set"),
    known("(any).FRED", "ASDG Private"),
    decoded("(any).FVER", "Version", Iso8859Text),
    known("(any).HLID", "Hotlink"),
    known("(any).INFO", "Icon Data"),
    known("(any).JUNK", "To Be Ignored"),
    decoded("(any).UTF8", "UTF-8 Character Text", Utf8Text),
    decoded("(any).NAME", "Name", Iso8859Text),
    decoded("(any).TEXT", "ASCII Text", Iso8859Text),
    decoded("(any).(c) ", "Copyright", Iso8859Text),
    // 8SVX
    known("8SVX", "8-Bit Sampled Voice"),
    decoded("8SVX.VHDR", "Voice Header", SvxVhdr),
    decoded("8SVX.ATAK", "Attack", SvxEnvelope),
    decoded("8SVX.RLSE", "Release", SvxEnvelope),
    // ACBM shares the ILBM property chunks
    known("ACBM", "Amiga Continuous Bitmap"),
    known("ACBM.ABIT", "Bitmap Body"),
    decoded("ACBM.BMHD", "Bitmap Header", IlbmBmhd),
    decoded("ACBM.CMAP", "Color Map", IlbmCmap),
    decoded("ACBM.GRAB", "Grab (Hotspot)", IlbmGrab),
    decoded("ACBM.DEST", "Destination", IlbmDest),
    decoded("ACBM.SPRT", "Sprite", IlbmSprt),
    decoded("ACBM.CAMG", "Amiga Display Mode", IlbmCamg),
    known("AIFF", "Audio Samples"),
    known("ANBM", "Animated Bitmap"),
    // ANIM frames are FORM ILBM, so their chunks are keyed by ILBM
    known("ANIM", "CEL Animations"),
    decoded("ILBM.ANHD", "Animation Header", AnimAnhd),
    known("ILBM.DLTA", "Delta Compression"),
    decoded("ILBM.DPAN", "Display Parameters", AnimDpan),
    known("CMUS", "Musical Score"),
    known("CSET", "Text Character Set"),
    known("CTLG", "Catalog"),
    decoded("CTLG.LANG", "Language", Iso8859Text),
    known("CTLG.STRS", "Strings"),
    known("DEEP", "Chunky Pixel Image"),
    known("DTYP", "DataType Identification"),
    known("DR2D", "2-D Objects"),
    known("EXEC", "Executable Code"),
    known("FANT", "Movie Format"),
    known("FAXX", "Facsimile Image"),
    known("FTXT", "Formatted Text"),
    known("FVER", "Version String"),
    known("HEAD", "Flow Idea Processor Format"),
    known("HLID", "Hotlink Identification"),
    // ILBM
    known("ILBM", "InterLeaved BitMap"),
    decoded("ILBM.BMHD", "Bitmap Header", IlbmBmhd),
    known("ILBM.BODY", "Bitmap Body"),
    decoded("ILBM.CAMG", "Amiga Display Mode", IlbmCamg),
    known("ILBM.CCRT", "Color Cycling"),
    decoded("ILBM.CMAP", "Color Map", IlbmCmap),
    known("ILBM.CLUT", "Color Look Up Table"),
    known("ILBM.CMYK", "Cyan Magenta Yellow Black"),
    known("ILBM.CNAM", "Color Naming"),
    known("ILBM.CTBL", "Dynamic Color Palette"),
    decoded("ILBM.CRNG", "Color Range", IlbmCrng),
    known("ILBM.DPPS", "DPaint Page State"),
    known("ILBM.DRNG", "DPaint Range"),
    known("ILBM.DYCP", "Dynamic Color Palette"),
    decoded("ILBM.DPI ", "Dots Per Inch", IlbmDpi),
    known("ILBM.DPPV", "DPaint Perspective"),
    decoded("ILBM.DEST", "Destination", IlbmDest),
    known("ILBM.EPSF", "Encapsulated Postscript"),
    decoded("ILBM.GRAB", "Grab (Hotspot)", IlbmGrab),
    known("ILBM.PCHG", "Line By line Palette"),
    known("ILBM.PRVW", "Preview"),
    decoded("ILBM.SPRT", "Sprite", IlbmSprt),
    known("ILBM.TINY", "Thumbnail"),
    known("ILBM.XBMI", "Extended BitMap Information"),
    known("ILBM.XSSL", "3D X-Specs Image"),
    known("INFO", "Icon Information"),
    known("JUNK", "Junk Data"),
    known("MTRX", "Matrix Data Storage"),
    known("OB3D", "3-D Object Format"),
    known("PGTB", "Program Traceback"),
    known("PMBC", "High-color Image Format"),
    // preferences
    known("PREF", "Preferences"),
    decoded("PREF.PRHD", "Preferences Header", PrefPrhd),
    decoded("PREF.ASL ", "ASL Preferences", PrefAsl),
    decoded("PREF.FONT", "Font Preferences", PrefFont),
    decoded("PREF.ICTL", "IControl Preferences", PrefIctl),
    decoded("PREF.INPT", "Input Preferences", PrefInpt),
    decoded("PREF.KMSW", "Keyboard/Mouse Preferences", PrefKmsw),
    decoded("PREF.LCLE", "Locale Preferences", PrefLcle),
    decoded("PREF.OSCN", "Overscan Preferences", PrefOscn),
    decoded("PREF.PALT", "Palette Preferences", PrefPalt),
    decoded("PREF.CMAP", "Color Map", IlbmCmap),
    decoded("PREF.PNTR", "Pointer Preferences (old)", PrefPntr),
    decoded("PREF.NPTR", "Pointer Preferences", PrefNptr),
    known("PREF.PTXT", "Printer Preferences"),
    known("PREF.PUNT", "Printer Unit Preferences"),
    known("PREF.PDEV", "Printer Device Preferences"),
    known("PREF.PGFX", "Printer Graphics Preferences"),
    known("PREF.SCRM", "Screen Mode Preferences"),
    known("PREF.SERL", "Serial Preferences"),
    known("PREF.WANR", "Wanderer Preferences"),
    known("PRSP", "Perspective Move"),
    known("RGBN", "Image Data"),
    known("RGB8", "Image Data"),
    known("SAMP", "Sampled Sound"),
    known("SMUS", "Simple Musical Score"),
    known("SPLT", "File Splitting"),
    known("TDDD", "3-D Rendering Data"),
    known("TMUI", "Project File Format"),
    known("TREE", "Tree Data Structure"),
    known("TRKR", "Tracker Music Module"),
    known("UTF8", "UTF-8 Unicode Text"),
    known("WORD", "Document Storage"),
    known("YUVN", "YUV Image Data"),
];

static INDEX: LazyLock<HashMap<&'static str, &'static RegistryEntry>> =
    LazyLock::new(|| ENTRIES.iter().map(|entry| (entry.key, entry)).collect());

/// All registered chunk types in table order.
pub fn entries() -> &'static [RegistryEntry] {
    ENTRIES
}

pub fn lookup(type_key: &str) -> Option<&'static RegistryEntry> {
    INDEX.get(type_key).copied()
}

/// Description and decoded fields of one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Described {
    pub description: &'static str,
    /// Fields in on-disk order. Ends with an `(error: ...)` row if decoding
    /// stopped early.
    pub fields: Vec<FieldEntry>,
    pub error: Option<DecodeError>,
}

/// Look up `type_key` and decode `payload` with its registered layout.
///
/// Never fails: unknown types and decode errors are reported in the returned
/// field list.
pub fn describe(type_key: &str, payload: &[u8]) -> Described {
    let Some(entry) = lookup(type_key) else {
        return Described {
            description: UNKNOWN,
            fields: vec![FieldEntry::note(UNKNOWN)],
            error: None,
        };
    };
    let Some(decoder) = entry.decoder else {
        return Described {
            description: entry.description,
            fields: vec![FieldEntry::note(NOT_AVAILABLE)],
            error: None,
        };
    };

    debug!(type_key, len = payload.len(), "decoding chunk");
    let (mut fields, error) = decoder.decode(payload);
    if let Some(err) = &error {
        warn!(type_key, %err, "chunk decoded partially");
        fields.push(FieldEntry::note(format!("(error: {err})")));
    }
    Described {
        description: entry.description,
        fields,
        error,
    }
}
