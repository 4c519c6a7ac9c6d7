//! Builders for hand-assembled IFF files.
#![allow(dead_code)]

/// Leaf chunk with its padding byte.
pub fn leaf(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 9);
    out.extend_from_slice(id);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        out.push(0);
    }
    out
}

/// Group chunk (`FORM`, `CAT `, `LIST` or `PROP`) wrapping already encoded children.
pub fn group(kind: &[u8; 4], subtype: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
    let body: Vec<u8> = children.concat();
    let mut out = Vec::with_capacity(body.len() + 12);
    out.extend_from_slice(kind);
    out.extend_from_slice(&(body.len() as u32 + 4).to_be_bytes());
    out.extend_from_slice(subtype);
    out.extend_from_slice(&body);
    out
}

pub fn form(subtype: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
    group(b"FORM", subtype, children)
}

/// 320x200, 5 planes, ByteRun1 compressed.
pub fn bmhd() -> Vec<u8> {
    vec![
        0x01, 0x40, 0x00, 0xC8, 0, 0, 0, 0, 5, 0, 1, 0, 0, 0, 10, 11, 0x01, 0x40, 0x00, 0xC8,
    ]
}

/// Small FORM ILBM with a header, an odd-sized palette, an annotation and a body.
pub fn ilbm_file() -> Vec<u8> {
    form(
        b"ILBM",
        &[
            leaf(b"BMHD", &bmhd()),
            leaf(b"CMAP", &[0, 0, 0, 255, 255, 255, 170, 85, 0]),
            leaf(b"ANNO", b"drawn by hand"),
            leaf(b"BODY", &[0x55; 40]),
        ],
    )
}
