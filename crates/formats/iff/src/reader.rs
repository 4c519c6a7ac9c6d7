use std::fmt;
use std::io::{self, Read};

use tracing::{trace, warn};

use crate::cursor::latin1;
use crate::error::{Error, Result};

/// Size of the id + size header in front of every chunk.
const HEADER_LEN: u64 = 8;

/// Header length of a group chunk: id, size and subtype.
const GROUP_HEADER_LEN: u64 = HEADER_LEN + 4;

/// Default limit for nested group chunks.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Leaf ids whose type key is `(any).<id>` regardless of the enclosing group.
const GENERIC_IDS: [&[u8; 4]; 13] = [
    b"ANNO", b"AUTH", b"CHRS", b"CSET", b"FRED", b"FVER", b"HLID", b"INFO", b"JUNK", b"UTF8",
    b"NAME", b"TEXT", b"(c) ",
];

/// 4-byte chunk tag. Not validated; any byte value is accepted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(pub [u8; 4]);

impl ChunkId {
    pub const FORM: Self = Self(*b"FORM");
    pub const CAT: Self = Self(*b"CAT ");
    pub const LIST: Self = Self(*b"LIST");
    pub const PROP: Self = Self(*b"PROP");

    /// Whether this id opens a group chunk (FORM, CAT, LIST or PROP).
    pub fn is_group(self) -> bool {
        matches!(self, Self::FORM | Self::CAT | Self::LIST | Self::PROP)
    }

    /// Whether a file may start with this id.
    pub fn is_root(self) -> bool {
        matches!(self, Self::FORM | Self::CAT | Self::LIST)
    }

    /// Whether this is one of the generic leaf ids valid in any group.
    pub fn is_generic(self) -> bool {
        GENERIC_IDS.iter().any(|id| **id == self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for ChunkId {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&latin1(&self.0))
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

/// Contents of a chunk: either nested chunks or raw payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkBody {
    Group {
        /// Content type of the group, e.g. `ILBM`.
        subtype: ChunkId,
        /// Children in file order.
        children: Vec<ChunkNode>,
    },
    Leaf {
        /// Payload without the padding byte.
        payload: Vec<u8>,
    },
}

/// One chunk of an IFF file. Built once by [`ChunkReader`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkNode {
    id: ChunkId,
    declared_size: u32,
    type_key: String,
    body: ChunkBody,
    consumed: u64,
}

impl ChunkNode {
    /// Parse a complete in-memory IFF file.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        parse(data, data.len() as u64)
    }

    pub fn id(&self) -> ChunkId {
        self.id
    }

    /// Size field as stored in the file.
    pub fn declared_size(&self) -> u32 {
        self.declared_size
    }

    /// Registry key: the subtype for groups, `<parent subtype>.<id>` or
    /// `(any).<id>` for leaves.
    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    pub fn body(&self) -> &ChunkBody {
        &self.body
    }

    pub fn is_group(&self) -> bool {
        matches!(self.body, ChunkBody::Group { .. })
    }

    pub fn group_subtype(&self) -> Option<ChunkId> {
        match &self.body {
            ChunkBody::Group { subtype, .. } => Some(*subtype),
            ChunkBody::Leaf { .. } => None,
        }
    }

    /// Children in file order. Empty for leaves.
    pub fn children(&self) -> &[ChunkNode] {
        match &self.body {
            ChunkBody::Group { children, .. } => children,
            ChunkBody::Leaf { .. } => &[],
        }
    }

    /// Raw payload of a leaf chunk.
    pub fn payload(&self) -> Option<&[u8]> {
        match &self.body {
            ChunkBody::Leaf { payload } => Some(payload),
            ChunkBody::Group { .. } => None,
        }
    }

    /// Bytes read from the source for this chunk and all of its descendants,
    /// header and padding included.
    pub fn consumed_bytes(&self) -> u64 {
        self.consumed
    }

    /// On-disk size implied by the header: `declared_size + 8`, plus the
    /// padding byte for odd-sized leaves.
    pub fn footprint(&self) -> u64 {
        let size = u64::from(self.declared_size);
        match self.body {
            ChunkBody::Group { .. } => size + HEADER_LEN,
            ChunkBody::Leaf { .. } => size + (size & 1) + HEADER_LEN,
        }
    }

    /// First direct child with the given id.
    pub fn find(&self, id: &[u8; 4]) -> Option<&ChunkNode> {
        self.children().iter().find(|c| &c.id.0 == id)
    }

    /// Pre-order traversal yielding each node with its nesting depth (root = 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Pre-order iterator returned by [`ChunkNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a ChunkNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a ChunkNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// Parse an IFF file of `total_length` bytes with default options.
pub fn parse<R: Read>(source: R, total_length: u64) -> Result<ChunkNode> {
    ChunkReader::new().parse(source, total_length)
}

/// Recursive chunk tree reader.
///
/// Every chunk is parsed against the byte budget handed down by its parent,
/// so no chunk can read past the end of the enclosing group or the source.
#[derive(Debug, Clone, Copy)]
pub struct ChunkReader {
    max_depth: usize,
}

impl Default for ChunkReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkReader {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Maximum number of nested group levels, the root group included.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Read the root chunk and everything below it.
    ///
    /// Bytes after the end of the root chunk are ignored.
    pub fn parse<R: Read>(&self, mut source: R, total_length: u64) -> Result<ChunkNode> {
        let root = self.read_chunk(&mut source, None, total_length, 0)?;
        if root.consumed < total_length {
            warn!(
                trailing = total_length - root.consumed,
                "ignoring data after the root chunk"
            );
        }
        Ok(root)
    }

    fn read_chunk<R: Read>(
        &self,
        src: &mut R,
        parent: Option<ChunkId>,
        budget: u64,
        depth: usize,
    ) -> Result<ChunkNode> {
        if budget < HEADER_LEN {
            return Err(Error::TooShort {
                need: HEADER_LEN,
                budget,
            });
        }
        let id = ChunkId(read_array(src)?);
        let declared_size = u32::from_be_bytes(read_array(src)?);
        let mut consumed = HEADER_LEN;

        if parent.is_none() && !id.is_root() {
            return Err(Error::InvalidRoot { id });
        }

        if id.is_group() {
            if depth >= self.max_depth {
                return Err(Error::TooDeep {
                    limit: self.max_depth,
                });
            }
            let extent = u64::from(declared_size) + HEADER_LEN;
            if extent > budget {
                return Err(Error::BudgetExceeded {
                    id,
                    need: extent,
                    budget,
                });
            }
            if extent < GROUP_HEADER_LEN {
                return Err(Error::TooShort {
                    need: GROUP_HEADER_LEN,
                    budget: extent,
                });
            }
            let subtype = ChunkId(read_array(src)?);
            consumed += 4;
            trace!(%id, %subtype, size = declared_size, depth, "group chunk");

            let mut children = Vec::new();
            while consumed < extent {
                let child = self.read_chunk(src, Some(subtype), extent - consumed, depth + 1)?;
                consumed += child.consumed;
                children.push(child);
            }

            Ok(ChunkNode {
                id,
                declared_size,
                type_key: subtype.to_string(),
                body: ChunkBody::Group { subtype, children },
                consumed,
            })
        } else {
            let type_key = match parent {
                _ if id.is_generic() => format!("(any).{id}"),
                Some(parent) => format!("{parent}.{id}"),
                None => id.to_string(),
            };

            let size = u64::from(declared_size);
            let padded = size + (size & 1);
            let left = budget - consumed;
            if padded > left {
                return Err(Error::BudgetExceeded {
                    id,
                    need: padded,
                    budget: left,
                });
            }
            let payload = read_payload(src, size)?;
            consumed += size;
            if size % 2 == 1 {
                let _pad: [u8; 1] = read_array(src)?;
                consumed += 1;
            }
            trace!(%id, type_key = %type_key, size = declared_size, depth, "data chunk");

            Ok(ChunkNode {
                id,
                declared_size,
                type_key,
                body: ChunkBody::Leaf { payload },
                consumed,
            })
        }
    }
}

fn read_array<const N: usize, R: Read>(src: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    src.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read exactly `size` payload bytes. The buffer grows with the data actually
/// delivered, so a bogus length cannot trigger a huge allocation up front.
fn read_payload<R: Read>(src: &mut R, size: u64) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    src.by_ref().take(size).read_to_end(&mut payload)?;
    if (payload.len() as u64) < size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("chunk data ended after {} of {size} bytes", payload.len()),
        )
        .into());
    }
    Ok(payload)
}
