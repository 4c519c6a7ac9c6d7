//! Reader and field decoder for EA-85 IFF container files.
//!
//! Two layers:
//! - **Layer 1** (`reader`): chunk tree. Group chunks (`FORM`, `CAT `, `LIST`,
//!   `PROP`) nest, leaf chunks carry a payload, and every node gets a type key
//!   such as `ILBM.BMHD` or `(any).ANNO`.
//! - **Layer 2** (`registry` + `chunks`): type key to description and a list
//!   of labelled field values decoded from the payload.

pub mod chunks;
pub mod cursor;
pub mod error;
pub mod field;
pub mod reader;
pub mod registry;

pub use error::{DecodeError, Error, Result};
pub use field::FieldEntry;
pub use reader::{parse, ChunkBody, ChunkId, ChunkNode, ChunkReader};
pub use registry::{describe, Described};
