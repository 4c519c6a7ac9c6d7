//! Field decoders, one module per chunk family.
//!
//! Every decoder walks the payload with a [`Cursor`](crate::cursor::Cursor)
//! in on-disk order and appends to a [`Fields`](crate::field::Fields)
//! accumulator. A short payload stops the decoder at the failing read.

pub mod anim;
pub mod any;
pub mod ilbm;
pub mod locale;
pub mod pref;
pub mod svx8;
