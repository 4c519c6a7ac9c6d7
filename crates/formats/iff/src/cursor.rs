use crate::error::{DecodeError, DecodeResult};

/// Read cursor over a chunk payload. All multi-byte reads are big-endian.
///
/// Every read checks the remaining length first. A failed read leaves the
/// position where it was.
#[derive(Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of underlying data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether we've reached the end.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Remaining bytes from current position.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Seek to an absolute position.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Skip `n` bytes of reserved or pad fields.
    pub fn skip(&mut self, n: usize) -> DecodeResult<()> {
        self.ensure("PAD", n)?;
        self.pos += n;
        Ok(())
    }

    /// Read a slice of `n` bytes without copying.
    pub fn read_bytes(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        self.take("BYTES", n)
    }

    /// Read a fixed-width `char[n]` field.
    ///
    /// The bytes are decoded as ISO-8859-1 and the string ends at the first
    /// NUL, if any. All `n` bytes are consumed either way.
    pub fn read_fixed_str(&mut self, n: usize) -> DecodeResult<String> {
        let bytes = self.take("STRING", n)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(latin1(&bytes[..end]))
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.take("UBYTE", 1)?[0])
    }

    pub fn read_i8(&mut self) -> DecodeResult<i8> {
        Ok(self.take("BYTE", 1)?[0] as i8)
    }

    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        let b = self.take("UWORD", 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> DecodeResult<i16> {
        let b = self.take("WORD", 2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        let b = self.take("ULONG", 4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> DecodeResult<i32> {
        let b = self.take("LONG", 4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn take(&mut self, what: &'static str, n: usize) -> DecodeResult<&'a [u8]> {
        self.ensure(what, n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn ensure(&self, what: &'static str, n: usize) -> DecodeResult<()> {
        if self.remaining() < n {
            return Err(DecodeError::UnexpectedEof {
                what,
                offset: self.pos,
                need: n,
                have: self.remaining(),
            });
        }
        Ok(())
    }
}

/// Decode ISO-8859-1 bytes. Every byte maps to the code point of equal value.
pub fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u8; 7] = [0x01, 0xff, 0x07, 0x5B, 0xCD, 0x15, 0x02];

    fn at(offset: usize) -> Cursor<'static> {
        let mut c = Cursor::new(&DATA);
        c.seek(offset);
        c
    }

    #[test]
    fn test_read_u32() {
        let mut c = at(2);
        assert_eq!(c.read_u32(), Ok(123_456_789));
        assert_eq!(c.position(), 6);

        let mut c = at(1);
        assert_eq!(c.read_u32(), Ok(4_278_672_333));
        assert_eq!(c.position(), 5);

        let mut c = at(4);
        assert!(c.read_u32().is_err());
        assert_eq!(c.position(), 4);
    }

    #[test]
    fn test_read_i32() {
        assert_eq!(at(2).read_i32(), Ok(123_456_789));
        assert_eq!(at(1).read_i32(), Ok(-16_294_963));
        let mut c = at(4);
        assert!(c.read_i32().is_err());
        assert_eq!(c.position(), 4);
    }

    #[test]
    fn test_read_u16() {
        let mut c = at(2);
        assert_eq!(c.read_u16(), Ok(1883));
        assert_eq!(c.position(), 4);
        assert_eq!(at(1).read_u16(), Ok(65287));
    }

    #[test]
    fn test_read_i16() {
        assert_eq!(at(2).read_i16(), Ok(1883));
        assert_eq!(at(1).read_i16(), Ok(-249));
    }

    #[test]
    fn test_word_at_last_byte_fails_without_moving() {
        let mut c = at(DATA.len() - 1);
        let err = c.read_u16().unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnexpectedEof {
                what: "UWORD",
                offset: 6,
                need: 2,
                have: 1,
            }
        );
        assert_eq!(c.position(), DATA.len() - 1);
        assert!(c.read_i16().is_err());
        assert_eq!(c.position(), DATA.len() - 1);
    }

    #[test]
    fn test_read_bytes_signed_and_unsigned() {
        let mut c = at(2);
        assert_eq!(c.read_u8(), Ok(7));
        assert_eq!(c.position(), 3);
        assert_eq!(at(1).read_u8(), Ok(255));
        assert_eq!(at(1).read_i8(), Ok(-1));

        let mut c = at(7);
        assert!(c.read_u8().is_err());
        assert!(c.read_i8().is_err());
        assert_eq!(c.position(), 7);
    }

    #[test]
    fn test_past_end_offset_does_not_panic() {
        let mut c = at(8);
        assert!(c.read_u8().is_err());
        assert!(c.read_u32().is_err());
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.position(), 8);
    }

    #[test]
    fn test_read_fixed_str_stops_at_nul() {
        let data = b"usa\0\0\0xyz";
        let mut c = Cursor::new(data);
        assert_eq!(c.read_fixed_str(6), Ok("usa".to_string()));
        assert_eq!(c.position(), 6);
        assert_eq!(c.read_fixed_str(3), Ok("xyz".to_string()));
        assert!(c.read_fixed_str(1).is_err());
    }

    #[test]
    fn test_read_fixed_str_is_latin1() {
        let data = [b'K', 0xF6, b'l', b'n'];
        let mut c = Cursor::new(&data);
        assert_eq!(c.read_fixed_str(4), Ok("Köln".to_string()));
    }

    #[test]
    fn test_skip_checks_bounds() {
        let mut c = at(5);
        assert!(c.skip(3).is_err());
        assert_eq!(c.position(), 5);
        assert!(c.skip(2).is_ok());
        assert!(c.is_empty());
    }
}
