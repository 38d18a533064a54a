use crate::error::DecodeError;

/// Forward-only little-endian reader over a decoded map stream.
///
/// The position is monotonic and never rewound; every conditional in the
/// format depends only on values already read. A read that would run past
/// the end fails with `UnexpectedEof` carrying the offset at which the
/// read began, and consumes nothing.
pub struct LittleEndianReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LittleEndianReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::UnexpectedEof { offset: self.pos });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        Ok(self.take(n)?.to_vec())
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        self.take(n)?;
        Ok(())
    }

    /// A u32le byte count followed by exactly that many raw bytes. The
    /// bytes are returned as read; the container predates any text
    /// encoding guarantee, so they are not validated as UTF-8.
    pub fn read_length_prefixed(&mut self) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_u32_le()? as usize;
        self.read_bytes(len)
    }

    /// Reads `n` booleans packed 8 per byte, least significant bit first
    /// within each byte. Consumes `ceil(n / 8)` bytes.
    pub fn read_bits(&mut self, n: usize) -> Result<Vec<bool>, DecodeError> {
        let bytes = self.take(n.div_ceil(8))?;
        let mut bits = Vec::with_capacity(n);
        for i in 0..n {
            bits.push(bytes[i / 8] >> (i % 8) & 1 == 1);
        }
        Ok(bits)
    }
}
