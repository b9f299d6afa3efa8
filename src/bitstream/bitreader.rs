//! BitReader: the input half of the bit I/O subsystem.
//!
//! Reads a packed bitstream, most significant bit first, from any source that supports the
//! read() call. End of data is reported as None. Failures of the source itself are returned as
//! io errors.

use std::io;

const BUFFER_SIZE: usize = 64 * 1024;
const BIT_MASK: u8 = 0xff;

#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    source: R,
}

impl<R: io::Read> BitReader<R> {
    /// Creates a new BitReader (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: Vec::with_capacity(BUFFER_SIZE),
            cursor: 0,
            bit_index: 0,
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> io::Result<bool> {
        // Only try to read more data when the buffer length is equal to the buffer cursor location
        if self.cursor == self.buffer.len() {
            self.buffer.resize(BUFFER_SIZE, 0);
            let size = loop {
                match self.source.read(&mut self.buffer) {
                    Ok(size) => break size,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        self.buffer.clear();
                        self.cursor = 0;
                        return Err(e);
                    }
                }
            };
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            self.cursor = 0;
            self.bit_index = 0;
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True when no bits remain to be read.
    pub fn is_empty(&mut self) -> io::Result<bool> {
        Ok(!self.have_data()?)
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> io::Result<Option<usize>> {
        // If bit_index is == 0, check if we have a byte to read. Return None if we have no data
        if self.bit_index == 0 && !self.have_data()? {
            return Ok(None);
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Ok(Some(bit as usize))
    }

    /// Return Option<usize> of the next n bits (n <= 64), or None if the data ran out first.
    /// Bits consumed before the data ran out are lost.
    pub fn bint(&mut self, mut n: usize) -> io::Result<Option<usize>> {
        debug_assert!(n <= usize::BITS as usize);
        let mut result = 0_usize;

        // Test if we have a partial byte of data. If we do, read from it.
        if self.bit_index > 0 {
            let needed = n.min(8 - self.bit_index);
            result = ((self.buffer[self.cursor] & BIT_MASK >> self.bit_index)
                >> (8 - self.bit_index - needed)) as usize;
            self.bit_index += needed;
            if self.bit_index == 8 {
                self.cursor += 1;
                self.bit_index = 0;
            }
            n -= needed;
        }
        // Get as many full bytes as we need.
        while n >= 8 {
            if !self.have_data()? {
                return Ok(None);
            }
            result = result << 8 | self.buffer[self.cursor] as usize;
            self.cursor += 1;
            n -= 8;
        }
        // If we still need a partial byte, get whatever bits we still need.
        if n > 0 {
            if !self.have_data()? {
                return Ok(None);
            }
            result = result << n | (self.buffer[self.cursor] >> (8 - n)) as usize;
            self.bit_index = n;
        }
        Ok(Some(result))
    }

    /// Returns a byte, or None if there is no more data to read.
    pub fn byte(&mut self) -> io::Result<Option<u8>> {
        // Fast path when we are byte aligned
        if self.bit_index == 0 {
            if !self.have_data()? {
                return Ok(None);
            }
            let byte = self.buffer[self.cursor];
            self.cursor += 1;
            return Ok(Some(byte));
        }
        Ok(self.bint(8)?.map(|byte| byte as u8))
    }

    /// Returns a 32 bit big endian integer, or None if fewer than 32 bits remain.
    pub fn int(&mut self) -> io::Result<Option<u32>> {
        Ok(self.bint(32)?.map(|int| int as u32))
    }

    /// Returns n bytes, or None if the data ran out first.
    pub fn bytes(&mut self, n: usize) -> io::Result<Option<Vec<u8>>> {
        let mut result: Vec<u8> = Vec::with_capacity(n);
        for _ in 0..n {
            match self.byte()? {
                Some(byte) => result.push(byte),
                None => return Ok(None),
            }
        }
        Ok(Some(result))
    }

    /// Returns every remaining whole byte. Trailing bits that do not fill a byte are dropped.
    pub fn rest(&mut self) -> io::Result<Vec<u8>> {
        let mut result = Vec::new();
        if self.bit_index == 0 {
            while self.have_data()? {
                result.extend_from_slice(&self.buffer[self.cursor..]);
                self.cursor = self.buffer.len();
            }
        } else {
            while let Some(byte) = self.byte()? {
                result.push(byte);
            }
        }
        Ok(result)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = &[0b10000001_u8][..];
        let mut br = BitReader::new(x);
        assert_eq!(br.bit().unwrap(), Some(1));
        for _ in 0..6 {
            assert_eq!(br.bit().unwrap(), Some(0));
        }
        assert_eq!(br.bit().unwrap(), Some(1));
        assert_eq!(br.bit().unwrap(), None);
    }

    #[test]
    fn bint_test() {
        let x = &[0b00011011_u8][..];
        let mut br = BitReader::new(x);
        assert_eq!(br.bint(5).unwrap(), Some(3));
        assert_eq!(br.bint(1).unwrap(), Some(0));
        assert_eq!(br.bint(2).unwrap(), Some(3));
        assert_eq!(br.bint(1).unwrap(), None);
    }

    #[test]
    fn bint_across_bytes_test() {
        let x = &[0b1010_1010_u8, 0b1100_0011][..];
        let mut br = BitReader::new(x);
        assert_eq!(br.bint(4).unwrap(), Some(0b1010));
        assert_eq!(br.bint(8).unwrap(), Some(0b1010_1100));
        assert_eq!(br.bint(4).unwrap(), Some(0b0011));
        assert!(br.is_empty().unwrap());
    }

    #[test]
    fn int_test() {
        let x = &[0_u8, 0, 1, 2, 9][..];
        let mut br = BitReader::new(x);
        assert_eq!(br.int().unwrap(), Some(258));
        assert_eq!(br.int().unwrap(), None);
    }

    #[test]
    fn byte_test() {
        let mut br = BitReader::new("Hello, world!".as_bytes());
        assert_eq!(br.byte().unwrap(), Some(b'H'));
        assert_eq!(br.byte().unwrap(), Some(b'e'));
        assert_eq!(br.bytes(3).unwrap(), Some(b"llo".to_vec()));
        assert_eq!(br.rest().unwrap(), b", world!");
        assert_eq!(br.byte().unwrap(), None);
        assert!(br.is_empty().unwrap());
    }

    #[test]
    fn short_bytes_test() {
        let mut br = BitReader::new("Hi".as_bytes());
        assert_eq!(br.bytes(3).unwrap(), None);
    }

    #[test]
    fn unaligned_rest_test() {
        let x = &[0b1000_0001_u8, 0b1000_0000][..];
        let mut br = BitReader::new(x);
        assert_eq!(br.bit().unwrap(), Some(1));
        assert_eq!(br.rest().unwrap(), vec![0b0000_0011]);
    }

    #[test]
    fn loc_test() {
        let mut br = BitReader::new("Hello, world!".as_bytes());
        br.bytes(5).unwrap();
        br.bit().unwrap();
        assert_eq!(br.loc(), "[5.1]");
    }
}
