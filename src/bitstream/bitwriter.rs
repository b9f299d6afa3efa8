use std::io;

use log::trace;

/// Size at which buffered output is pushed to the sink.
const DRAIN_SIZE: usize = 64 * 1024;

/// Writes a bitstream for output, most significant bit first. Full bytes collect in an output
/// buffer which is written to the sink as it fills and on flush().
pub struct BitWriter<W: io::Write> {
    /// Output buffer used to write the bitstream.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Handle to the output stream
    writer: W,
}

impl<W: io::Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            output: Vec::with_capacity(DRAIN_SIZE),
            queue: 0,
            q_bits: 0,
            writer,
        }
    }

    /// Move all full bytes from the queue to the output buffer, and the buffer to the sink once
    /// it is large enough.
    fn push_queue(&mut self) -> io::Result<()> {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
        if self.output.len() >= DRAIN_SIZE {
            self.writer.write_all(&self.output)?;
            self.output.clear();
        }
        Ok(())
    }

    /// Put a byte on the stream.
    pub fn out8(&mut self, data: u8) -> io::Result<()> {
        self.queue <<= 8; //shift queue by one byte
        self.queue |= data as u64; //add the byte to queue
        self.q_bits += 8; //update depth of queue bits
        self.push_queue()
    }

    /*
    NOTE: out24 takes a u32. The 8 most significant bits of the word indicate how
    many of the least significant bits will be written. Those bits must be aligned to
    the least signficant bit. (The middle bits are masked out.)
    Eg 0000100_00000000_00000000_00000010 writes out 0010.
    */
    /// Writes 0-24 bits encoded with the number of bits to write in the most
    /// significant byte of a 32 bit word.
    pub fn out24(&mut self, data: u32) -> io::Result<()> {
        let depth = ((data >> 24) as u8).min(24); //get bit length by shifting out the 24 data bits
        if depth == 0 {
            return Ok(());
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.push_queue()
    }

    /// Puts a 32 bit word on the stream, big endian.
    pub fn out32(&mut self, data: u32) -> io::Result<()> {
        self.queue <<= 32; //shift queue by bit length
        self.queue |= data as u64; //add data portion to queue
        self.q_bits += 32; //update depth of queue bits
        self.push_queue()
    }

    /// Put a run of bytes on the stream.
    pub fn write_bytes(&mut self, data: &[u8]) -> io::Result<()> {
        if self.q_bits == 0 {
            // Byte aligned, so skip the queue
            self.output.extend_from_slice(data);
            if self.output.len() >= DRAIN_SIZE {
                self.writer.write_all(&self.output)?;
                self.output.clear();
            }
            return Ok(());
        }
        data.iter().try_for_each(|&x| self.out8(x))
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits, then writes the buffer to the sink. A stream of whole bytes gets
    /// no padding. Flush MUST be called before dropping the writer or data may be lost.
    pub fn flush(&mut self) -> io::Result<()> {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            trace!("Padding last byte with {} zero bits.", 8 - self.q_bits);
            let mut byte = (self.queue & (0xff >> (8 - self.q_bits)) as u64) as u8;
            byte <<= 8 - self.q_bits;
            self.output.push(byte);
            self.q_bits = 0;
        }
        self.writer.write_all(&self.output)?;
        self.output.clear();
        self.writer.flush()
    }

    /// Flush and return the sink.
    pub fn close(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    /// Debugging function. Bytes and bits not yet written to the sink.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.output.len(), self.q_bits)
    }
}
