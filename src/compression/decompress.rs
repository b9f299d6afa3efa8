use std::io::{Read, Write};

use log::{debug, error, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::bwt_algorithms::bwt_sort::bwt_decode;
use crate::error::{BurrowsError, Result};
use crate::tools::mtf::MtfIndex;

const EOF_MESSAGE: &str = "Unexpected end of stream reading the key";

/// Read a 32 bit key and the BWT data that follows it, and write the original block.
/// The block is only written once it has been fully rebuilt.
pub fn bwt_decompress<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut br = BitReader::new(reader);

    // Get key (origin pointer)
    let key = br
        .int()?
        .ok_or_else(|| BurrowsError::MalformedStream(EOF_MESSAGE.to_string()))?;
    info!("Key is {}.", key);

    let bwt = br.rest()?;
    debug!("Found {} bytes of BWT data.", bwt.len());

    let block = bwt_decode(key, &bwt).map_err(|e| {
        error!("Fatal error: {}", e);
        e
    })?;

    let mut bw = BitWriter::new(writer);
    bw.write_bytes(&block)?;
    bw.flush()?;
    Ok(())
}

/// Move To Front decode the reader a byte at a time.
/// Output is written as it is decoded; if an error comes back, treat all of it as rejected.
pub fn mtf_decompress<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut br = BitReader::new(reader);
    let mut bw = BitWriter::new(writer);
    let mut index = MtfIndex::new();
    let mut count = 0_usize;

    while let Some(idx) = br.byte()? {
        bw.out8(index.decode(idx as usize)?)?;
        count += 1;
    }
    bw.flush()?;
    info!("Move To Front decoded {} bytes.", count);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bwt_decompress_test() {
        let mut input = vec![0, 0, 0, 3];
        input.extend_from_slice(b"ARD!RCAAAABB");
        let mut out: Vec<u8> = Vec::new();
        bwt_decompress(input.as_slice(), &mut out).unwrap();
        assert_eq!(out, b"ABRACADABRA!");
    }

    #[test]
    fn truncated_key_test() {
        for input in [&[][..], &[0_u8, 0, 3][..]] {
            let mut out: Vec<u8> = Vec::new();
            let result = bwt_decompress(input, &mut out);
            assert!(matches!(result, Err(BurrowsError::MalformedStream(_))));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn missing_data_test() {
        let mut out: Vec<u8> = Vec::new();
        let result = bwt_decompress(&[0_u8, 0, 0, 0][..], &mut out);
        assert!(matches!(result, Err(BurrowsError::MalformedStream(_))));
    }

    #[test]
    fn corrupt_key_test() {
        let mut input = vec![0, 0, 0, 12];
        input.extend_from_slice(b"ARD!RCAAAABB");
        let mut out: Vec<u8> = Vec::new();
        let result = bwt_decompress(input.as_slice(), &mut out);
        assert!(matches!(
            result,
            Err(BurrowsError::InvalidIndex { index: 12, limit: 12 })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn mtf_decompress_test() {
        let input = [0x41_u8, 0x42, 0x52, 0x02, 0x44, 0x01, 0x45, 0x01, 0x04, 0x04, 0x02, 0x26];
        let mut out: Vec<u8> = Vec::new();
        mtf_decompress(&input[..], &mut out).unwrap();
        assert_eq!(out, b"ABRACADABRA!");
    }
}
