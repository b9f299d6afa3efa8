use std::io::{Read, Write};

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::error::{BurrowsError, Result};
use crate::tools::mtf::MtfIndex;

/*
    The Burrows-Wheeler stage needs the whole block before it can write anything, so the input is
    read to the end first. The output is a 32 bit big endian key followed by the BWT data. There is
    no length field; the block length is whatever follows the key.
*/

/// Burrows-Wheeler encode everything the reader holds and write key + data to the writer.
/// Nothing is written if the input is empty.
pub fn bwt_compress<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut br = BitReader::new(reader);
    let block = br.rest()?;
    if block.is_empty() {
        return Err(BurrowsError::InvalidArgument(
            "no input data to transform".to_string(),
        ));
    }
    info!("Read {} bytes.", block.len());

    let (key, bwt) = bwt_encode(&block)?;

    let mut bw = BitWriter::new(writer);
    bw.out32(key)?;
    bw.write_bytes(&bwt)?;
    bw.flush()?;
    debug!("Wrote key {} and {} bytes of BWT data.", key, bwt.len());
    Ok(())
}

/// Move To Front encode the reader a byte at a time. Empty input gives empty output.
pub fn mtf_compress<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut br = BitReader::new(reader);
    let mut bw = BitWriter::new(writer);
    let mut index = MtfIndex::new();
    let mut count = 0_usize;

    while let Some(byte) = br.byte()? {
        bw.out8(index.encode(byte))?;
        count += 1;
    }
    bw.flush()?;
    info!("Move To Front encoded {} bytes.", count);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bwt_compress_test() {
        let mut out: Vec<u8> = Vec::new();
        bwt_compress("ABRACADABRA!".as_bytes(), &mut out).unwrap();
        assert_eq!(&out[..4], &[0, 0, 0, 3]);
        assert_eq!(&out[4..], b"ARD!RCAAAABB");
    }

    #[test]
    fn bwt_compress_empty_test() {
        let mut out: Vec<u8> = Vec::new();
        let result = bwt_compress("".as_bytes(), &mut out);
        assert!(matches!(result, Err(BurrowsError::InvalidArgument(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn mtf_compress_test() {
        let mut out: Vec<u8> = Vec::new();
        mtf_compress("ABRACADABRA!".as_bytes(), &mut out).unwrap();
        assert_eq!(
            out,
            vec![0x41, 0x42, 0x52, 0x02, 0x44, 0x01, 0x45, 0x01, 0x04, 0x04, 0x02, 0x26]
        );
    }

    #[test]
    fn mtf_compress_empty_test() {
        let mut out: Vec<u8> = Vec::new();
        mtf_compress("".as_bytes(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
