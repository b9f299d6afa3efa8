//! Both stages on one in-memory block: BWT, then Move To Front on the BWT data.
//!
//! Layout: 32 bit big endian key, then one Move To Front index per block byte. This is the form
//! handed to an entropy coder.

use log::debug;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
use crate::error::{BurrowsError, Result};
use crate::tools::mtf::{mtf_decode, mtf_encode};

/// Run the BWT and Move To Front transforms over block.
pub fn encode(block: &[u8]) -> Result<Vec<u8>> {
    let (key, bwt) = bwt_encode(block)?;
    let indices = mtf_encode(&bwt);
    debug!(
        "Pipeline: key {}, {} of {} indices are zero.",
        key,
        indices.iter().filter(|&&i| i == 0).count(),
        indices.len()
    );

    let mut bw = BitWriter::new(Vec::with_capacity(indices.len() + 4));
    bw.out32(key)?;
    bw.write_bytes(&indices)?;
    Ok(bw.close()?)
}

/// Undo encode().
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut br = BitReader::new(data);
    let key = br.int()?.ok_or_else(|| {
        BurrowsError::MalformedStream("pipeline data is shorter than its key".to_string())
    })?;
    let bwt = mtf_decode(&br.rest()?)?;
    bwt_decode(key, &bwt)
}
