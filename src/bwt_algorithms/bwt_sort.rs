use log::{debug, info};

use super::suffix_sort::{Algorithm, SuffixArray};
use crate::error::{BurrowsError, Result};
use crate::tools::freq_count::freqs;

/// Burrows-Wheeler-Transform using the default rotation sort.
/// This returns a u32 Key and a u8 vec of the BWT data.
pub fn bwt_encode(block: &[u8]) -> Result<(u32, Vec<u8>)> {
    bwt_encode_with(block, Algorithm::default())
}

/// Burrows-Wheeler-Transform using the requested rotation sort. The key is the position in the
/// sorted order of the unrotated block. Each output byte is the byte just before (circularly) the
/// start of the matching sorted rotation.
pub fn bwt_encode_with(block: &[u8], algorithm: Algorithm) -> Result<(u32, Vec<u8>)> {
    if block.is_empty() {
        return Err(BurrowsError::InvalidArgument(
            "cannot transform an empty block".to_string(),
        ));
    }
    // The key is written as a u32, so the block must be addressable by one.
    if u32::try_from(block.len()).is_err() {
        return Err(BurrowsError::InvalidArgument(format!(
            "block of {} bytes is too large for a 32 bit key",
            block.len()
        )));
    }

    info!("Using {:?} algorithm on {} bytes.", algorithm, block.len());
    let index = SuffixArray::with_algorithm(block, algorithm)?.into_order();

    // Get key and BWT output
    let end = block.len();
    let mut key = 0_u32;
    let mut bwt = vec![0; end];
    for (i, &start) in index.iter().enumerate() {
        if start == 0 {
            key = i as u32;
        }
        bwt[i] = block[(start + end - 1) % end];
    }
    debug!("Key is {}.", key);
    Ok((key, bwt))
}

/// Decode a Burrows-Wheeler-Transform.
///
/// The first column of the sorted rotations is the BWT data sorted by byte value. Equal bytes
/// keep the same relative order in both columns, so a stable counting sort tells us for every
/// row of the first column which row holds its successor in the original data.
pub fn bwt_decode(key: u32, bwt_in: &[u8]) -> Result<Vec<u8>> {
    // Calculate end once.
    let end = bwt_in.len();
    if end == 0 {
        return Err(BurrowsError::MalformedStream(
            "no BWT data follows the key".to_string(),
        ));
    }
    if key as usize >= end {
        return Err(BurrowsError::InvalidIndex {
            index: key as usize,
            limit: end,
        });
    }

    // Convert frequency count to a cumulative sum of frequencies
    let freq_in = freqs(bwt_in);
    let mut freq = [0_usize; 256];
    for i in 0..255 {
        freq[i + 1] = freq[i] + freq_in[i];
    }

    // Build the first column and the successor vector in one stable pass. Rows holding the same
    // byte are filled in input order, which is the FIFO order of that byte's positions.
    let mut first = vec![0_u8; end];
    let mut next = vec![0_usize; end];
    for (i, &s) in bwt_in.iter().enumerate() {
        let row = freq[s as usize];
        first[row] = s;
        next[row] = i;
        freq[s as usize] += 1;
    }

    // Walk the chain from the key row
    let mut data = Vec::with_capacity(end);
    let mut row = key as usize;
    for _ in 0..end {
        data.push(first[row]);
        row = next[row];
    }
    Ok(data)
}
