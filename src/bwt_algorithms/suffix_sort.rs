use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::{BurrowsError, Result};

/// Define the alternate rotation sorting algorithms
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Prefix doubling over equivalence classes. O(n log n).
    #[default]
    Doubling,
    /// Stable sort with a full rotation comparator. O(n² log n) worst case, fine for small blocks.
    Direct,
}

/// Sorted order of all circular rotations of a block. Entry i is the starting index of the i-th
/// smallest rotation. Identical rotations are ordered by ascending starting index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    order: Vec<usize>,
}

impl SuffixArray {
    /// Sort the rotations of block with the default algorithm.
    pub fn new(block: &[u8]) -> Result<Self> {
        Self::with_algorithm(block, Algorithm::default())
    }

    pub fn with_algorithm(block: &[u8], algorithm: Algorithm) -> Result<Self> {
        let order = match algorithm {
            Algorithm::Doubling => doubling_sort(block)?,
            Algorithm::Direct => direct_sort(block)?,
        };
        Ok(Self { order })
    }

    /// Length of the block that was sorted.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false. An empty block is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the starting index of the i-th sorted rotation.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.order
            .get(i)
            .copied()
            .ok_or(BurrowsError::InvalidIndex {
                index: i,
                limit: self.order.len(),
            })
    }

    /// The full sorted order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

fn check_block(block: &[u8]) -> Result<()> {
    if block.is_empty() {
        return Err(BurrowsError::InvalidArgument(
            "cannot sort the rotations of an empty block".to_string(),
        ));
    }
    Ok(())
}

/// Sort rotations by doubling the compared prefix length each pass. After the pass for length k,
/// class[i] is the rank of the first k bytes of rotation i among all distinct k-prefixes.
pub fn doubling_sort(block: &[u8]) -> Result<Vec<usize>> {
    check_block(block)?;
    let n = block.len();

    // Length 1 prefixes: a counting sort on the byte values themselves.
    let mut order = counting_sort(n, 256, |i| block[i] as usize, 0..n);
    let mut class = vec![0_usize; n];
    let mut classes = 1;
    for w in 1..n {
        if block[order[w]] != block[order[w - 1]] {
            classes += 1;
        }
        class[order[w]] = classes - 1;
    }

    let mut k = 1;
    let mut next = vec![0_usize; n];
    while k < n && classes < n {
        // Order is already sorted by the second half (the k-prefix starting at i + k), so shifting
        // every entry back by k and stably sorting on the first half sorts by the 2k-prefix.
        let shifted = order.iter().map(|&i| (i + n - k) % n).collect::<Vec<usize>>();
        order = counting_sort(n, classes, |i| class[i], shifted.into_iter());

        next[order[0]] = 0;
        classes = 1;
        for w in 1..n {
            let cur = (class[order[w]], class[(order[w] + k) % n]);
            let prev = (class[order[w - 1]], class[(order[w - 1] + k) % n]);
            if cur != prev {
                classes += 1;
            }
            next[order[w]] = classes - 1;
        }
        std::mem::swap(&mut class, &mut next);
        k <<= 1;
        trace!("Prefix length {}: {} classes.", k, classes);
    }
    debug!("Doubling sort finished with {} distinct rotations of {}.", classes, n);

    // The classes are now final ranks. Bucketing the indices in ascending order puts identical
    // rotations in ascending index order, whatever order the passes above left them in.
    Ok(counting_sort(n, classes, |i| class[i], 0..n))
}

/// Stable counting sort of the indices yielded by items, keyed by key(i) < buckets.
fn counting_sort<F, I>(n: usize, buckets: usize, key: F, items: I) -> Vec<usize>
where
    F: Fn(usize) -> usize,
    I: Iterator<Item = usize> + Clone,
{
    let mut start = vec![0_usize; buckets + 1];
    for i in items.clone() {
        start[key(i) + 1] += 1;
    }
    for b in 0..buckets {
        start[b + 1] += start[b];
    }
    let mut out = vec![0_usize; n];
    for i in items {
        let b = key(i);
        out[start[b]] = i;
        start[b] += 1;
    }
    out
}

/// Sort rotations with a stable sort and a full rotation comparator.
pub fn direct_sort(block: &[u8]) -> Result<Vec<usize>> {
    check_block(block)?;
    let mut index = (0..block.len()).collect::<Vec<usize>>();
    // sort_by is stable, so equal rotations keep their ascending index order.
    index.sort_by(|&a, &b| block_compare(a, b, block));
    Ok(index)
}

/// Compare the rotations starting at a and b over the full block length.
pub fn block_compare(a: usize, b: usize, block: &[u8]) -> Ordering {
    let min = std::cmp::min(block[a..].len(), block[b..].len());

    // Lexicographical comparison up to the end of the shorter tail
    let mut result = block[a..a + min].cmp(&block[b..b + min]);

    // Implement wraparound if needed
    if result == Ordering::Equal {
        if a < b {
            let to_end = block.len() - a - min;
            result = block[(a + min)..].cmp(&block[..to_end]);
            if result == Ordering::Equal {
                let rest_of_block = block.len() - to_end - min;
                return block[..rest_of_block].cmp(&block[to_end..(to_end + rest_of_block)]);
            }
        } else {
            let to_end = block.len() - b - min;
            result = block[..to_end].cmp(&block[(b + min)..]);
            if result == Ordering::Equal {
                let rest_of_block = block.len() - to_end - min;
                return block[to_end..(to_end + rest_of_block)].cmp(&block[..rest_of_block]);
            }
        }
    }
    result
}
