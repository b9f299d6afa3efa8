//! The compression module applies the transforms to byte streams.
//!
//! - compress: BWT encode a whole stream, or Move To Front encode it a byte at a time.
//! - decompress: the inverse of each.
//! - pipeline: BWT followed by Move To Front on a single in-memory block.
//!
//! The BWT needs the whole block in memory before it can write anything. Move To Front has no
//! such limit and runs over streams of any length.
//!

pub mod compress;
pub mod decompress;
pub mod pipeline;
