//! Burrows-Wheeler and Move-To-Front transforms, the reversible preprocessing stages of a
//! block-sorting compressor.
//!
//! Encoding runs a block through three pieces:
//! - Rotation sort: order every circular rotation of the block.
//! - Burrows-Wheeler Transform: use that order to permute the block so equal bytes cluster.
//! - Move To Front transform: turn the clusters into runs of small indices for an entropy coder.
//!
//! Decoding is the mirror. Two programs drive the transforms over stdin/stdout:
//!
//! `$> burrows-wheeler - < abra.txt | move-to-front - > abra.bwt`
//!
//! `$> move-to-front + < abra.bwt | burrows-wheeler + > abra.txt`
//!
//! The `-` flag encodes and `+` decodes. No other flags exist.
//!
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod tools;
