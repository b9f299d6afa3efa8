//! The bwt_algorithms module forms the sorting subsystem for the burrows transforms.
//!
//! The Burrow-Wheeler Transform (BWT) alters the data in such a way that runs of similar bytes
//! are more likely to occur. It needs every circular rotation of the block in sorted order,
//! which is the "computationally expensive" part. Two sorts are provided: a prefix doubling
//! sort for general use and a direct comparison sort. They give identical results.
//!
pub mod bwt_sort;
pub mod suffix_sort;
