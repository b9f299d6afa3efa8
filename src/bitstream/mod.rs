//! The bitstream module forms the I/O subsystem for the burrows transforms.
//!
//! Both readers and writers work most significant bit first over any std::io source or sink.
//! The transforms only ever move whole bytes and 32 bit keys, so a stream that is closed
//! after whole-byte writes carries no padding.
//!
pub mod bitreader;
pub mod bitwriter;
