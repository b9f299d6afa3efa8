//! The tools module provides several helper functions for the burrows transforms.
//!
//! The tools are:
//! - cli: Command line interface and log level setup.
//! - freq_count: Frequency count of byte values.
//! - mtf: Move-To-Front transform.
//!
pub mod cli;
pub mod freq_count;
pub mod mtf;
