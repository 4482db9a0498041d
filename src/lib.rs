//! Prints an unsigned 32-bit integer as its big-endian bytes in hex.

pub mod driver;
pub mod extract;
pub mod hexslice;
