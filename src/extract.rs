//! Splitting an integer into its big-endian bytes.

/// Width of the extracted buffer in bytes.
pub const INT_BYTES: usize = 4;

/// Splits `value` into its bytes, most significant first.
///
/// `byte[i]` holds bits `(3 - i) * 8 .. (3 - i) * 8 + 7` of `value`, so the
/// order is fixed by the shifts and independent of host byte order.
#[inline]
pub fn int_to_bytes(value: u32) -> [u8; INT_BYTES] {
    let mut bytes = [0u8; INT_BYTES];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let shift = 8 * (INT_BYTES - 1 - i);
        *byte = ((value >> shift) & 0xff) as u8;
    }
    bytes
}
