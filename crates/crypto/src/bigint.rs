use num_bigint::BigUint;

/// Big-endian byte string to unsigned integer, matching the convention
/// `int.from_bytes(data, "big")` uses.
pub fn bytes_to_int(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(data)
}

/// Unsigned integer to its minimal big-endian byte encoding.
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}
