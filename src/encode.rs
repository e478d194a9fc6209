use crate::Wire;

/// Returns the exact number of bytes `value` occupies once encoded.
pub fn size<T: Wire>(value: &T) -> usize {
    value.encoded_len()
}

/// Appends the encoding of `value` to the end of `buffer`.
///
/// Repeated calls against one buffer lay values out back to back; decode them
/// in the same order from a single [`Cursor`](crate::Cursor).
pub fn encode<T: Wire>(value: &T, buffer: &mut Vec<u8>) {
    value.encode_value(buffer);
}

/// Encodes a value into a fresh buffer sized up front.
pub fn to_vec<T: Wire>(value: &T) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(size(value));
    encode(value, &mut buffer);
    buffer
}
