use crate::{Cursor, DecodeResult, Wire};

/// Decodes one value of type `T` from the cursor, advancing it past the
/// consumed bytes.
pub fn decode<T: Wire>(cursor: &mut Cursor<'_>) -> DecodeResult<T> {
    T::decode_value(cursor)
}

/// Decodes a value from the start of `data`.
///
/// Any bytes after the value are ignored; use a [`Cursor`] and check
/// [`Cursor::is_empty`] when trailing data matters.
pub fn from_slice<T: Wire>(data: &[u8]) -> DecodeResult<T> {
    decode(&mut Cursor::new(data))
}
