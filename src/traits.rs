use crate::Cursor;

/// The four encoding shapes every [`Wire`] type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Fixed-width number stored as its raw native-order bytes.
    Scalar,
    /// Homogeneous collection: 8-byte count, then each element.
    Sequence,
    /// Character data: 8-byte count, then the raw bytes.
    Text,
    /// Fixed-arity heterogeneous members concatenated with no framing.
    Tuple,
}

/// Core trait for types that can be sized, encoded and decoded in the packwire format.
///
/// The three methods must agree: `encode_value` appends exactly `encoded_len`
/// bytes, and `decode_value` consumes exactly those bytes back.
pub trait Wire: Sized {
    /// Which of the four shapes this type encodes as.
    const SHAPE: Shape;

    /// The encoded length shared by every value of this type, if there is one.
    const FIXED_SIZE: Option<usize> = None;

    /// Returns the number of bytes `encode_value` will append.
    fn encoded_len(&self) -> usize;

    /// Appends the encoding of the value to the end of `buffer`.
    ///
    /// Existing buffer contents are never read or modified.
    fn encode_value(&self, buffer: &mut Vec<u8>);

    /// Decodes a value starting at the cursor's position, leaving the cursor
    /// on the first byte after it.
    fn decode_value(cursor: &mut Cursor<'_>) -> crate::DecodeResult<Self>;
}

/// Sums member sizes when every member has a fixed size.
#[doc(hidden)]
pub const fn fixed_size_of_members(members: &[Option<usize>]) -> Option<usize> {
    let mut total = 0;
    let mut i = 0;
    while i < members.len() {
        match members[i] {
            Some(size) => total += size,
            None => return None,
        }
        i += 1;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::{Shape, Wire, fixed_size_of_members};

    #[test]
    fn test_fixed_size_of_members() {
        assert_eq!(fixed_size_of_members(&[]), Some(0));
        assert_eq!(fixed_size_of_members(&[Some(4), Some(8)]), Some(12));
        assert_eq!(fixed_size_of_members(&[Some(4), None, Some(1)]), None);
    }

    #[test]
    fn test_shapes() {
        assert_eq!(<u32 as Wire>::SHAPE, Shape::Scalar);
        assert_eq!(<Vec<u8> as Wire>::SHAPE, Shape::Sequence);
        assert_eq!(<String as Wire>::SHAPE, Shape::Text);
        assert_eq!(<(u8, String) as Wire>::SHAPE, Shape::Tuple);
    }

    #[test]
    fn test_fixed_sizes() {
        assert_eq!(<u16 as Wire>::FIXED_SIZE, Some(2));
        assert_eq!(<(i32, u64) as Wire>::FIXED_SIZE, Some(12));
        assert_eq!(<(i32, String) as Wire>::FIXED_SIZE, None);
        assert_eq!(<Vec<u8> as Wire>::FIXED_SIZE, None);
        assert_eq!(<() as Wire>::FIXED_SIZE, Some(0));
    }
}
