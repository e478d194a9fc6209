use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

use crate::traits::fixed_size_of_members;
use crate::{Cursor, DecodeError, DecodeErrorKind, DecodeResult, Shape, Wire};

/// Width of the element count written in front of sequences and text.
pub const COUNT_SIZE: usize = mem::size_of::<u64>();

fn write_count(buffer: &mut Vec<u8>, count: usize) {
    buffer.extend_from_slice(&(count as u64).to_ne_bytes());
}

macro_rules! impl_wire_scalar {
    ($ty:ty) => {
        impl Wire for $ty {
            const SHAPE: Shape = Shape::Scalar;
            const FIXED_SIZE: Option<usize> = Some(mem::size_of::<$ty>());

            fn encoded_len(&self) -> usize {
                mem::size_of::<Self>()
            }

            fn encode_value(&self, buffer: &mut Vec<u8>) {
                buffer.extend_from_slice(&self.to_ne_bytes());
            }

            fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
                const SIZE: usize = mem::size_of::<$ty>();
                Ok(<$ty>::from_ne_bytes(cursor.read_array::<SIZE>()?))
            }
        }
    };
}

impl_wire_scalar!(u8);
impl_wire_scalar!(u16);
impl_wire_scalar!(u32);
impl_wire_scalar!(u64);
impl_wire_scalar!(u128);
impl_wire_scalar!(i8);
impl_wire_scalar!(i16);
impl_wire_scalar!(i32);
impl_wire_scalar!(i64);
impl_wire_scalar!(i128);
impl_wire_scalar!(f32);
impl_wire_scalar!(f64);

fn text_len(bytes: &[u8]) -> usize {
    COUNT_SIZE + bytes.len()
}

fn encode_text(bytes: &[u8], buffer: &mut Vec<u8>) {
    buffer.reserve(text_len(bytes));
    write_count(buffer, bytes.len());
    buffer.extend_from_slice(bytes);
}

fn decode_text<'a>(cursor: &mut Cursor<'a>) -> DecodeResult<&'a str> {
    let len = cursor.read_count()?;
    let bytes = cursor.read(len)?;
    std::str::from_utf8(bytes).map_err(|_| DecodeError::new(DecodeErrorKind::InvalidUtf8))
}

impl Wire for String {
    const SHAPE: Shape = Shape::Text;

    fn encoded_len(&self) -> usize {
        text_len(self.as_bytes())
    }

    fn encode_value(&self, buffer: &mut Vec<u8>) {
        encode_text(self.as_bytes(), buffer);
    }

    fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        decode_text(cursor).map(String::from)
    }
}

impl Wire for Box<str> {
    const SHAPE: Shape = Shape::Text;

    fn encoded_len(&self) -> usize {
        text_len(self.as_bytes())
    }

    fn encode_value(&self, buffer: &mut Vec<u8>) {
        encode_text(self.as_bytes(), buffer);
    }

    fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        decode_text(cursor).map(Box::from)
    }
}

impl Wire for Arc<str> {
    const SHAPE: Shape = Shape::Text;

    fn encoded_len(&self) -> usize {
        text_len(self.as_bytes())
    }

    fn encode_value(&self, buffer: &mut Vec<u8>) {
        encode_text(self.as_bytes(), buffer);
    }

    fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        decode_text(cursor).map(Arc::from)
    }
}

fn sequence_len<'a, T: Wire + 'a>(elements: impl IntoIterator<Item = &'a T>) -> usize {
    let mut size = COUNT_SIZE;
    for elem in elements {
        size += elem.encoded_len();
    }
    size
}

fn encode_sequence<'a, T: Wire + 'a>(
    len: usize,
    elements: impl IntoIterator<Item = &'a T>,
    buffer: &mut Vec<u8>,
) {
    if let Some(width) = T::FIXED_SIZE {
        buffer.reserve(COUNT_SIZE + len * width);
    }
    write_count(buffer, len);
    for elem in elements {
        elem.encode_value(buffer);
    }
}

fn decode_sequence<T: Wire>(cursor: &mut Cursor<'_>) -> DecodeResult<Vec<T>> {
    let len = cursor.read_count()?;

    match T::FIXED_SIZE {
        // Elements that encode to nothing but occupy memory are capped by the bytes left.
        Some(0) if mem::size_of::<T>() != 0 => {
            if len > cursor.remaining() {
                return Err(DecodeError::truncated(len, cursor.remaining()));
            }
        }
        Some(width) => {
            let needed = len.saturating_mul(width);
            if needed > cursor.remaining() {
                return Err(DecodeError::truncated(needed, cursor.remaining()));
            }
        }
        None => {}
    }

    // Zero-width elements aside, every element consumes at least one byte.
    let mut elements = Vec::with_capacity(len.min(cursor.remaining()));
    for _ in 0..len {
        elements.push(T::decode_value(cursor)?);
    }
    Ok(elements)
}

impl<T: Wire> Wire for Vec<T> {
    const SHAPE: Shape = Shape::Sequence;

    fn encoded_len(&self) -> usize {
        sequence_len(self)
    }

    fn encode_value(&self, buffer: &mut Vec<u8>) {
        encode_sequence(self.len(), self, buffer);
    }

    fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        decode_sequence(cursor)
    }
}

impl<T: Wire> Wire for VecDeque<T> {
    const SHAPE: Shape = Shape::Sequence;

    fn encoded_len(&self) -> usize {
        sequence_len(self)
    }

    fn encode_value(&self, buffer: &mut Vec<u8>) {
        encode_sequence(self.len(), self, buffer);
    }

    fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        decode_sequence(cursor).map(VecDeque::from)
    }
}

impl<T: Wire> Wire for Box<[T]> {
    const SHAPE: Shape = Shape::Sequence;

    fn encoded_len(&self) -> usize {
        sequence_len(self.iter())
    }

    fn encode_value(&self, buffer: &mut Vec<u8>) {
        encode_sequence(self.len(), self.iter(), buffer);
    }

    fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        decode_sequence(cursor).map(Vec::into_boxed_slice)
    }
}

impl Wire for bytes::Bytes {
    const SHAPE: Shape = Shape::Sequence;

    fn encoded_len(&self) -> usize {
        COUNT_SIZE + self.len()
    }

    fn encode_value(&self, buffer: &mut Vec<u8>) {
        buffer.reserve(COUNT_SIZE + self.len());
        write_count(buffer, self.len());
        buffer.extend_from_slice(self);
    }

    fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        let len = cursor.read_count()?;
        Ok(bytes::Bytes::copy_from_slice(cursor.read(len)?))
    }
}

impl Wire for () {
    const SHAPE: Shape = Shape::Tuple;
    const FIXED_SIZE: Option<usize> = Some(0);

    fn encoded_len(&self) -> usize {
        0
    }

    fn encode_value(&self, _buffer: &mut Vec<u8>) {}

    fn decode_value(_cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        Ok(())
    }
}

// Tuple expressions evaluate left to right, so members decode in declared order.
macro_rules! impl_wire_tuple {
    ($($name:ident $index:tt),+) => {
        impl<$($name: Wire),+> Wire for ($($name,)+) {
            const SHAPE: Shape = Shape::Tuple;
            const FIXED_SIZE: Option<usize> = fixed_size_of_members(&[$($name::FIXED_SIZE),+]);

            fn encoded_len(&self) -> usize {
                0 $(+ self.$index.encoded_len())+
            }

            fn encode_value(&self, buffer: &mut Vec<u8>) {
                $(self.$index.encode_value(buffer);)+
            }

            fn decode_value(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
                Ok(($($name::decode_value(cursor)?,)+))
            }
        }
    };
}

impl_wire_tuple!(T0 0);
impl_wire_tuple!(T0 0, T1 1);
impl_wire_tuple!(T0 0, T1 1, T2 2);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3, T4 4);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10);
impl_wire_tuple!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10, T11 11);
