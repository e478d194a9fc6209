use crate::{DecodeError, DecodeResult};

/// A read position into a borrowed byte sequence.
///
/// Every decode step consumes bytes from the front of the remaining data, so a
/// single cursor can be handed to several [`decode`](crate::decode) calls in a
/// row to recover values in the order they were encoded.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `data`.
    pub const fn new(data: &'a [u8]) -> Self {
        Cursor { data, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left between the current position and the end.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns true once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consumes exactly `amt` bytes, or fails without moving if fewer remain.
    pub fn read(&mut self, amt: usize) -> DecodeResult<&'a [u8]> {
        let available = self.remaining();
        if amt > available {
            return Err(DecodeError::truncated(amt, available));
        }
        let start = self.position;
        self.position += amt;
        Ok(&self.data[start..self.position])
    }

    /// Consumes exactly `N` bytes as a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let available = self.remaining();
        match self.data[self.position..].first_chunk::<N>() {
            Some(chunk) => {
                self.position += N;
                Ok(*chunk)
            }
            None => Err(DecodeError::truncated(N, available)),
        }
    }

    /// Reads an 8-byte element count.
    ///
    /// A count that does not fit in `usize` can never be backed by enough
    /// bytes, so it is reported as truncated input.
    pub fn read_count(&mut self) -> DecodeResult<usize> {
        let count = u64::from_ne_bytes(self.read_array::<8>()?);
        usize::try_from(count).map_err(|_| DecodeError::truncated(usize::MAX, self.remaining()))
    }
}
