//! Packwire is a compact binary encoding for fixed-width scalars, count-prefixed
//! sequences and text, and tuples.
//!
//! Every type implementing [`Wire`] can report its exact encoded size, append
//! its encoding to a caller-owned buffer, and decode itself back from a
//! [`Cursor`]. The format carries no type tags or headers: the reader must
//! request the same shapes, in the same order, that the writer encoded.
//!
//! | Shape    | Layout                                                   |
//! |----------|----------------------------------------------------------|
//! | Scalar   | the value's raw bytes in native byte order               |
//! | Sequence | 8-byte element count, then each element's encoding       |
//! | Text     | 8-byte byte count, then the raw bytes                    |
//! | Tuple    | each member's encoding in declared order, no framing     |
//!
//! Scalars and counts use the host's native byte order, so data is only
//! portable between hosts of the same endianness.
//!
//! # Examples
//!
//! ```
//! use packwire::{Cursor, decode, encode, size};
//!
//! let mut buffer = Vec::new();
//! encode(&(10u32, "hello".to_string()), &mut buffer);
//! encode(&vec![1u8, 2, 3], &mut buffer);
//! assert_eq!(buffer.len(), size(&(10u32, "hello".to_string())) + size(&vec![1u8, 2, 3]));
//!
//! let mut cursor = Cursor::new(&buffer);
//! let first: (u32, String) = decode(&mut cursor).unwrap();
//! let second: Vec<u8> = decode(&mut cursor).unwrap();
//! assert_eq!(first, (10, "hello".to_string()));
//! assert_eq!(second, vec![1, 2, 3]);
//! assert!(cursor.is_empty());
//! ```

mod cursor;
mod decode;
mod encode;
mod error;
mod traits;
mod types;

pub use crate::cursor::Cursor;
pub use crate::decode::{decode, from_slice};
pub use crate::encode::{encode, size, to_vec};
pub use crate::error::{DecodeError, DecodeErrorKind, DecodeResult};
pub use crate::traits::{Shape, Wire};
pub use crate::types::COUNT_SIZE;

#[doc(hidden)]
pub use crate::traits::fixed_size_of_members;

/// Re-export of the derive macro for implementing the Wire trait on structs.
///
/// Fields are encoded like the members of a tuple, in declaration order.
///
/// # Example
///
/// ```
/// use packwire::{Wire, from_slice, to_vec};
///
/// #[derive(Debug, PartialEq, Wire)]
/// struct Reading {
///     sensor: u16,
///     label: String,
///     #[wire(skip)]
///     cached: Option<u64>,
/// }
///
/// let reading = Reading { sensor: 3, label: "temp".to_string(), cached: Some(9) };
/// let bytes = to_vec(&reading);
/// assert_eq!(bytes.len(), 2 + 8 + 4);
///
/// let decoded: Reading = from_slice(&bytes).unwrap();
/// assert_eq!(decoded, Reading { sensor: 3, label: "temp".to_string(), cached: None });
/// ```
pub use packwire_derive::Wire;
