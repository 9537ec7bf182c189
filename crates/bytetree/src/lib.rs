//! Rope-like builders for byte and text content.
//!
//! [`BytesTree`] composes byte fragments — raw chunks and text — into one
//! logical byte string without copying at each composition step. Every
//! combinator ([`append`], [`prepend`], [`concat`]) allocates exactly one
//! small wrapper node; fragment contents are only copied once, when the
//! finished tree is materialized with [`to_bytes`]. [`StringTree`] provides
//! the same contract over textual content.
//!
//! Trees are persistent: combinators consume their operands, but [`Clone`]
//! is O(1) (structural sharing), so a builder can be reused as an operand
//! of any number of later compositions.
//!
//! ```
//! use bytetree::BytesTree;
//!
//! let greeting = BytesTree::from_text("hello, ")
//!     .append_bytes(&b"world"[..])
//!     .append_text("!");
//!
//! assert_eq!(greeting.byte_len(), 13);
//! assert_eq!(greeting.to_bytes(), "hello, world!");
//! ```
//!
//! A small base64 codec over raw byte slices is included as well; see
//! [`encode_base64`] and [`decode_base64`].
//!
//! [`append`]: BytesTree::append
//! [`prepend`]: BytesTree::prepend
//! [`concat`]: BytesTree::concat
//! [`to_bytes`]: BytesTree::to_bytes

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod base64;
mod bytes_tree;
mod string_tree;

#[cfg(test)]
mod tests;

pub use bytes::Bytes;

pub use self::base64::{
    DecodeError, decode_base64, decode_base64_url, encode_base64, encode_base64_url,
};
pub use bytes_tree::BytesTree;
pub use string_tree::StringTree;
