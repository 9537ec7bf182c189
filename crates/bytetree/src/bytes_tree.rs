//! Persistent rope of byte fragments.
//!
//! What it does
//! - Represents a logical byte sequence as a tree whose leaves are raw byte
//!   chunks ([`Bytes`]) or text ([`StringTree`]), and whose interior nodes
//!   concatenate their children in order.
//! - Combinators allocate one wrapper node and adopt their operands; they
//!   never traverse or copy fragment contents. Repeated chaining therefore
//!   stays cheap no matter how much has already been combined.
//! - Materialization flattens the tree into one contiguous buffer in a
//!   single pass over the leaves.
//!
//! Invariants
//! - In-order leaf traversal is the logical byte sequence. No combinator
//!   reorders, drops, or duplicates fragments.
//! - Trees are immutable; combinators return new values. `Clone` bumps
//!   reference counts and is O(1).
//! - Traversal and teardown use explicit heap work lists. Trees built by
//!   long append chains are as deep as the chain is long, so call-stack
//!   recursion anywhere on those paths is a defect, not a style choice.

use alloc::{string::String, sync::Arc, vec, vec::Vec};
use core::{fmt, mem, ops::ControlFlow, slice};

use bstr::BStr;
use bytes::{Bytes, BytesMut};

use crate::string_tree::StringTree;

/// A rope of byte fragments with O(1) concatenation.
///
/// `BytesTree` accumulates fragments cheaply and pays the linear cost of
/// producing one contiguous buffer exactly once, in [`to_bytes`]. Use it
/// when assembling output from many pieces — serialized records, wire
/// messages, file contents — where appending to a flat buffer would copy
/// earlier fragments over and over.
///
/// Combinators consume `self` and return the combined tree. To keep using
/// a tree after combining it, clone it first; clones share structure and
/// cost O(1).
///
/// # Examples
///
/// ```
/// use bytetree::BytesTree;
///
/// let head = BytesTree::from_bytes(vec![0xDE_u8, 0xAD]);
/// let framed = head
///     .clone()
///     .append_bytes(vec![0xBE_u8, 0xEF])
///     .prepend_bytes(vec![0x02_u8]);
///
/// assert_eq!(framed.to_bytes(), vec![0x02_u8, 0xDE, 0xAD, 0xBE, 0xEF]);
/// // `head` is still usable: clones share structure instead of copying.
/// assert_eq!(head.byte_len(), 2);
/// ```
///
/// [`to_bytes`]: BytesTree::to_bytes
#[derive(Clone, Default)]
pub struct BytesTree {
    repr: Repr,
}

#[derive(Clone, Default)]
enum Repr {
    #[default]
    Empty,
    Bytes(Bytes),
    Text(StringTree),
    // `Arc<Vec<_>>` rather than `Arc<[_]>`: adopting the caller's `Vec` in
    // `concat` must not copy it.
    Many(Arc<Vec<BytesTree>>),
}

/// A byte-producing fragment encountered during in-order traversal.
enum Leaf<'a> {
    Bytes(&'a Bytes),
    Text(&'a StringTree),
}

impl BytesTree {
    /// Creates an empty tree, the identity element for concatenation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::BytesTree;
    ///
    /// let tree = BytesTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.byte_len(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { repr: Repr::Empty }
    }

    /// Creates a tree holding one raw byte fragment.
    ///
    /// Accepts anything convertible to [`Bytes`] (`Vec<u8>`, `Bytes`,
    /// `&'static [u8]`, …); ownership of the buffer is shared, not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::BytesTree;
    ///
    /// let tree = BytesTree::from_bytes(vec![1_u8, 2, 3]);
    /// assert_eq!(tree.byte_len(), 3);
    /// ```
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Self::new();
        }
        Self {
            repr: Repr::Bytes(bytes),
        }
    }

    /// Creates a tree holding one text fragment.
    ///
    /// The text contributes its UTF-8 encoding to the byte sequence at
    /// materialization time. Building the fragment may copy the input once
    /// when it is not already reference-counted (`&str`, `String`); an
    /// `Arc<str>` is adopted as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::BytesTree;
    ///
    /// let tree = BytesTree::from_text("héllo");
    /// assert_eq!(tree.byte_len(), 6);
    /// assert_eq!(tree.to_bytes(), "héllo".as_bytes());
    /// ```
    pub fn from_text(text: impl Into<Arc<str>>) -> Self {
        Self::from_string_tree(StringTree::from_string(text))
    }

    /// Wraps an already-composed [`StringTree`] as a text fragment. O(1);
    /// the text tree is adopted without inspecting its content.
    #[must_use]
    pub fn from_string_tree(tree: StringTree) -> Self {
        Self {
            repr: Repr::Text(tree),
        }
    }

    /// Returns the tree denoting `self` followed by `suffix`.
    ///
    /// O(1): allocates one node, adopts both operands untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::BytesTree;
    ///
    /// let tree = BytesTree::from_bytes(vec![0_u8])
    ///     .append(BytesTree::from_bytes(vec![1_u8]))
    ///     .append(BytesTree::from_bytes(vec![2_u8]));
    /// assert_eq!(tree.to_bytes(), vec![0_u8, 1, 2]);
    /// ```
    #[must_use]
    pub fn append(self, suffix: BytesTree) -> Self {
        if matches!(self.repr, Repr::Empty) {
            return suffix;
        }
        if matches!(suffix.repr, Repr::Empty) {
            return self;
        }
        Self {
            repr: Repr::Many(Arc::new(vec![self, suffix])),
        }
    }

    /// Returns the tree denoting `prefix` followed by `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::BytesTree;
    ///
    /// let tree = BytesTree::from_bytes(vec![0_u8])
    ///     .prepend(BytesTree::from_bytes(vec![1_u8]))
    ///     .prepend(BytesTree::from_bytes(vec![2_u8]));
    /// assert_eq!(tree.to_bytes(), vec![2_u8, 1, 0]);
    /// ```
    #[must_use]
    pub fn prepend(self, prefix: BytesTree) -> Self {
        prefix.append(self)
    }

    /// Appends one raw byte fragment.
    pub fn append_bytes(self, bytes: impl Into<Bytes>) -> Self {
        self.append(Self::from_bytes(bytes))
    }

    /// Prepends one raw byte fragment.
    pub fn prepend_bytes(self, bytes: impl Into<Bytes>) -> Self {
        self.prepend(Self::from_bytes(bytes))
    }

    /// Appends one text fragment.
    pub fn append_text(self, text: impl Into<Arc<str>>) -> Self {
        self.append(Self::from_text(text))
    }

    /// Prepends one text fragment.
    pub fn prepend_text(self, text: impl Into<Arc<str>>) -> Self {
        self.prepend(Self::from_text(text))
    }

    /// Concatenates `trees` in order into a single tree.
    ///
    /// The vector is adopted directly as the node's child list, so this is
    /// O(1) no matter how many trees are passed. `concat(vec![])` is the
    /// empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::BytesTree;
    ///
    /// let tree = BytesTree::concat(vec![
    ///     BytesTree::from_bytes(vec![1_u8]),
    ///     BytesTree::from_text("two"),
    ///     BytesTree::from_bytes(vec![3_u8]),
    /// ]);
    /// assert_eq!(tree.to_bytes(), b"\x01two\x03".as_ref());
    /// ```
    #[must_use]
    pub fn concat(trees: Vec<BytesTree>) -> Self {
        if trees.is_empty() {
            return Self::new();
        }
        Self {
            repr: Repr::Many(Arc::new(trees)),
        }
    }

    /// Materializes the logical sequence into one contiguous buffer.
    ///
    /// Runs in time linear in the output size plus the number of nodes;
    /// the destination is allocated once, sized by [`byte_len`]. Trees of
    /// any depth are safe: traversal keeps its pending work on the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::BytesTree;
    ///
    /// let tree = BytesTree::from_text("a").append_bytes(vec![b'b']);
    /// assert_eq!(tree.to_bytes(), "ab");
    /// ```
    ///
    /// [`byte_len`]: BytesTree::byte_len
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        match &self.repr {
            // Single-fragment trees hand back shared or pre-encoded storage.
            Repr::Empty => Bytes::new(),
            Repr::Bytes(bytes) => bytes.clone(),
            Repr::Text(text) => text.to_bytes(),
            Repr::Many(_) => {
                let mut buf = BytesMut::with_capacity(self.byte_len());
                let _ = self.for_each_leaf(|leaf| {
                    match leaf {
                        Leaf::Bytes(bytes) => buf.extend_from_slice(bytes),
                        Leaf::Text(text) => text.write_bytes_into(&mut buf),
                    }
                    ControlFlow::Continue(())
                });
                buf.freeze()
            }
        }
    }

    /// Returns the total size in bytes of the logical sequence, without
    /// materializing it.
    ///
    /// Linear in the number of fragments, not in the number of bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::BytesTree;
    ///
    /// let tree = BytesTree::from_bytes(vec![1_u8, 2]).append_text("abc");
    /// assert_eq!(tree.byte_len(), 5);
    /// assert_eq!(tree.byte_len(), tree.to_bytes().len());
    /// ```
    #[must_use]
    pub fn byte_len(&self) -> usize {
        let mut total = 0usize;
        let _ = self.for_each_leaf(|leaf| {
            total += match leaf {
                Leaf::Bytes(bytes) => bytes.len(),
                Leaf::Text(text) => text.byte_len(),
            };
            ControlFlow::Continue(())
        });
        total
    }

    /// Returns `true` if the logical sequence has no bytes.
    ///
    /// Stops at the first non-empty fragment instead of sizing the whole
    /// tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.for_each_leaf(|leaf| {
            let empty = match leaf {
                Leaf::Bytes(bytes) => bytes.is_empty(),
                Leaf::Text(text) => text.is_empty(),
            };
            if empty {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// In-order leaf visitation over an explicit stack of sibling
    /// iterators. Depth translates to heap growth, never call-stack
    /// growth. Popping a `Many` pushes its children ahead of the
    /// remainder of the current sibling list, which is exactly
    /// left-to-right depth-first order.
    fn for_each_leaf<'a>(
        &'a self,
        mut visit: impl FnMut(Leaf<'a>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let mut stack: Vec<slice::Iter<'a, BytesTree>> = vec![slice::from_ref(self).iter()];
        while let Some(siblings) = stack.last_mut() {
            let Some(tree) = siblings.next() else {
                stack.pop();
                continue;
            };
            match &tree.repr {
                Repr::Empty => {}
                Repr::Bytes(bytes) => visit(Leaf::Bytes(bytes))?,
                Repr::Text(text) => visit(Leaf::Text(text))?,
                Repr::Many(children) => stack.push(children.iter()),
            }
        }
        ControlFlow::Continue(())
    }
}

impl Drop for BytesTree {
    // Teardown must not recurse: append chains nest `Many` nodes as deep
    // as the chain is long, and the derived drop would walk that depth on
    // the call stack.
    fn drop(&mut self) {
        let Repr::Many(root) = mem::replace(&mut self.repr, Repr::Empty) else {
            return;
        };
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            // Shared nodes stay alive; whoever drops the last reference
            // continues the teardown from there.
            let Some(mut children) = Arc::into_inner(node) else {
                continue;
            };
            for child in &mut children {
                if let Repr::Many(grandchildren) = mem::replace(&mut child.repr, Repr::Empty) {
                    stack.push(grandchildren);
                }
            }
        }
    }
}

impl fmt::Debug for BytesTree {
    // Shallow on purpose: a derived impl would recurse through arbitrarily
    // deep trees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Empty => f.write_str("BytesTree(<empty>)"),
            Repr::Bytes(bytes) => write!(f, "BytesTree({:?})", BStr::new(bytes)),
            Repr::Text(text) => write!(f, "BytesTree({text:?})"),
            Repr::Many(children) => write!(
                f,
                "BytesTree(<{} fragments, {} bytes>)",
                children.len(),
                self.byte_len()
            ),
        }
    }
}

impl From<Bytes> for BytesTree {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for BytesTree {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<String> for BytesTree {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl From<&str> for BytesTree {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<StringTree> for BytesTree {
    fn from(tree: StringTree) -> Self {
        Self::from_string_tree(tree)
    }
}

impl FromIterator<BytesTree> for BytesTree {
    /// Collects into [`BytesTree::concat`] of the yielded trees.
    fn from_iter<I: IntoIterator<Item = BytesTree>>(iter: I) -> Self {
        Self::concat(iter.into_iter().collect())
    }
}
