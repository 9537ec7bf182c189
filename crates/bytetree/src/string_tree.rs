//! Persistent rope of text segments: the textual counterpart of
//! [`BytesTree`](crate::BytesTree).
//!
//! Same contract as the byte side — O(1) combinators, one-shot
//! materialization, explicit-work-list traversal and teardown — restricted
//! to UTF-8 text. Content is `str` end to end, so the encoded byte
//! representation is deterministic by construction.

use alloc::{string::String, sync::Arc, vec, vec::Vec};
use core::{fmt, mem, ops::ControlFlow, slice};

use bytes::{Bytes, BytesMut};

/// A rope of text segments with O(1) concatenation.
///
/// The textual sibling of [`BytesTree`](crate::BytesTree): segments are
/// adopted without copying (beyond at most one copy when a `&str`/`String`
/// is first turned into shared storage), and the composed text is produced
/// once, via [`Display`]/`to_string()` or [`to_bytes`].
///
/// # Examples
///
/// ```
/// use bytetree::StringTree;
///
/// let path = StringTree::from_string("usr")
///     .append_str("/local")
///     .append_str("/bin")
///     .prepend_str("/");
/// assert_eq!(path.to_string(), "/usr/local/bin");
/// assert_eq!(path.byte_len(), 14);
/// ```
///
/// [`Display`]: core::fmt::Display
/// [`to_bytes`]: StringTree::to_bytes
#[derive(Clone, Default)]
pub struct StringTree {
    repr: Repr,
}

#[derive(Clone, Default)]
enum Repr {
    #[default]
    Empty,
    Literal(Arc<str>),
    // Same adoption rule as the byte side: `concat` takes the caller's
    // `Vec` as the child list without copying it.
    Many(Arc<Vec<StringTree>>),
}

impl StringTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { repr: Repr::Empty }
    }

    /// Creates a tree holding one literal segment.
    ///
    /// `&str` and `String` inputs are copied once into shared storage; an
    /// existing `Arc<str>` is adopted as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::StringTree;
    ///
    /// assert_eq!(StringTree::from_string("abc").byte_len(), 3);
    /// ```
    pub fn from_string(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::new();
        }
        Self {
            repr: Repr::Literal(text),
        }
    }

    /// Concatenates `strings` in order, adopting each as a literal segment.
    #[must_use]
    pub fn from_strings(strings: Vec<String>) -> Self {
        Self::concat(strings.into_iter().map(Self::from_string).collect())
    }

    /// Returns the tree denoting `self` followed by `suffix`. O(1).
    #[must_use]
    pub fn append(self, suffix: StringTree) -> Self {
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

    /// Returns the tree denoting `prefix` followed by `self`. O(1).
    #[must_use]
    pub fn prepend(self, prefix: StringTree) -> Self {
        prefix.append(self)
    }

    /// Appends one literal segment.
    pub fn append_str(self, text: impl Into<Arc<str>>) -> Self {
        self.append(Self::from_string(text))
    }

    /// Prepends one literal segment.
    pub fn prepend_str(self, text: impl Into<Arc<str>>) -> Self {
        self.prepend(Self::from_string(text))
    }

    /// Concatenates `trees` in order into a single tree.
    ///
    /// O(1): the vector becomes the child list directly.
    #[must_use]
    pub fn concat(trees: Vec<StringTree>) -> Self {
        if trees.is_empty() {
            return Self::new();
        }
        Self {
            repr: Repr::Many(Arc::new(trees)),
        }
    }

    /// Concatenates `trees` with `separator` between adjacent items.
    ///
    /// O(n) in the number of items; item and separator contents are not
    /// copied (every separator shares one allocation).
    ///
    /// # Examples
    ///
    /// ```
    /// use bytetree::StringTree;
    ///
    /// let csv = StringTree::join(
    ///     vec![
    ///         StringTree::from_string("a"),
    ///         StringTree::from_string("b"),
    ///         StringTree::from_string("c"),
    ///     ],
    ///     ", ",
    /// );
    /// assert_eq!(csv.to_string(), "a, b, c");
    /// ```
    #[must_use]
    pub fn join(trees: Vec<StringTree>, separator: &str) -> Self {
        if trees.is_empty() {
            return Self::new();
        }
        let separator: Arc<str> = separator.into();
        let mut children = Vec::with_capacity(trees.len() * 2 - 1);
        for tree in trees {
            if !children.is_empty() && !separator.is_empty() {
                children.push(Self {
                    repr: Repr::Literal(Arc::clone(&separator)),
                });
            }
            children.push(tree);
        }
        Self::concat(children)
    }

    /// Returns the size in bytes of the UTF-8 encoding of the content.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        let mut total = 0usize;
        let _ = self.for_each_chunk(|chunk| {
            total += chunk.len();
            ControlFlow::Continue(())
        });
        total
    }

    /// Returns `true` if the content has no characters. Stops at the first
    /// non-empty segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.for_each_chunk(|chunk| {
            if chunk.is_empty() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// Returns the UTF-8 encoding of the content as one contiguous buffer.
    ///
    /// This is the deterministic byte representation consumed by
    /// [`BytesTree`](crate::BytesTree) when a text fragment is
    /// materialized.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        match &self.repr {
            Repr::Empty => Bytes::new(),
            Repr::Literal(text) => Bytes::copy_from_slice(text.as_bytes()),
            Repr::Many(_) => {
                let mut buf = BytesMut::with_capacity(self.byte_len());
                self.write_bytes_into(&mut buf);
                buf.freeze()
            }
        }
    }

    /// Streams the UTF-8 content into `buf` without intermediate
    /// allocation. Used by `BytesTree` materialization.
    pub(crate) fn write_bytes_into(&self, buf: &mut BytesMut) {
        let _ = self.for_each_chunk(|chunk| {
            buf.extend_from_slice(chunk.as_bytes());
            ControlFlow::Continue(())
        });
    }

    /// In-order segment visitation over an explicit stack of sibling
    /// iterators; the textual twin of the byte-side traversal.
    fn for_each_chunk<'a>(
        &'a self,
        mut visit: impl FnMut(&'a str) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let mut stack: Vec<slice::Iter<'a, StringTree>> = vec![slice::from_ref(self).iter()];
        while let Some(siblings) = stack.last_mut() {
            let Some(tree) = siblings.next() else {
                stack.pop();
                continue;
            };
            match &tree.repr {
                Repr::Empty => {}
                Repr::Literal(text) => visit(text.as_ref())?,
                Repr::Many(children) => stack.push(children.iter()),
            }
        }
        ControlFlow::Continue(())
    }
}

impl Drop for StringTree {
    // Iterative for the same reason as `BytesTree`: chained appends nest
    // nodes as deep as the chain is long.
    fn drop(&mut self) {
        let Repr::Many(root) = mem::replace(&mut self.repr, Repr::Empty) else {
            return;
        };
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
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

impl fmt::Display for StringTree {
    /// Writes the composed content in segment order, iteratively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        let _ = self.for_each_chunk(|chunk| {
            result = f.write_str(chunk);
            if result.is_err() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        result
    }
}

impl fmt::Debug for StringTree {
    // Shallow, like the byte side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Empty => f.write_str("StringTree(<empty>)"),
            Repr::Literal(text) => write!(f, "StringTree({text:?})"),
            Repr::Many(children) => write!(
                f,
                "StringTree(<{} segments, {} bytes>)",
                children.len(),
                self.byte_len()
            ),
        }
    }
}

impl From<String> for StringTree {
    fn from(text: String) -> Self {
        Self::from_string(text)
    }
}

impl From<&str> for StringTree {
    fn from(text: &str) -> Self {
        Self::from_string(text)
    }
}

impl FromIterator<StringTree> for StringTree {
    /// Collects into [`StringTree::concat`] of the yielded trees.
    fn from_iter<I: IntoIterator<Item = StringTree>>(iter: I) -> Self {
        Self::concat(iter.into_iter().collect())
    }
}
