//! # Error Trees — Path-Addressed Failures
//!
//! An [`ErrorTree`] mirrors the shape of the input that failed. Each leaf
//! is one [`ErrorMessage`]; each branch maps a property name to the errors
//! found beneath it. A validator that fails at its own level returns a
//! single leaf; an object validator whose children fail returns a branch.
//!
//! ## Invariants
//!
//! - A node is either a leaf or a branch, never both.
//! - An empty branch is the same as "no error". Empty subtrees are never
//!   stored inside a branch.
//!
//! ## Rendering
//!
//! The tree is stored once and read two ways, each an independent
//! traversal:
//!
//! - [`ErrorTree::iter`] — a flat, ordered `(Path, &ErrorMessage)` sequence.
//! - [`ErrorTree::to_mapping`] — a nested `serde_json::Value` of codes or
//!   texts. A leaf at the root renders under the key `""`.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value as Json;

use crate::message::{ErrorMessage, MessageStyle};

/// Location of a message within the input, as a sequence of property names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Path(Vec<String>);

impl Path {
    /// The empty path, addressing the validated value itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// This path extended by one key.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.into());
        Self(segments)
    }

    /// The keys, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys in the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no keys. Same as [`Path::is_root`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Recursive container of validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTree {
    /// A failure of the value at this position.
    Leaf(ErrorMessage),
    /// Failures of named children, in insertion order.
    Branch(IndexMap<String, ErrorTree>),
}

impl Default for ErrorTree {
    fn default() -> Self {
        Self::Branch(IndexMap::new())
    }
}

impl ErrorTree {
    /// A tree holding no errors.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A tree holding one message at the root.
    pub fn leaf(message: ErrorMessage) -> Self {
        Self::Leaf(message)
    }

    /// Build a branch from `(key, subtree)` pairs, discarding empty subtrees.
    pub fn branch<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ErrorTree)>,
    {
        Self::Branch(
            children
                .into_iter()
                .filter(|(_, child)| !child.is_empty())
                .map(|(key, child)| (key.into(), child))
                .collect(),
        )
    }

    /// Whether the tree holds no errors at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ErrorTree::Leaf(_) => false,
            ErrorTree::Branch(children) => children.values().all(ErrorTree::is_empty),
        }
    }

    /// Number of leaf messages in the tree.
    pub fn len(&self) -> usize {
        match self {
            ErrorTree::Leaf(_) => 1,
            ErrorTree::Branch(children) => children.values().map(ErrorTree::len).sum(),
        }
    }

    /// The message if this node is a leaf.
    pub fn message(&self) -> Option<&ErrorMessage> {
        match self {
            ErrorTree::Leaf(message) => Some(message),
            ErrorTree::Branch(_) => None,
        }
    }

    /// The children if this node is a branch.
    pub fn children(&self) -> Option<&IndexMap<String, ErrorTree>> {
        match self {
            ErrorTree::Leaf(_) => None,
            ErrorTree::Branch(children) => Some(children),
        }
    }

    /// The subtree at `path`, if any. An empty path returns `self`.
    pub fn subtree<S: AsRef<str>>(&self, path: &[S]) -> Option<&ErrorTree> {
        let mut node = self;
        for key in path {
            node = node.children()?.get(key.as_ref())?;
        }
        Some(node)
    }

    /// The leaf message at `path`, if any.
    ///
    /// ```
    /// use tsys_core::{ErrorCode, ErrorMessage, ErrorTree};
    ///
    /// let inner = ErrorTree::branch([("nested", ErrorTree::leaf(
    ///     ErrorMessage::new(ErrorCode::Type, "Must be a number."),
    /// ))]);
    /// let tree = ErrorTree::branch([("example", inner)]);
    ///
    /// let message = tree.get(&["example", "nested"]).unwrap();
    /// assert_eq!(message.code, ErrorCode::Type);
    /// ```
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&ErrorMessage> {
        self.subtree(path)?.message()
    }

    /// Iterate every message with its full path, depth-first, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        match self {
            ErrorTree::Leaf(message) => Iter {
                root: Some(message),
                stack: Vec::new(),
            },
            ErrorTree::Branch(children) => Iter {
                root: None,
                stack: vec![(Path::root(), children.iter())],
            },
        }
    }

    /// Codes of every message, in iteration order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.iter().map(|(_, message)| message.code.as_str()).collect()
    }

    /// Render as a nested mapping keyed by property name.
    ///
    /// Leaves become strings (code or text per `style`), branches become
    /// objects. A leaf at the root is keyed by the empty string.
    pub fn to_mapping(&self, style: MessageStyle) -> Json {
        match self {
            ErrorTree::Leaf(message) => {
                let mut root = serde_json::Map::new();
                root.insert(String::new(), Json::String(message.render(style).to_string()));
                Json::Object(root)
            }
            ErrorTree::Branch(_) => render_node(self, style),
        }
    }
}

fn render_node(node: &ErrorTree, style: MessageStyle) -> Json {
    match node {
        ErrorTree::Leaf(message) => Json::String(message.render(style).to_string()),
        ErrorTree::Branch(children) => Json::Object(
            children
                .iter()
                .map(|(key, child)| (key.clone(), render_node(child, style)))
                .collect(),
        ),
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if path.is_root() {
                write!(f, "(root): {message}")?;
            } else {
                write!(f, "{path}: {message}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

impl<'a> IntoIterator for &'a ErrorTree {
    type Item = (Path, &'a ErrorMessage);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over `(Path, &ErrorMessage)` pairs.
///
/// Created by [`ErrorTree::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    root: Option<&'a ErrorMessage>,
    stack: Vec<(Path, indexmap::map::Iter<'a, String, ErrorTree>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Path, &'a ErrorMessage);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(message) = self.root.take() {
            return Some((Path::root(), message));
        }
        loop {
            let (prefix, children) = self.stack.last_mut()?;
            let Some((key, child)) = children.next() else {
                self.stack.pop();
                continue;
            };
            let path = prefix.child(key.as_str());
            match child {
                ErrorTree::Leaf(message) => return Some((path, message)),
                ErrorTree::Branch(grandchildren) => {
                    self.stack.push((path, grandchildren.iter()));
                }
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::message::ErrorCode;
    use proptest::prelude::*;

    fn tree_strategy() -> impl Strategy<Value = ErrorTree> {
        let leaf = (0..ErrorCode::ALL.len()).prop_map(|i| {
            let code = ErrorCode::ALL[i];
            ErrorTree::leaf(ErrorMessage::new(code, code.as_str()))
        });
        leaf.prop_recursive(4, 64, 6, |inner| {
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(ErrorTree::branch)
        })
    }

    proptest! {
        /// Flattening visits exactly the leaves, and every yielded path resolves back.
        #[test]
        fn iter_visits_every_leaf(tree in tree_strategy()) {
            let items: Vec<_> = tree.iter().collect();
            prop_assert_eq!(items.len(), tree.len());
            for (path, message) in items {
                let resolved = tree.get(path.segments());
                prop_assert_eq!(resolved, Some(message));
            }
        }

        /// Empty trees render to an empty mapping; non-empty ones never do.
        #[test]
        fn mapping_empty_iff_tree_empty(tree in tree_strategy()) {
            let rendered = tree.to_mapping(MessageStyle::Code);
            let is_empty_object = rendered.as_object().is_some_and(|m| m.is_empty());
            prop_assert_eq!(is_empty_object, tree.is_empty());
        }
    }
}
