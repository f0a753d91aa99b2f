//! Defines the inner representation
//! of the decision tree.
use crate::error::{Error, Result};

use std::fmt;
use std::collections::BTreeMap;


/// What to do when an example takes a value
/// for which the tested node has no branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnseenValuePolicy {
    /// Return [`Error::UnseenValue`].
    #[default]
    Fail,
    /// Predict the plurality label of the training examples
    /// that reached the node.
    Plurality,
}


impl fmt::Display for UnseenValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fail => "Fail",
            Self::Plurality => "Plurality fallback",
        };
        write!(f, "{name}")
    }
}


/// Enumeration of `InternalNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A node that tests an attribute.
    Internal(InternalNode),


    /// A node that predicts a label.
    Leaf(LeafNode),
}


/// Represents the internal nodes of decision tree.
/// Each `InternalNode` has one child
/// per value of the tested attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode {
    pub(super) attribute: usize,
    pub(super) plurality: String,
    pub(super) children: BTreeMap<String, Node>,
}


impl InternalNode {
    /// Index of the tested attribute.
    #[inline]
    pub fn attribute(&self) -> usize {
        self.attribute
    }


    /// Plurality label of the training examples reaching this node.
    #[inline]
    pub fn plurality(&self) -> &str {
        &self.plurality
    }


    /// Map from the attribute value to the child node.
    #[inline]
    pub fn children(&self) -> &BTreeMap<String, Node> {
        &self.children
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub(super) label: String,
}


impl LeafNode {
    /// The predicted label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}


impl Node {
    /// Returns a leaf that predicts `label`.
    #[inline]
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf(LeafNode { label: label.into() })
    }


    /// Returns an internal node testing `attribute`.
    ///
    /// # Panics
    /// Panics if `children` is empty.
    pub fn internal<S: Into<String>>(
        attribute: usize,
        plurality: S,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        assert!(
            !children.is_empty(),
            "An internal node must have at least one child"
        );
        Self::Internal(InternalNode {
            attribute,
            plurality: plurality.into(),
            children,
        })
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Internal(node) => {
                node.children.values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
                    + 1
            },
        }
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal(node) => {
                node.children.values().map(Node::n_leaves).sum()
            },
        }
    }


    /// Number of nodes, leaves included.
    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal(node) => {
                node.children.values().map(Node::n_nodes).sum::<usize>() + 1
            },
        }
    }


    /// Walks down from this node and returns the predicted label.
    pub(crate) fn classify<'t, S>(
        &'t self,
        example: &[S],
        policy: UnseenValuePolicy,
    ) -> Result<&'t str>
        where S: AsRef<str>
    {
        let mut node = self;
        loop {
            let internal = match node {
                Self::Leaf(leaf) => return Ok(&leaf.label),
                Self::Internal(internal) => internal,
            };

            let attribute = internal.attribute;
            let value: &str = example.get(attribute)
                .ok_or(Error::MissingField {
                    attribute,
                    found: example.len(),
                })?
                .as_ref();

            node = match internal.children.get(value) {
                Some(child) => child,
                None => match policy {
                    UnseenValuePolicy::Fail => {
                        return Err(Error::UnseenValue {
                            attribute,
                            value: value.to_string(),
                        });
                    },
                    UnseenValuePolicy::Plurality => {
                        return Ok(&internal.plurality);
                    },
                },
            };
        }
    }


    /// Returns the DOT statements of the subtree rooted at this node.
    /// `id` is the identifier of this node and the second item of the
    /// returned pair is the next unused identifier.
    pub(super) fn to_dot_info(&self, id: usize, names: &[String])
        -> (Vec<String>, usize)
    {
        match self {
            Node::Internal(node) => {
                let name = names.get(node.attribute)
                    .cloned()
                    .unwrap_or_else(|| format!("A{}", node.attribute));
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{}\" ];\n",
                    escape(&name)
                )];

                let mut next_id = id + 1;
                for (value, child) in node.children.iter() {
                    let child_id = next_id;
                    let (mut c_info, ret_id) = child.to_dot_info(child_id, names);
                    info.append(&mut c_info);
                    info.push(format!(
                        "\tnode_{id} -> node_{child_id} [ label = \"{}\" ];\n",
                        escape(value)
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{}\", \
                     shape = box, \
                     ];\n",
                    escape(&leaf.label)
                );

                (vec![info], id + 1)
            }
        }
    }
}


#[inline]
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
