//! Defines the decision tree classifier.
use crate::Classifier;
use crate::error::Result;

use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier.
/// This struct is a wrapper of `Node`
/// together with the attribute names used for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTreeClassifier {
    root: Node,
    names: Vec<String>,
    policy: UnseenValuePolicy,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self {
            root,
            names: Vec::new(),
            policy: UnseenValuePolicy::default(),
        }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict<S>(&self, example: &[S]) -> Result<&str>
        where S: AsRef<str>
    {
        self.root.classify(example, self.policy)
    }
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_components(
        root: Node,
        names: Vec<String>,
        policy: UnseenValuePolicy,
    ) -> Self
    {
        Self { root, names, policy }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Change the behavior on attribute values without a branch.
    #[inline]
    pub fn unseen_value_policy(mut self, policy: UnseenValuePolicy) -> Self {
        self.policy = policy;
        self
    }


    /// Returns the tree in Graphviz DOT format.
    /// Internal nodes are labeled by the tested attribute,
    /// edges by the attribute value,
    /// and leaves are boxes labeled by the predicted label.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph DecisionTree {\n");
        self.root.to_dot_info(0, &self.names[..])
            .0
            .into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push('}');
        dot
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;

        Ok(())
    }
}
