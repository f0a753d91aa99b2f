//! The files in `tree/` directory define
//! the decision tree learner and the tree it produces.

/// Defines the decision tree learner.
pub mod decision_tree_algorithm;
/// Defines the classifier produced by `DecisionTree`.
pub mod decision_tree_classifier;
/// Defines `DecisionTreeBuilder`.
pub mod builder;

/// Defines the recursive learning algorithm.
pub mod learning;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;


pub use builder::DecisionTreeBuilder;
pub use decision_tree_algorithm::DecisionTree;
pub use decision_tree_classifier::DecisionTreeClassifier;
pub use learning::{
    decision_tree_learning,
    have_same_classification,
    plurality_value,
};
pub use node::{
    Node,
    InternalNode,
    LeafNode,
    UnseenValuePolicy,
};
