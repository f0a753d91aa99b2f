#![warn(missing_docs)]

//!
//! A crate that provides the decision tree learning algorithm
//! for discrete-valued examples.
//!
//! The learner follows the textbook algorithm of
//! *Artificial Intelligence: A Modern Approach*:
//! the attribute to test at each node is the one
//! maximizing an importance metric,
//! and the tree is grown recursively
//! until the examples share a label or no attribute is left.
//!
//! This crate includes two importance metrics.
//!
//! - `InformationGain`
//!     Reduction of the boolean entropy of the positive label
//!     after splitting on the attribute.
//!
//! - `RandomImportance`
//!     A uniformly random score.
//!     Comparing the two shows the effect of the attribute choice.
//!
//! # Example
//! ```no_run
//! use minitrees::prelude::*;
//!
//! let train = TableReader::default()
//!     .file("/path/to/training.txt")
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new(&train)
//!     .build()
//!     .unwrap();
//! let f = tree.produce(&train).unwrap();
//! f.to_dot_file("tree.dot").unwrap();
//! ```

pub mod error;
pub mod sample;
pub mod importance;
pub mod learner;
pub mod classifier;
pub mod tree;
pub mod research;

/// Exports the standard structs and traits.
pub mod prelude;


pub use error::{Error, Result};

pub use sample::{
    ExampleTable,
    ExampleSubset,
    AttributeSet,
    TableReader,
};

pub use importance::{
    Importance,
    InformationGain,
    RandomImportance,
};

pub use learner::Learner;

pub use classifier::{
    Classifier,
    Accuracy,
    classify,
    test_for_accuracy,
};

pub use tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    UnseenValuePolicy,
};

pub use research::{
    Experiment,
    Report,
};
