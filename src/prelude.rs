//! Exports the standard structs and traits.
//!
pub use crate::error::{
    Error,
    Result,
};


pub use crate::sample::{
    // Examples ---------------------------------
    ExampleTable,
    TableReader,


    // Index sets -------------------------------
    ExampleSubset,
    AttributeSet,
};


pub use crate::importance::{
    // Importance trait
    Importance,


    // Metrics ----------------------------------
    InformationGain,
    RandomImportance,
};


pub use crate::learner::Learner;


pub use crate::tree::{
    // Learner ----------------------------------
    DecisionTree,
    DecisionTreeBuilder,


    // Tree -------------------------------------
    DecisionTreeClassifier,
    Node,
    InternalNode,
    LeafNode,
    UnseenValuePolicy,
};


pub use crate::classifier::{
    Classifier,
    Accuracy,
    classify,
    test_for_accuracy,
};


pub use crate::research::{
    Experiment,
    Report,
    MetricSummary,
};
