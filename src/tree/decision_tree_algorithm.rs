use crate::error::{Error, Result};
use crate::importance::Importance;
use crate::learner::Learner;
use crate::sample::{ExampleTable, AttributeSet};
use super::{
    node::UnseenValuePolicy,
    learning::decision_tree_learning,
    decision_tree_classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The Decision Tree algorithm.
/// Given a table of discrete-valued examples,
/// [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`].
/// The splitting attribute of each node is the one
/// maximizing the [`Importance`] metric.
///
/// The code is based on the book:
/// *Artificial Intelligence: A Modern Approach*
/// by Stuart Russell and Peter Norvig, Section 18.3.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::tree::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let train = TableReader::default()
///     .file("/path/to/training.txt")
///     .read()
///     .unwrap();
/// let test = TableReader::default()
///     .file("/path/to/test.txt")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&train)
///     .importance(InformationGain)
///     .build()
///     .unwrap();
/// let f = tree.produce(&train).unwrap();
///
/// let accuracy = test_for_accuracy(&f, &test).unwrap();
/// println!("error rate (test) is: {}", accuracy.error_rate());
/// ```
pub struct DecisionTree<I> {
    importance: I,
    attributes: AttributeSet,
    policy: UnseenValuePolicy,
}


impl<I> DecisionTree<I> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        importance: I,
        attributes: AttributeSet,
        policy: UnseenValuePolicy,
    ) -> Self
    {
        Self { importance, attributes, policy, }
    }


    /// Returns the importance metric.
    #[inline]
    pub fn importance_metric(&self) -> &I {
        &self.importance
    }
}


impl<I> Learner for DecisionTree<I>
    where I: Importance
{
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Importance", self.importance.name().to_string()),
            ("Attributes", format!("{}", self.attributes)),
            ("Unseen values", format!("{}", self.policy)),
        ]);
        Some(info)
    }


    /// Grows a tree over every example of `table`.
    /// The candidate attributes must be columns of `table`.
    fn produce(&self, table: &ExampleTable) -> Result<Self::Hypothesis> {
        let n_attributes = table.n_attributes();
        if let Some(attribute) = self.attributes.max() {
            if attribute >= n_attributes {
                return Err(Error::AttributeOutOfRange {
                    attribute,
                    n_attributes,
                });
            }
        }

        let examples = table.all_examples();
        let root = decision_tree_learning(
            table, &examples, &self.attributes, &examples, &self.importance,
        )?;

        let names = table.attribute_names().to_vec();
        Ok(DecisionTreeClassifier::from_components(root, names, self.policy))
    }
}


impl<I> fmt::Display for DecisionTree<I>
    where I: Importance
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Importance: {}\n\
            - Attributes: {}\n\
            - Unseen values: {}\n\
            ----------\
            ",
            self.importance.name(),
            self.attributes,
            self.policy,
        )
    }
}
