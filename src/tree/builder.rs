use crate::error::{Error, Result};
use crate::importance::{Importance, InformationGain};
use crate::sample::{ExampleTable, AttributeSet};
use super::node::UnseenValuePolicy;
use super::decision_tree_algorithm::DecisionTree;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing [`DecisionTree`].
///
/// # Example
///
/// ```no_run
/// use minitrees::prelude::*;
///
/// let table = TableReader::default()
///     .file("/path/to/training.txt")
///     .read()
///     .unwrap();
/// let learner = DecisionTreeBuilder::new(&table)
///     .importance(RandomImportance::seeded(7))
///     .unseen_value_policy(UnseenValuePolicy::Plurality)
///     .build()
///     .unwrap();
/// ```
pub struct DecisionTreeBuilder<'a, I = InformationGain> {
    table: &'a ExampleTable,
    importance: I,
    attributes: AttributeSet,
    policy: UnseenValuePolicy,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// importance: InformationGain,
    /// attributes: every column but the label,
    /// unseen_value_policy: UnseenValuePolicy::Fail,
    /// ```
    pub fn new(table: &'a ExampleTable) -> Self {
        Self {
            table,
            importance: InformationGain,
            attributes: table.attributes(),
            policy: UnseenValuePolicy::default(),
        }
    }
}


impl<'a, I> DecisionTreeBuilder<'a, I> {
    /// Set the importance metric used to pick the splitting attribute.
    /// Default value is [`InformationGain`].
    pub fn importance<J>(self, importance: J) -> DecisionTreeBuilder<'a, J>
        where J: Importance
    {
        DecisionTreeBuilder {
            table: self.table,
            importance,
            attributes: self.attributes,
            policy: self.policy,
        }
    }


    /// Restrict the candidate attributes.
    /// By default, every attribute column is a candidate.
    pub fn attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }


    /// Set the behavior on attribute values without a branch.
    /// Default value is [`UnseenValuePolicy::Fail`].
    pub fn unseen_value_policy(mut self, policy: UnseenValuePolicy) -> Self {
        self.policy = policy;
        self
    }
}


impl<'a, I> DecisionTreeBuilder<'a, I>
    where I: Importance
{
    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    ///
    /// Returns `Err` if an attribute is not a column of the table.
    pub fn build(self) -> Result<DecisionTree<I>> {
        let n_attributes = self.table.n_attributes();
        if let Some(attribute) = self.attributes.max() {
            if attribute >= n_attributes {
                return Err(Error::AttributeOutOfRange {
                    attribute,
                    n_attributes,
                });
            }
        }

        Ok(DecisionTree::from_components(
            self.importance, self.attributes, self.policy
        ))
    }
}
