//! Importance metrics used to pick the attribute to split on.
//! The tree learner calls [`Importance::score`] for each candidate
//! attribute and splits on the one with the highest score.

/// Boolean entropy and information gain.
pub mod entropy;
/// Random baseline.
pub mod random;


pub use entropy::{
    InformationGain,
    boolean_entropy,
    true_count,
    values_and_examples,
    remainder,
    information_gain,
};
pub use random::RandomImportance;


use crate::sample::{ExampleTable, ExampleSubset};


/// A strategy that scores an attribute
/// on a subset of examples.
/// Higher scores are better.
///
/// Any closure `Fn(&ExampleTable, &ExampleSubset, usize) -> f64`
/// is an `Importance` as well.
pub trait Importance {
    /// Returns the name of this metric.
    fn name(&self) -> &str {
        "Custom"
    }


    /// Scores `attribute` on the examples `subset` of `table`.
    fn score(
        &self,
        table: &ExampleTable,
        subset: &ExampleSubset,
        attribute: usize,
    ) -> f64;
}


impl<F> Importance for F
    where F: Fn(&ExampleTable, &ExampleSubset, usize) -> f64
{
    #[inline]
    fn score(
        &self,
        table: &ExampleTable,
        subset: &ExampleSubset,
        attribute: usize,
    ) -> f64
    {
        self(table, subset, attribute)
    }
}
