//! Provides the `Learner` trait.
use crate::error::Result;
use crate::sample::ExampleTable;


/// A trait that defines the behavior of a learning algorithm.
/// A `Learner` reads a table of examples
/// and produces a hypothesis.
pub trait Learner {
    /// The hypothesis produced by this learner.
    type Hypothesis;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the learner as `(name, value)` pairs.
    /// Used for printing.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Produces a hypothesis from every example of `table`.
    fn produce(&self, table: &ExampleTable) -> Result<Self::Hypothesis>;
}
