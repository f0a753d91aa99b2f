//! Defines the `Classifier` trait and the accuracy evaluation.
use rayon::prelude::*;

use crate::error::Result;
use crate::sample::ExampleTable;
use crate::tree::{Node, UnseenValuePolicy};


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of `example`.
    /// `example` may or may not carry its label as the last field;
    /// only the attribute fields are read.
    fn predict<S>(&self, example: &[S]) -> Result<&str>
        where S: AsRef<str>;


    /// Predicts the labels of every row of `table`.
    fn predict_all(&self, table: &ExampleTable) -> Result<Vec<&str>> {
        table.rows()
            .map(|row| self.predict(row))
            .collect()
    }
}


impl Classifier for Node {
    /// Classifies `example` with [`UnseenValuePolicy::Fail`].
    #[inline]
    fn predict<S>(&self, example: &[S]) -> Result<&str>
        where S: AsRef<str>
    {
        self.classify(example, UnseenValuePolicy::Fail)
    }
}


/// Walks `tree` from the root and returns the predicted label of `example`.
///
/// Returns [`Error::UnseenValue`](crate::Error::UnseenValue)
/// if `example` takes a value for which the tested node has no branch.
#[inline]
pub fn classify<'t, S>(tree: &'t Node, example: &[S]) -> Result<&'t str>
    where S: AsRef<str>
{
    tree.predict(example)
}


/// Result of [`test_for_accuracy`].
#[derive(Debug, Clone, PartialEq)]
pub struct Accuracy {
    error_rate: f64,
    misclassified: Vec<usize>,
}


impl Accuracy {
    /// Fraction of misclassified examples.
    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }


    /// Fraction of correctly classified examples.
    #[inline]
    pub fn accuracy(&self) -> f64 {
        1f64 - self.error_rate
    }


    /// Indices of the misclassified examples in ascending order.
    #[inline]
    pub fn misclassified(&self) -> &[usize] {
        &self.misclassified[..]
    }
}


/// Classifies every row of `test` and compares it to its label.
/// Returns the error rate and the misclassified indices.
pub fn test_for_accuracy<C>(classifier: &C, test: &ExampleTable)
    -> Result<Accuracy>
    where C: Classifier + Sync,
{
    let n_sample = test.len();

    let wrong = (0..n_sample).into_par_iter()
        .map(|i| {
            classifier.predict(test.row(i))
                .map(|label| label != test.label(i))
        })
        .collect::<Result<Vec<bool>>>()?;

    let misclassified = wrong.into_iter()
        .enumerate()
        .filter_map(|(i, w)| if w { Some(i) } else { None })
        .collect::<Vec<_>>();

    let error_rate = misclassified.len() as f64 / n_sample as f64;
    Ok(Accuracy { error_rate, misclassified })
}
