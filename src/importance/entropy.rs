//! Information gain over the boolean entropy
//! of the positive label.
use std::collections::BTreeMap;

use crate::sample::{ExampleTable, ExampleSubset};
use super::Importance;


/// Information gain computed from the boolean entropy.
/// The positive label is the largest label of the table;
/// every other label counts as negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InformationGain;


impl Importance for InformationGain {
    fn name(&self) -> &str {
        "Information gain"
    }


    #[inline]
    fn score(
        &self,
        table: &ExampleTable,
        subset: &ExampleSubset,
        attribute: usize,
    ) -> f64
    {
        information_gain(table, subset, attribute)
    }
}


/// Returns the entropy of a Bernoulli variable
/// that is true with probability `q`.
/// `boolean_entropy(0.0) == boolean_entropy(1.0) == 0.0`.
#[inline]
pub fn boolean_entropy(q: f64) -> f64 {
    if q <= 0f64 || q >= 1f64 { return 0f64; }

    let p = 1f64 - q;
    -(q * q.log2() + p * p.log2())
}


/// Returns the number of examples in `subset`
/// labeled with [`ExampleTable::positive_label`].
pub fn true_count(table: &ExampleTable, subset: &ExampleSubset) -> usize {
    let positive = table.positive_label();
    subset.iter()
        .filter(|&i| table.label(i) == positive)
        .count()
}


/// Partitions `subset` by the value of `attribute`.
///
/// The map has an entry for every value that `attribute` takes
/// anywhere in `table`, so some groups may be empty.
/// Keys are sorted and each group is sorted in ascending order.
pub fn values_and_examples<'a>(
    table: &'a ExampleTable,
    subset: &ExampleSubset,
    attribute: usize,
) -> BTreeMap<&'a str, ExampleSubset>
{
    let mut groups = (0..table.len())
        .map(|i| (table.value(i, attribute), ExampleSubset::new()))
        .collect::<BTreeMap<_, _>>();

    for i in subset.iter() {
        let value = table.value(i, attribute);
        groups.entry(value)
            .or_default()
            .push_ascending(i);
    }

    groups
}


/// Expected boolean entropy after splitting `subset` by `attribute`.
/// Returns `0.0` for an empty subset.
pub fn remainder(
    table: &ExampleTable,
    subset: &ExampleSubset,
    attribute: usize,
) -> f64
{
    let n_sample = subset.len();
    if n_sample == 0 { return 0f64; }
    let n_sample = n_sample as f64;

    values_and_examples(table, subset, attribute)
        .values()
        .filter(|group| !group.is_empty())
        .map(|group| {
            let size = group.len() as f64;
            let q = true_count(table, group) as f64 / size;
            (size / n_sample) * boolean_entropy(q)
        })
        .sum::<f64>()
}


/// Information gain of splitting `subset` by `attribute`.
/// Returns `0.0` for an empty subset.
pub fn information_gain(
    table: &ExampleTable,
    subset: &ExampleSubset,
    attribute: usize,
) -> f64
{
    let n_sample = subset.len();
    if n_sample == 0 { return 0f64; }

    let q = true_count(table, subset) as f64 / n_sample as f64;
    boolean_entropy(q) - remainder(table, subset, attribute)
}
