//! The recursive decision tree learning algorithm
//! (Russell and Norvig, *Artificial Intelligence: A Modern Approach*,
//! Fig. 18.5).
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::importance::{Importance, values_and_examples};
use crate::sample::{ExampleTable, ExampleSubset, AttributeSet};
use super::node::Node;


/// Returns the most frequent label among `subset`,
/// or `None` if `subset` is empty.
/// Ties are broken by the lexicographically smallest label.
pub fn plurality_value<'a>(table: &'a ExampleTable, subset: &ExampleSubset)
    -> Option<&'a str>
{
    let mut counter: BTreeMap<&str, usize> = BTreeMap::new();
    for i in subset.iter() {
        *counter.entry(table.label(i)).or_insert(0) += 1;
    }

    // `BTreeMap` iterates in ascending order of labels,
    // so keeping the first maximum gives the smallest label.
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counter {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}


/// Returns the common label if every example in `subset`
/// shares one label. Returns `None` otherwise,
/// and also for an empty subset.
pub fn have_same_classification<'a>(
    table: &'a ExampleTable,
    subset: &ExampleSubset,
) -> Option<&'a str>
{
    let mut labels = subset.iter().map(|i| table.label(i));
    let first = labels.next()?;
    labels.all(|label| label == first).then_some(first)
}


/// Returns the attribute in `attributes` that maximizes `importance`.
/// Candidates are scored in ascending order and
/// the first one reaching the maximum wins.
fn argmax_attribute<I>(
    table: &ExampleTable,
    subset: &ExampleSubset,
    attributes: &AttributeSet,
    importance: &I,
) -> Option<usize>
    where I: Importance + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;
    for attribute in attributes.iter() {
        let score = importance.score(table, subset, attribute);
        if score.is_nan() { continue; }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((attribute, score));
        }
    }

    // Every score is NaN; fall back to the smallest attribute.
    best.map(|(attribute, _)| attribute)
        .or_else(|| attributes.iter().next())
}


/// Grows a decision tree over the examples `subset` of `table`.
///
/// 1. An empty `subset` yields a leaf
///    with the plurality label of `parent_subset`.
/// 2. A `subset` with a single label yields a leaf with that label.
/// 3. An empty `attributes` yields a leaf
///    with the plurality label of `subset`.
/// 4. Otherwise the attribute maximizing `importance` is tested and
///    one child is grown per value the attribute takes in `table`.
///
/// Returns `Err` only if both `subset` and `parent_subset` are empty.
pub fn decision_tree_learning<I>(
    table: &ExampleTable,
    subset: &ExampleSubset,
    attributes: &AttributeSet,
    parent_subset: &ExampleSubset,
    importance: &I,
) -> Result<Node>
    where I: Importance + ?Sized,
{
    if subset.is_empty() {
        let label = plurality_value(table, parent_subset)
            .ok_or(Error::EmptySubset)?;
        return Ok(Node::leaf(label));
    }

    if let Some(label) = have_same_classification(table, subset) {
        return Ok(Node::leaf(label));
    }

    // At this point, `subset` is non-empty.
    let plurality = plurality_value(table, subset)
        .ok_or(Error::EmptySubset)?;

    let attribute = match argmax_attribute(table, subset, attributes, importance) {
        Some(attribute) => attribute,
        None => return Ok(Node::leaf(plurality)),
    };

    let rest = attributes.without(attribute);
    let children = values_and_examples(table, subset, attribute)
        .into_iter()
        .map(|(value, group)| {
            let child = decision_tree_learning(
                table, &group, &rest, subset, importance
            )?;
            Ok((value.to_string(), child))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(Node::internal(attribute, plurality, children))
}
