use fixedbitset::FixedBitSet;

use std::io::BufRead;

use crate::error::{Error, Result};
use super::subset::{ExampleSubset, AttributeSet};


/// A table of discrete-valued examples.
/// Each row is a sequence of tokens whose last token is the class label.
/// Rows are immutable once the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleTable {
    names: Vec<String>,
    rows: Vec<Vec<String>>,
    width: usize,
    positive: String,
}


impl ExampleTable {
    /// Construct a table from rows of tokens.
    /// The last token of each row is the label.
    ///
    /// Returns `Err` if there is no row or
    /// if the rows do not share the same width.
    pub fn from_rows<R, T>(rows: R) -> Result<Self>
        where R: IntoIterator,
              R::Item: IntoIterator<Item = T>,
              T: Into<String>,
    {
        let rows = rows.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let width = rows.first()
            .map(|row| row.len())
            .ok_or(Error::EmptyTable)?;

        if width == 0 {
            return Err(Error::MalformedRow { row: 0, expected: 1, found: 0 });
        }

        for (row, tokens) in rows.iter().enumerate() {
            if tokens.len() != width {
                return Err(Error::MalformedRow {
                    row,
                    expected: width,
                    found: tokens.len(),
                });
            }
        }

        let names = (0..width - 1).map(|i| format!("A{i}"))
            .collect::<Vec<_>>();

        let positive = rows.iter()
            .map(|row| &row[width - 1])
            .max()
            .cloned()
            .unwrap_or_default();

        Ok(Self { names, rows, width, positive })
    }


    /// Read a table from a buffered reader.
    /// Each non-blank line is split by white spaces.
    /// If `has_header` is `true`,
    /// the first non-blank line names the attribute columns.
    pub fn from_reader<R>(reader: R, has_header: bool) -> Result<Self>
        where R: BufRead,
    {
        let mut header = None;
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let tokens = line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>();
            if tokens.is_empty() { continue; }

            if has_header && header.is_none() {
                header = Some(tokens);
                continue;
            }
            rows.push(tokens);
        }

        let table = Self::from_rows(rows)?;
        match header {
            Some(names) => table.with_attribute_names(names),
            None => Ok(table),
        }
    }


    /// Assign names to the attribute columns.
    /// A header that also names the label column is accepted;
    /// the label name is dropped.
    pub fn with_attribute_names<I, S>(mut self, names: I) -> Result<Self>
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let mut names = names.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        let n_attributes = self.n_attributes();
        if names.len() == self.width {
            names.pop();
        }
        if names.len() != n_attributes {
            return Err(Error::Parameters(format!(
                "expected {n_attributes} attribute names, got {}",
                names.len()
            )));
        }
        self.names = names;
        Ok(self)
    }


    /// Returns the pair of
    /// the number of examples and the number of attributes.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_attributes())
    }


    /// Number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Always `false` since an empty table cannot be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Number of attribute columns, i.e., all columns but the label.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.width - 1
    }


    /// Returns the `i`th example, label included.
    #[inline]
    pub fn row(&self, i: usize) -> &[String] {
        &self.rows[i]
    }


    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }


    /// Returns the label of the `i`th example.
    #[inline]
    pub fn label(&self, i: usize) -> &str {
        &self.rows[i][self.width - 1]
    }


    /// Returns the value of `attribute` for the `i`th example.
    #[inline]
    pub fn value(&self, i: usize, attribute: usize) -> &str {
        &self.rows[i][attribute]
    }


    /// Returns the display name of `attribute`.
    #[inline]
    pub fn attribute_name(&self, attribute: usize) -> &str {
        &self.names[attribute]
    }


    /// Returns the display names of all attributes.
    #[inline]
    pub fn attribute_names(&self) -> &[String] {
        &self.names[..]
    }


    /// The label treated as positive by the boolean entropy,
    /// that is, the largest label in the whole table.
    #[inline]
    pub fn positive_label(&self) -> &str {
        &self.positive
    }


    /// The subset of every example.
    #[inline]
    pub fn all_examples(&self) -> ExampleSubset {
        ExampleSubset::all(self.len())
    }


    /// The set of every attribute, i.e., all columns but the last one.
    #[inline]
    pub fn attributes(&self) -> AttributeSet {
        AttributeSet::all(self.n_attributes())
    }


    /// Split the table into a training/test pair.
    /// The rows `ix[start..end]` go to the test table
    /// and the other rows of `ix` go to the training table.
    ///
    /// Returns `Err` if one of the two parts is empty,
    /// or if `ix` holds an index out of the table or the same index twice.
    pub fn split(&self, ix: &[usize], start: usize, end: usize)
        -> Result<(Self, Self)>
    {
        if start >= end || end > ix.len() {
            return Err(Error::Parameters(format!(
                "invalid test range {start}..{end} of {} rows", ix.len()
            )));
        }

        let mut seen = FixedBitSet::with_capacity(self.len());
        for &i in ix {
            if i >= self.len() {
                return Err(Error::Parameters(format!(
                    "row index {i} is out of a table with {} rows", self.len()
                )));
            }
            if seen.put(i) {
                return Err(Error::Parameters(format!(
                    "row index {i} appears more than once"
                )));
            }
        }
        let pick = |indices: &[usize]| -> Result<Self> {
            let rows = indices.iter()
                .map(|&i| self.rows[i].clone())
                .collect::<Vec<_>>();
            Self::from_rows(rows)?
                .with_attribute_names(self.names.iter().cloned())
        };

        let train = ix[..start].iter()
            .chain(&ix[end..])
            .copied()
            .collect::<Vec<_>>();
        let test = pick(&ix[start..end])?;
        let train = pick(&train)?;

        Ok((train, test))
    }
}
