//! Error types in MiniTrees.
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors raised while reading examples, growing a tree,
/// or classifying with it.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The example table has no rows.
    #[error("the example table has no rows")]
    EmptyTable,

    /// A row whose width differs from the first row.
    #[error("row {row} has {found} fields, but {expected} fields are expected")]
    MalformedRow {
        /// 0-indexed row number (header excluded).
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// Both the example subset and its parent subset are empty,
    /// so no plurality label exists.
    #[error("cannot take the plurality value of an empty example subset")]
    EmptySubset,

    /// An attribute index past the last attribute column.
    #[error("attribute {attribute} is out of range ({n_attributes} attributes)")]
    AttributeOutOfRange {
        /// Offending attribute index.
        attribute: usize,
        /// Number of attribute columns of the table.
        n_attributes: usize,
    },

    /// The example takes a value for the tested attribute
    /// that no branch of the node accepts.
    #[error(
        "classification undefined for unseen value `{value}` \
        of attribute {attribute}"
    )]
    UnseenValue {
        /// Attribute tested at the node.
        attribute: usize,
        /// Value of the example.
        value: String,
    },

    /// The example is too short to hold the tested attribute.
    #[error("example has {found} fields, so attribute {attribute} is missing")]
    MissingField {
        /// Attribute tested at the node.
        attribute: usize,
        /// Number of fields of the example.
        found: usize,
    },

    /// Failed to render a report as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to draw a plot.
    #[error("plotting error: {0}")]
    Plot(String),

    /// Invalid parameter given to a builder.
    #[error("invalid parameter {0}")]
    Parameters(String),
}
