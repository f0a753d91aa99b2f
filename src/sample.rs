//! Struct `ExampleTable` represents the full set of examples.
//! Algorithms refer to its rows by index
//! through `ExampleSubset` and to its columns through `AttributeSet`.

// Provides the example table.
pub(crate) mod table;
// Provides index sets over rows and columns.
pub(crate) mod subset;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use reader::TableReader;
pub use table::ExampleTable;
pub use subset::{ExampleSubset, AttributeSet};
