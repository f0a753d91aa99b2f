use std::path::Path;
use std::fs::File;
use std::io::BufReader;

use crate::error::{Error, Result};
use super::table::ExampleTable;


/// A struct that returns [`ExampleTable`].
/// Each line of the file is one example
/// whose tokens are separated by white spaces.
/// The last token of a line is the class label.
/// # Example
/// The following code is a simple example to read a file.
/// ```no_run
/// use minitrees::prelude::*;
///
/// let filename = "/path/to/training.txt";
/// let table = TableReader::default()
///     .file(filename)
///     .has_header(false)
///     .read()
///     .unwrap();
/// ```
pub struct TableReader<P> {
    file: Option<P>,
    has_header: bool,
}


impl<P> Default for TableReader<P> {
    fn default() -> Self {
        Self { file: None, has_header: false }
    }
}


impl<P> TableReader<P> {
    /// Construct a new instance of [`TableReader`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the flag whether the file has the header row or not.
    /// The header row names the attribute columns.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P> TableReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns [`ExampleTable`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<ExampleTable> {
        let file = self.file
            .ok_or_else(|| {
                Error::Parameters("the file name is not set".to_string())
            })?;
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        ExampleTable::from_reader(reader, self.has_header)
    }
}
