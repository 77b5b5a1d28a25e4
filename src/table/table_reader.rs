use std::path::Path;
use std::io::Cursor;

use polars::prelude::*;

use crate::error::{InputError, Result};
use super::table_struct::Table;


const DEFAULT_DELIMITER: u8 = b',';


/// A struct that returns [`Table`].
/// Using this struct, one can read a delimited text file to [`Table`].
/// The first line is the header, and the last column is the label.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use id3tree::prelude::*;
///
/// let table = TableReader::new()
///     .file("/path/to/csv/file.csv")
///     .read()
///     .unwrap();
/// ```
pub struct TableReader<P> {
    file: Option<P>,
    delimiter: u8,
}


impl<P> TableReader<P> {
    /// Construct a new instance of [`TableReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }


    /// Set the cell delimiter.
    /// Default is `b','`.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}


impl<P> Default for TableReader<P> {
    fn default() -> Self {
        Self::new()
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
    /// and returns `id3tree::Result<Table>`.
    /// This method consumes `self.`
    ///
    /// The file is parsed as CSV with [`CsvReader`],
    /// so quoted cells are unquoted and may contain the delimiter.
    /// Every column is kept as a string.
    /// Cells are not trimmed.
    ///
    /// Returns [`InputError::MissingPath`] if the file name is not set.
    pub fn read(self) -> Result<Table> {
        let file = self.file.ok_or(InputError::MissingPath)?;
        let path = file.as_ref();
        tracing::info!("reading table from {}", path.display());

        let bytes = std::fs::read(path)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(InputError::MissingHeader.into());
        }

        // `infer_schema(Some(0))` reads every column as `Utf8`.
        let data = CsvReader::new(Cursor::new(bytes))
            .has_header(true)
            .with_separator(self.delimiter)
            .infer_schema(Some(0))
            .finish()?;

        let table = Table::from_dataframe(&data)?;

        let (n_rows, n_cols) = table.shape();
        tracing::debug!("read {n_rows} observation(s) with {n_cols} column(s)");
        Ok(table)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_header_and_rows() {
        let file = csv("Weather,Play\nSunny,No\nRainy,Yes\n\n");
        let table = TableReader::new()
            .file(file.path())
            .read()
            .unwrap();

        assert_eq!(table.header(), &["Weather", "Play"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1], vec!["Rainy", "Yes"]);
    }

    #[test]
    fn cells_are_not_trimmed() {
        let file = csv("Weather,Play\nSunny, No\n");
        let table = TableReader::new()
            .file(file.path())
            .read()
            .unwrap();

        assert_eq!(table.rows()[0][1], " No");
    }

    #[test]
    fn quoted_cells_are_unquoted() {
        let file = csv("Weather,Play\n\"Sunny\",No\nSunny,No\nRainy,Yes\n");
        let table = TableReader::new()
            .file(file.path())
            .read()
            .unwrap();

        assert_eq!(table.rows()[0], vec!["Sunny", "No"]);
        let categories = table.categories(0)
            .into_iter()
            .collect::<Vec<_>>();
        assert_eq!(categories, vec!["Rainy", "Sunny"]);
    }

    #[test]
    fn quoted_delimiter_stays_in_the_cell() {
        let file = csv("Weather,Play\n\"Rainy, cold\",Yes\n");
        let table = TableReader::new()
            .file(file.path())
            .read()
            .unwrap();

        assert_eq!(table.shape(), (1, 2));
        assert_eq!(table.rows()[0], vec!["Rainy, cold", "Yes"]);
    }

    #[test]
    fn numbers_are_read_as_strings() {
        let file = csv("Doors,Sporty\n2,Yes\n04,No\n");
        let table = TableReader::new()
            .file(file.path())
            .read()
            .unwrap();

        assert_eq!(table.rows()[1], vec!["04", "No"]);
    }

    #[test]
    fn custom_delimiter() {
        let file = csv("Weather;Play\nSunny;No\n");
        let table = TableReader::new()
            .file(file.path())
            .delimiter(b';')
            .read()
            .unwrap();

        assert_eq!(table.shape(), (1, 2));
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = TableReader::new()
            .file("this/file/does/not/exist.csv")
            .read()
            .unwrap_err();

        assert!(err.is_input_error());
        assert!(matches!(err, Error::Input(InputError::Io { .. })));
    }

    #[test]
    fn unset_file_is_an_input_error() {
        let err = TableReader::<&str>::new()
            .read()
            .unwrap_err();

        assert!(err.is_input_error());
        assert!(matches!(err, Error::Input(InputError::MissingPath)));
    }

    #[test]
    fn empty_file_has_no_header() {
        let file = csv("");
        let err = TableReader::new()
            .file(file.path())
            .read()
            .unwrap_err();

        assert!(matches!(err, Error::Input(InputError::MissingHeader)));
    }

    #[test]
    fn short_row_is_rejected() {
        let file = csv("A,B,Label\nx,y,Yes\nx,No\n");
        let err = TableReader::new()
            .file(file.path())
            .read()
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Input(InputError::MissingValue { row: 2, .. })
        ));
    }

    #[test]
    fn long_row_is_rejected() {
        let file = csv("A,Label\nx,Yes\nx,y,No\n");
        let err = TableReader::new()
            .file(file.path())
            .read()
            .unwrap_err();

        assert!(err.is_input_error());
    }
}
