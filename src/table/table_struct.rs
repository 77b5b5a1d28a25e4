use std::collections::{BTreeSet, HashMap};
use std::fmt;

use polars::prelude::*;

use crate::error::{InputError, Result};


/// Struct `Table` holds a categorical sample.
/// The first row is the header, the last column is the label,
/// and every cell is a string.
///
/// A `Table` never changes after construction.
/// Partitioning returns a freshly allocated `Table`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub(super) header: Vec<String>,
    pub(super) rows: Vec<Vec<String>>,
    pub(super) name_to_index: HashMap<String, usize>,
}


impl Table {
    /// Construct a new `Table` from the header and the observation rows.
    ///
    /// The table must have at least one feature column, a label column,
    /// and an observation row.
    /// Each row must be as wide as the header and
    /// the header must not contain the same name twice.
    pub fn new<S, T>(header: Vec<S>, rows: Vec<Vec<T>>) -> Result<Self>
        where S: Into<String>,
              T: Into<String>,
    {
        let header = header.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        if header.is_empty() {
            return Err(InputError::MissingHeader.into());
        }
        if header.len() < 2 {
            return Err(InputError::TooFewColumns(header.len()).into());
        }
        if rows.is_empty() {
            return Err(InputError::NoObservations.into());
        }

        let expected = header.len();
        let rows = rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row.into_iter()
                    .map(Into::into)
                    .collect::<Vec<String>>();
                if row.len() != expected {
                    let found = row.len();
                    return Err(InputError::RaggedRow { row: i + 1, expected, found });
                }
                Ok(row)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let name_to_index = name_to_index(&header)?;

        Ok(Self { header, rows, name_to_index })
    }


    /// Convert `polars::DataFrame` into `Table`.
    /// Every column is cast to a string column,
    /// and the last column is used as the label.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let header = data.get_column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let (n_rows, _) = data.shape();
        let mut rows = vec![Vec::with_capacity(header.len()); n_rows];

        for series in data.get_columns() {
            let series = series.cast(&DataType::Utf8)?;
            let cells = series.utf8()?;

            for (i, cell) in cells.into_iter().enumerate() {
                let cell = cell.ok_or_else(|| InputError::MissingValue {
                    column: series.name().to_string(),
                    row: i + 1,
                })?;
                rows[i].push(cell.to_string());
            }
        }

        Self::new(header, rows)
    }


    /// Build a table without validation.
    /// Used for partitions of an already valid table.
    #[inline]
    pub(crate) fn from_raw(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let name_to_index = header.iter()
            .enumerate()
            .rev()
            .map(|(i, name)| (name.clone(), i))
            .collect::<HashMap<_, _>>();

        Self { header, rows, name_to_index }
    }


    /// Returns the header row.
    pub fn header(&self) -> &[String] {
        &self.header[..]
    }


    /// Returns the observation rows (the header is not included).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows[..]
    }


    /// Returns the pair `(# of observations, # of columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.header.len())
    }


    /// Returns the number of observation rows.
    #[inline]
    pub fn n_observations(&self) -> usize {
        self.rows.len()
    }


    /// Returns the number of feature columns,
    /// i.e., every column but the label.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.header.len().saturating_sub(1)
    }


    /// Returns the names of the feature columns.
    pub fn feature_names(&self) -> &[String] {
        &self.header[..self.n_features()]
    }


    /// Returns the name of the label column.
    pub fn label_name(&self) -> &str {
        &self.header[self.label_index()]
    }


    #[inline]
    pub(crate) fn label_index(&self) -> usize {
        self.header.len() - 1
    }


    /// Returns the index of the column named `name`.
    pub fn column_index<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        self.name_to_index.get(name.as_ref()).copied()
    }


    /// Returns an iterator over the label cells.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        let col = self.label_index();
        self.rows.iter().map(move |row| row[col].as_str())
    }


    /// Returns the distinct values of column `col` in sorted order.
    pub fn categories(&self, col: usize) -> BTreeSet<&str> {
        self.rows.iter()
            .map(|row| row[col].as_str())
            .collect()
    }


    /// Returns the rows whose value at column `col` equals `category`.
    pub(crate) fn matching<'a>(&'a self, col: usize, category: &'a str)
        -> impl Iterator<Item = &'a Vec<String>> + 'a
    {
        self.rows.iter().filter(move |row| row[col] == category)
    }


    /// Returns a new table consisting of the header and
    /// the rows whose value at column `col` equals `category`.
    pub fn partition(&self, col: usize, category: &str) -> Self {
        let rows = self.matching(col, category)
            .cloned()
            .collect::<Vec<_>>();

        Self::from_raw(self.header.clone(), rows)
    }


    /// Returns a new table without column `col`.
    pub fn without_column(&self, col: usize) -> Self {
        let keep = |cells: &[String]| {
            cells.iter()
                .enumerate()
                .filter(|&(i, _)| i != col)
                .map(|(_, cell)| cell.clone())
                .collect::<Vec<_>>()
        };

        let header = keep(&self.header[..]);
        let rows = self.rows.iter()
            .map(|row| keep(&row[..]))
            .collect::<Vec<_>>();

        Self::from_raw(header, rows)
    }
}


fn name_to_index(header: &[String]) -> Result<HashMap<String, usize>> {
    let mut map = HashMap::with_capacity(header.len());
    for (i, name) in header.iter().enumerate() {
        if map.insert(name.clone(), i).is_some() {
            return Err(InputError::DuplicateColumn(name.clone()).into());
        }
    }
    Ok(map)
}


impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = (0..self.header.len())
            .map(|col| {
                self.rows.iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(self.header[col].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();

        let line = |f: &mut fmt::Formatter<'_>, cells: &[String]| {
            let cells = cells.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell: <width$}"))
                .collect::<Vec<_>>();
            writeln!(f, "| {} |", cells.join(" | "))
        };

        line(f, &self.header[..])?;
        let rule = widths.iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>();
        writeln!(f, "|-{}-|", rule.join("-|-"))?;
        for row in self.rows.iter() {
            line(f, &row[..])?;
        }
        Ok(())
    }
}
