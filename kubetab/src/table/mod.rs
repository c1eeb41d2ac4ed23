//! In-memory table model and the printer that renders it.
//!
//! A [`Table`] is built fresh from a record sequence by a
//! [`RecordFormatter`], rendered once by a [`TablePrinter`], and discarded.
//! Row order always equals input record order; nothing here sorts, filters,
//! or deduplicates.

pub mod error;
mod formatter;
mod printer;

use std::fmt;

pub use self::{
    error::Error,
    formatter::{PodFormatter, RecordFormatter, ServiceFormatter},
    printer::{PrintOptions, TablePrinter},
};

/// One column of a table schema.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnDefinition {
    /// Header text, stored in mixed case and uppercased at print time.
    pub name: &'static str,

    pub column_type: ColumnType,

    /// Visibility tier: `0` is always shown, anything greater only in wide
    /// mode.
    pub priority: u8,
}

impl ColumnDefinition {
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type, priority: 0 }
    }

    pub const fn wide_only(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type, priority: 1 }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnType {
    String,
    Integer,
}

/// A single cell value, rendered as text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Cell {
    Str(String),
    Int(i64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(val) => f.write_str(val),
            Self::Int(val) => write!(f, "{val}"),
        }
    }
}

impl From<String> for Cell {
    fn from(val: String) -> Self { Self::Str(val) }
}

impl From<&str> for Cell {
    fn from(val: &str) -> Self { Self::Str(val.to_string()) }
}

impl From<i64> for Cell {
    fn from(val: i64) -> Self { Self::Int(val) }
}

impl From<u32> for Cell {
    fn from(val: u32) -> Self { Self::Int(i64::from(val)) }
}

/// An ordered sequence of cells, one per column.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self { Self { cells } }
}

impl<const N: usize> From<[Cell; N]> for Row {
    fn from(cells: [Cell; N]) -> Self { Self { cells: cells.into() } }
}

/// Column schema plus rows, in rendering order.
///
/// The row-arity invariant (every row has exactly one cell per column) is
/// checked by the printer, so a malformed table is reported as a typed error
/// instead of being truncated or padded.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub column_definitions: Vec<ColumnDefinition>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(column_definitions: Vec<ColumnDefinition>) -> Self {
        Self { column_definitions, rows: Vec::new() }
    }
}
