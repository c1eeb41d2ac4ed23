use snafu::Snafu;

/// Errors produced while rendering a [`Table`](super::Table).
///
/// Rendering is deterministic, so none of these are retried; they surface to
/// the caller immediately.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A row's cell count does not match the column count. The table is
    /// rejected instead of being truncated or padded.
    #[snafu(display(
        "Row {row} has {cells} cells but the table defines {columns} columns"
    ))]
    CellCountMismatch { row: usize, cells: usize, columns: usize },

    #[snafu(display("Failed to write table output, error: {source}"))]
    WriteOutput { source: std::io::Error },
}
