//! Shared plumbing for the table commands.

use std::{io::Write, path::Path};

use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::{
    cli::{Error, error},
    record::RecordList,
    table::{PrintOptions, RecordFormatter, TablePrinter},
};

/// Reads a `List`-shaped JSON document and returns its items.
pub fn load_records<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
{
    let data = std::fs::read(path)
        .context(error::ReadRecordsSnafu { filename: path.to_path_buf() })?;
    let list: RecordList<T> = serde_json::from_slice(&data)
        .context(error::ParseRecordsSnafu { filename: path.to_path_buf() })?;
    Ok(list.items)
}

/// Assembles a table from `records` and writes it to stdout.
///
/// The table is rendered into a buffer first, so a render failure produces no
/// partial output; it is logged and the process continues.
pub fn print_records<F>(
    formatter: &F,
    records: &[F::Record],
    options: PrintOptions,
) -> Result<(), Error>
where
    F: RecordFormatter,
{
    let table = formatter.table(records);
    let mut buffer = Vec::new();
    if let Err(err) = TablePrinter::new(options).print(&table, &mut buffer) {
        tracing::error!("Failed to render table: {err}");
        return Ok(());
    }

    std::io::stdout().write_all(&buffer).context(error::WriteStdoutSnafu)
}
