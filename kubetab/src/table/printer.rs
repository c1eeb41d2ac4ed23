use std::io::Write;

use snafu::{ResultExt, ensure};

use super::{Table, error, error::Error};

/// Spaces between a column's widest entry and the next column.
const COLUMN_GAP: usize = 2;

/// Rendering options for a single table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrintOptions {
    /// Include columns with priority greater than zero.
    pub wide: bool,

    /// Suppress the header line.
    pub no_headers: bool,
}

/// Renders a [`Table`] as aligned text into a caller-supplied sink.
///
/// One `print` call processes one table to completion. The printer holds no
/// state across calls, so rendering the same table twice yields byte-identical
/// output.
#[derive(Clone, Copy, Debug, Default)]
pub struct TablePrinter {
    options: PrintOptions,
}

impl TablePrinter {
    #[must_use]
    pub const fn new(options: PrintOptions) -> Self { Self { options } }

    /// Writes the table to `out`, one line per row, columns left-aligned.
    ///
    /// Column width is the maximum of the header width and every cell width
    /// in that column. The header width counts even when headers are
    /// suppressed, so `no_headers` never shifts the row layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellCountMismatch`] if any row's arity differs from
    /// the column count (checked before anything is written), or
    /// [`Error::WriteOutput`] if the sink rejects a write.
    pub fn print<W: Write>(&self, table: &Table, out: &mut W) -> Result<(), Error> {
        let columns = table.column_definitions.len();
        for (row, cells) in table.rows.iter().map(|row| row.cells.len()).enumerate() {
            ensure!(cells == columns, error::CellCountMismatchSnafu { row, cells, columns });
        }

        let visible = table
            .column_definitions
            .iter()
            .enumerate()
            .filter(|(_, column)| self.options.wide || column.priority == 0)
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        if visible.is_empty() {
            return Ok(());
        }

        let headers = visible
            .iter()
            .map(|&index| table.column_definitions[index].name.to_uppercase())
            .collect::<Vec<_>>();
        let rows = table
            .rows
            .iter()
            .map(|row| visible.iter().map(|&index| row.cells[index].to_string()).collect())
            .collect::<Vec<Vec<String>>>();

        let mut widths = headers.iter().map(String::len).collect::<Vec<_>>();
        for row in &rows {
            for (slot, text) in row.iter().enumerate() {
                widths[slot] = widths[slot].max(text.len());
            }
        }

        if !self.options.no_headers {
            Self::write_line(out, &widths, &headers)?;
        }
        for row in &rows {
            Self::write_line(out, &widths, row)?;
        }

        Ok(())
    }

    fn write_line<W: Write>(out: &mut W, widths: &[usize], fields: &[String]) -> Result<(), Error> {
        for (slot, text) in fields.iter().enumerate() {
            if slot + 1 == fields.len() {
                write!(out, "{text}").context(error::WriteOutputSnafu)?;
            } else {
                let width = widths[slot] + COLUMN_GAP;
                write!(out, "{text:<width$}").context(error::WriteOutputSnafu)?;
            }
        }
        writeln!(out).context(error::WriteOutputSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, ColumnDefinition, ColumnType, Row, Table};

    fn service_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("Name", ColumnType::String),
            ColumnDefinition::new("Namespace", ColumnType::String),
            ColumnDefinition::new("Type", ColumnType::String),
            ColumnDefinition::new("Cluster-IP", ColumnType::String),
            ColumnDefinition::new("Ports", ColumnType::String),
        ]
    }

    fn pod_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("Name", ColumnType::String),
            ColumnDefinition::new("Ready", ColumnType::String),
            ColumnDefinition::new("Status", ColumnType::String),
            ColumnDefinition::wide_only("Retries", ColumnType::Integer),
            ColumnDefinition::wide_only("Age", ColumnType::String),
        ]
    }

    fn render(table: &Table, options: PrintOptions) -> String {
        let mut out = Vec::new();
        TablePrinter::new(options).print(table, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_service_row_aligned() {
        let mut table = Table::new(service_columns());
        table.rows.push(Row::from([
            Cell::from("web"),
            Cell::from("default"),
            Cell::from("ClusterIP"),
            Cell::from("10.0.0.5"),
            Cell::from("8080/TCP"),
        ]));

        let output = render(&table, PrintOptions { wide: true, no_headers: false });
        assert_eq!(
            output,
            "NAME  NAMESPACE  TYPE       CLUSTER-IP  PORTS\n\
             web   default    ClusterIP  10.0.0.5    8080/TCP\n"
        );
    }

    #[test]
    fn test_header_suppression_is_additive() {
        let mut table = Table::new(service_columns());
        table.rows.push(Row::from([
            Cell::from("web"),
            Cell::from("default"),
            Cell::from("ClusterIP"),
            Cell::from("10.0.0.5"),
            Cell::from("8080/TCP"),
        ]));
        table.rows.push(Row::from([
            Cell::from("dns"),
            Cell::from("kube-system"),
            Cell::from("ClusterIP"),
            Cell::from("10.0.0.10"),
            Cell::from("53/UDP,53/TCP"),
        ]));

        let with_headers = render(&table, PrintOptions { wide: false, no_headers: false });
        let without_headers = render(&table, PrintOptions { wide: false, no_headers: true });

        let (_, body) = with_headers.split_once('\n').unwrap();
        assert_eq!(body, without_headers);
    }

    #[test]
    fn test_row_count_and_order_preserved() {
        let mut table = Table::new(vec![ColumnDefinition::new("Name", ColumnType::String)]);
        for name in ["charlie", "alpha", "bravo"] {
            table.rows.push(Row::new(vec![Cell::from(name)]));
        }

        let output = render(&table, PrintOptions { wide: false, no_headers: true });
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines, ["charlie", "alpha", "bravo"]);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut table = Table::new(pod_columns());
        table.rows.push(Row::from([
            Cell::from("worker-1"),
            Cell::from("1/1"),
            Cell::from("Running"),
            Cell::from(3_u32),
            Cell::from("5d"),
        ]));

        let options = PrintOptions { wide: true, no_headers: false };
        assert_eq!(render(&table, options), render(&table, options));
    }

    #[test]
    fn test_wide_only_columns_hidden_by_default() {
        let mut table = Table::new(pod_columns());
        table.rows.push(Row::from([
            Cell::from("worker-1"),
            Cell::from("1/1"),
            Cell::from("Running"),
            Cell::from(3_u32),
            Cell::from("5d"),
        ]));

        let narrow = render(&table, PrintOptions { wide: false, no_headers: false });
        assert!(!narrow.contains("RETRIES"));
        assert!(!narrow.contains("AGE"));
        assert!(!narrow.contains('3'));
        assert!(!narrow.contains("5d"));

        let wide = render(&table, PrintOptions { wide: true, no_headers: false });
        assert!(wide.contains("RETRIES"));
        assert!(wide.contains("AGE"));
        assert!(wide.contains('3'));
        assert!(wide.contains("5d"));
    }

    #[test]
    fn test_integer_cells_rendered_as_text() {
        let mut table = Table::new(vec![
            ColumnDefinition::new("Name", ColumnType::String),
            ColumnDefinition::new("Retries", ColumnType::Integer),
        ]);
        table.rows.push(Row::from([Cell::from("worker"), Cell::from(12_u32)]));

        let output = render(&table, PrintOptions { wide: false, no_headers: true });
        assert_eq!(output, "worker  12\n");
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let table = Table::new(service_columns());

        let output = render(&table, PrintOptions { wide: false, no_headers: false });
        assert_eq!(output, "NAME  NAMESPACE  TYPE  CLUSTER-IP  PORTS\n");

        let output = render(&table, PrintOptions { wide: false, no_headers: true });
        assert_eq!(output, "");
    }

    #[test]
    fn test_cell_count_mismatch_is_rejected() {
        let mut table = Table::new(service_columns());
        table.rows.push(Row::from([
            Cell::from("web"),
            Cell::from("default"),
            Cell::from("ClusterIP"),
            Cell::from("10.0.0.5"),
        ]));

        let mut out = Vec::new();
        let result = TablePrinter::default().print(&table, &mut out);
        match result {
            Err(Error::CellCountMismatch { row, cells, columns }) => {
                assert_eq!((row, cells, columns), (0, 4, 5));
            }
            other => panic!("expected CellCountMismatch, got {other:?}"),
        }
        // Nothing was written before the mismatch was detected.
        assert!(out.is_empty());
    }

    #[test]
    fn test_mismatch_detected_before_any_output() {
        let mut table = Table::new(vec![ColumnDefinition::new("Name", ColumnType::String)]);
        table.rows.push(Row::new(vec![Cell::from("ok")]));
        table.rows.push(Row::new(vec![Cell::from("bad"), Cell::from("extra")]));

        let mut out = Vec::new();
        let result = TablePrinter::default().print(&table, &mut out);
        assert!(matches!(result, Err(Error::CellCountMismatch { row: 1, cells: 2, columns: 1 })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let mut table = Table::new(vec![ColumnDefinition::new("Name", ColumnType::String)]);
        table.rows.push(Row::new(vec![Cell::from("web")]));

        let result = TablePrinter::default().print(&table, &mut FailingSink);
        assert!(matches!(result, Err(Error::WriteOutput { .. })));
    }
}
