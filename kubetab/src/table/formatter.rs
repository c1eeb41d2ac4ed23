//! Record-to-table formatters.
//!
//! Each record kind pairs a fixed column schema with a cell-extraction rule;
//! the shared `table` path assembles rows in input order so table assembly is
//! never duplicated per record kind.

use super::{Cell, ColumnDefinition, ColumnType, Row, Table};
use crate::record::{PodRecord, ServicePort, ServiceRecord};

/// Capability of turning one record kind into table rows.
pub trait RecordFormatter {
    type Record;

    /// The fixed column schema for this record kind.
    fn columns(&self) -> Vec<ColumnDefinition>;

    /// Extracts one row from a record; cell order matches [`columns`].
    ///
    /// [`columns`]: RecordFormatter::columns
    fn to_row(&self, record: &Self::Record) -> Row;

    /// Assembles a table from a record sequence, preserving input order.
    fn table(&self, records: &[Self::Record]) -> Table {
        let mut table = Table::new(self.columns());
        table.rows = records.iter().map(|record| self.to_row(record)).collect();
        table
    }
}

/// Formats [`ServiceRecord`]s: Name, Namespace, Type, Cluster-IP, Ports.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServiceFormatter;

impl RecordFormatter for ServiceFormatter {
    type Record = ServiceRecord;

    fn columns(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("Name", ColumnType::String),
            ColumnDefinition::new("Namespace", ColumnType::String),
            ColumnDefinition::new("Type", ColumnType::String),
            ColumnDefinition::new("Cluster-IP", ColumnType::String),
            ColumnDefinition::new("Ports", ColumnType::String),
        ]
    }

    fn to_row(&self, record: &ServiceRecord) -> Row {
        Row::from([
            Cell::from(record.name.as_str()),
            Cell::from(record.namespace.as_str()),
            Cell::from(record.service_type.to_string()),
            Cell::from(record.cluster_ip.as_str()),
            Cell::from(ports_summary(&record.ports)),
        ])
    }
}

/// Formats [`PodRecord`]s: Name, Ready, Status, plus wide-only Retries and
/// Age.
#[derive(Clone, Copy, Debug, Default)]
pub struct PodFormatter;

impl RecordFormatter for PodFormatter {
    type Record = PodRecord;

    fn columns(&self) -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("Name", ColumnType::String),
            ColumnDefinition::new("Ready", ColumnType::String),
            ColumnDefinition::new("Status", ColumnType::String),
            ColumnDefinition::wide_only("Retries", ColumnType::Integer),
            ColumnDefinition::wide_only("Age", ColumnType::String),
        ]
    }

    fn to_row(&self, record: &PodRecord) -> Row {
        Row::from([
            Cell::from(record.name.as_str()),
            Cell::from(record.ready.as_str()),
            Cell::from(record.status.as_str()),
            Cell::from(record.retries),
            Cell::from(record.age.as_str()),
        ])
    }
}

/// Joins ports as `"<port>/<PROTOCOL>"` entries separated by commas,
/// preserving record order. An empty port list yields the empty string.
fn ports_summary(ports: &[ServicePort]) -> String {
    ports.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}
