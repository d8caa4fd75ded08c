//! Event recording for the economics models.
//!
//! Model code emits `tracing` events whose target names a table
//! (`technology`, `resources`, `trade`, `market_shift`). The subscriber here
//! turns each event into a row of that table, creating columns as new field
//! names appear, so the schema follows whatever the models log.
//!
//! # Usage
//!
//! ```ignore
//! // In model code:
//! tracing::info!(target: "technology", product = name, before, after);
//!
//! // In a test:
//! let (_, log) = instrument::capture(|| model.improve_technology_a(1.0));
//! let df = log.table("technology").unwrap().to_dataframe()?;
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;

use polars::prelude::*;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Record};
use tracing::{Event, Id, Metadata, Subscriber};

// === COLUMNS ===

/// Values of one field across all rows of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    U64(Vec<u64>),
    I64(Vec<i64>),
    F64(Vec<f64>),
    Bool(Vec<bool>),
    Str(Vec<String>),
}

/// A single recorded field value.
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    U64(u64),
    I64(i64),
    F64(f64),
    Bool(bool),
    Str(String),
}

impl FieldValue {
    /// Empty column of the matching type, pre-filled for `rows` earlier rows.
    fn new_column(&self, rows: usize) -> ColumnData {
        match self {
            FieldValue::U64(_) => ColumnData::U64(vec![0; rows]),
            FieldValue::I64(_) => ColumnData::I64(vec![0; rows]),
            FieldValue::F64(_) => ColumnData::F64(vec![0.0; rows]),
            FieldValue::Bool(_) => ColumnData::Bool(vec![false; rows]),
            FieldValue::Str(_) => ColumnData::Str(vec![String::new(); rows]),
        }
    }
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::U64(v) => v.len(),
            ColumnData::I64(v) => v.len(),
            ColumnData::F64(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `value`, or the column's default when the value is missing or of
    /// another type.
    fn push(&mut self, value: Option<FieldValue>) {
        match (self, value) {
            (ColumnData::U64(v), Some(FieldValue::U64(x))) => v.push(x),
            (ColumnData::I64(v), Some(FieldValue::I64(x))) => v.push(x),
            (ColumnData::F64(v), Some(FieldValue::F64(x))) => v.push(x),
            (ColumnData::Bool(v), Some(FieldValue::Bool(x))) => v.push(x),
            (ColumnData::Str(v), Some(FieldValue::Str(x))) => v.push(x),
            (ColumnData::U64(v), _) => v.push(0),
            (ColumnData::I64(v), _) => v.push(0),
            (ColumnData::F64(v), _) => v.push(0.0),
            (ColumnData::Bool(v), _) => v.push(false),
            (ColumnData::Str(v), _) => v.push(String::new()),
        }
    }

    fn to_column(&self, name: &str) -> Column {
        match self {
            ColumnData::U64(v) => Column::new(name.into(), v),
            ColumnData::I64(v) => Column::new(name.into(), v),
            ColumnData::F64(v) => Column::new(name.into(), v),
            ColumnData::Bool(v) => Column::new(name.into(), v),
            ColumnData::Str(v) => Column::new(name.into(), v),
        }
    }
}

// === TABLES ===

/// Rows recorded under one tracing target. Every column has `rows` entries.
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    pub columns: BTreeMap<String, ColumnData>,
    pub rows: usize,
}

impl EventTable {
    fn push_row(&mut self, mut fields: BTreeMap<String, FieldValue>) {
        for (name, column) in self.columns.iter_mut() {
            column.push(fields.remove(name));
        }
        // Whatever is left introduces new columns
        for (name, value) in fields {
            let mut column = value.new_column(self.rows);
            column.push(Some(value));
            self.columns.insert(name, column);
        }
        self.rows += 1;
    }

    pub fn f64s(&self, name: &str) -> Option<&[f64]> {
        match self.columns.get(name)? {
            ColumnData::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn strs(&self, name: &str) -> Option<&[String]> {
        match self.columns.get(name)? {
            ColumnData::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns
            .iter()
            .map(|(name, data)| data.to_column(name))
            .collect();
        DataFrame::new(columns)
    }
}

/// All tables recorded so far, keyed by tracing target.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub tables: BTreeMap<String, EventTable>,
}

impl EventLog {
    pub fn table(&self, target: &str) -> Option<&EventTable> {
        self.tables.get(target)
    }

    pub fn rows(&self, target: &str) -> usize {
        self.table(target).map_or(0, |t| t.rows)
    }

    /// Tables that fail to convert are skipped.
    pub fn to_dataframes(&self) -> BTreeMap<String, DataFrame> {
        self.tables
            .iter()
            .filter_map(|(name, table)| table.to_dataframe().ok().map(|df| (name.clone(), df)))
            .collect()
    }
}

thread_local! {
    static LOG: RefCell<EventLog> = RefCell::default();
}

// === SUBSCRIBER ===

#[derive(Default)]
struct RowVisitor {
    fields: BTreeMap<String, FieldValue>,
}

impl RowVisitor {
    fn put(&mut self, field: &Field, value: FieldValue) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for RowVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, FieldValue::U64(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, FieldValue::I64(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, FieldValue::F64(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, FieldValue::Bool(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, FieldValue::Str(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, FieldValue::Str(format!("{value:?}")));
    }
}

/// Subscriber that appends every info-level event to the thread-local log.
/// Spans are ignored.
pub struct ModelEventSubscriber;

impl Subscriber for ModelEventSubscriber {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.is_event() && *metadata.level() <= tracing::Level::INFO
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = RowVisitor::default();
        event.record(&mut visitor);
        let target = event.metadata().target().to_string();

        LOG.with(|log| {
            log.borrow_mut()
                .tables
                .entry(target)
                .or_default()
                .push_row(visitor.fields);
        });
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Install the subscriber as the global default. Later calls are no-ops.
pub fn install_subscriber() {
    let _ = tracing::subscriber::set_global_default(ModelEventSubscriber);
}

/// Take everything recorded on this thread so far.
pub fn drain() -> EventLog {
    LOG.with(|log| std::mem::take(&mut *log.borrow_mut()))
}

pub fn clear() {
    LOG.with(|log| *log.borrow_mut() = EventLog::default());
}

/// Run `f` with the subscriber scoped to this thread and return what it logged.
///
/// Anything recorded earlier on this thread is discarded first.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, EventLog) {
    clear();
    let result = tracing::subscriber::with_default(ModelEventSubscriber, f);
    (result, drain())
}
