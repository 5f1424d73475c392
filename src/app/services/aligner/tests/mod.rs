//! Test fixtures for series alignment

use crate::app::models::{Bar, ReferenceColumn, ReferenceData, ReferenceRow};


/// Bar fixture with throwaway prices
pub fn bar(index: usize, date: i32, time: i32) -> Bar {
    Bar {
        index,
        date,
        time,
        open: 1.0,
        high: 1.0,
        low: 1.0,
        close: 1.0,
        volume: 0.0,
    }
}

/// Reference dataset fixture over one named column
pub fn single_column(name: &str, rows: Vec<(i32, i32, Option<f64>)>) -> ReferenceData {
    ReferenceData {
        columns: vec![ReferenceColumn {
            name: name.to_string(),
            column: Some(2),
        }],
        rows: rows
            .into_iter()
            .map(|(date, time, value)| ReferenceRow {
                date,
                time,
                values: vec![value],
            })
            .collect(),
    }
}
