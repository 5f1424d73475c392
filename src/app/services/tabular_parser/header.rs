//! Header-driven column resolution
//!
//! The reference CSV's first line names its columns. Downstream logic asks
//! for "the column named X" and receives its positional index, or learns the
//! column is not present at all, a distinct state from a present column
//! whose cells fail to parse.

use std::collections::HashMap;

use super::record::{Delimiter, RawRecord};
use crate::app::models::ReferenceColumn;

/// Column name to positional index mapping built from a header line
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Analyze a header line of column names
    ///
    /// Duplicate names keep the last position, consistent with the
    /// last-write-wins policy used elsewhere.
    pub fn analyze(header_line: &str, delimiter: Delimiter) -> Self {
        let record = RawRecord::tokenize(header_line, delimiter);
        let mut name_to_index = HashMap::new();

        for (index, name) in record.fields().iter().enumerate() {
            name_to_index.insert(name.to_string(), index);
        }

        Self { name_to_index }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of columns in the header
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    /// Whether the header carried no columns
    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }

    /// Resolve requested field names against the header
    ///
    /// Absent names come back with `column: None` rather than disappearing,
    /// so callers can tell "column absent" from "value missing".
    pub fn resolve(&self, fields: &[String]) -> Vec<ReferenceColumn> {
        fields
            .iter()
            .map(|name| ReferenceColumn {
                name: name.clone(),
                column: self.get_index(name),
            })
            .collect()
    }
}
