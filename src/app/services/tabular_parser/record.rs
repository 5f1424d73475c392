//! Record-level tokenization for delimited text streams
//!
//! This module splits a single input line into positional string fields.
//! Typed access and tolerance rules live in [`super::field_parsers`].

/// Delimiter styles understood by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Any run of whitespace separates fields
    Whitespace,

    /// Fields separated by commas, surrounding whitespace trimmed
    Comma,
}

/// One tokenized line of a delimited input file
#[derive(Debug, Clone)]
pub struct RawRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawRecord<'a> {
    /// Tokenize one line with the given delimiter
    pub fn tokenize(line: &'a str, delimiter: Delimiter) -> Self {
        let fields = match delimiter {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Comma => line.split(',').map(str::trim).collect(),
        };
        Self { fields }
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record carries no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether the record satisfies a declared minimum field count
    pub fn meets_minimum(&self, min_fields: usize) -> bool {
        self.fields.len() >= min_fields
    }

    /// Field at `index`, or `None` when the row is too short
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// All fields in positional order
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenization() {
        let record = RawRecord::tokenize("20240101  930\t1.5 2.0", Delimiter::Whitespace);
        assert_eq!(record.len(), 4);
        assert_eq!(record.get(0), Some("20240101"));
        assert_eq!(record.get(3), Some("2.0"));
        assert_eq!(record.get(4), None);
    }

    #[test]
    fn test_comma_tokenization_trims_fields() {
        let record = RawRecord::tokenize("20240101, 930 ,1.5", Delimiter::Comma);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(1), Some("930"));
    }

    #[test]
    fn test_minimum_field_count() {
        let record = RawRecord::tokenize("a b c", Delimiter::Whitespace);
        assert!(record.meets_minimum(3));
        assert!(!record.meets_minimum(4));
    }

    #[test]
    fn test_empty_line() {
        let record = RawRecord::tokenize("", Delimiter::Whitespace);
        assert!(record.is_empty());
        assert!(!record.meets_minimum(1));
    }
}
