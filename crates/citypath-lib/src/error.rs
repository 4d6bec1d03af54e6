use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the citypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a vertex with an existing name is added to the graph.
    #[error("duplicate vertex name: {name}")]
    DuplicateVertex { name: String },

    /// Raised when an edge or query references a vertex that does not exist.
    #[error("unknown vertex name: {name}{}", format_suggestions(.suggestions))]
    UnknownVertex {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a shortest-path run is requested from a missing source.
    #[error("unknown source vertex: {name}{}", format_suggestions(.suggestions))]
    UnknownSource {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a vertex is added with a NaN or infinite coordinate.
    #[error("invalid coordinates ({x}, {y}) for vertex {name}; coordinates must be finite")]
    InvalidCoordinate { name: String, x: f64, y: f64 },

    /// Raised when a supplied edge weight is negative or not a finite number.
    ///
    /// The endpoints are `from`/`to` because thiserror reserves a field named
    /// `source` for the underlying error.
    #[error("invalid weight {weight} for edge {from} -> {to}; weights must be finite and non-negative")]
    NegativeWeight { from: String, to: String, weight: f64 },

    /// Raised when a vertex or edge record cannot be parsed.
    #[error("malformed record at {}:{line}: {message}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vertex_without_suggestions_is_plain() {
        let err = Error::UnknownVertex {
            name: "Bostn".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown vertex name: Bostn");
    }

    #[test]
    fn unknown_source_lists_multiple_suggestions() {
        let err = Error::UnknownSource {
            name: "Spring".to_string(),
            suggestions: vec!["Springfield".to_string(), "Springdale".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown source vertex: Spring. Did you mean one of: 'Springfield', 'Springdale'?"
        );
    }

    #[test]
    fn negative_weight_names_both_endpoints() {
        let err = Error::NegativeWeight {
            from: "Boston".to_string(),
            to: "Denver".to_string(),
            weight: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid weight -2 for edge Boston -> Denver; weights must be finite and non-negative"
        );
    }

    #[test]
    fn malformed_record_reports_location() {
        let err = Error::MalformedRecord {
            path: PathBuf::from("cityxy.txt"),
            line: 4,
            message: "expected 3 fields, found 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed record at cityxy.txt:4: expected 3 fields, found 2"
        );
    }
}
