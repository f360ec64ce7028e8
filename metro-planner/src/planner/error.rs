//! Query error types.

/// Errors from route planning queries.
///
/// Graph mutations never produce these; only queries do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Query names a station that is not in the graph
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// Source and destination are in different components
    #[error("no path from {from} to {to}")]
    NoPathFound { from: String, to: String },

    /// Cost computation never settled the destination
    #[error("{to} is unreachable from {from}")]
    Unreachable { from: String, to: String },
}

impl QueryError {
    pub(crate) fn no_path(from: &str, to: &str) -> Self {
        QueryError::NoPathFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub(crate) fn unreachable(from: &str, to: &str) -> Self {
        QueryError::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = QueryError::UnknownStation("Atlantis".into());
        assert_eq!(err.to_string(), "unknown station: Atlantis");

        let err = QueryError::no_path("Saket", "Vaishali");
        assert_eq!(err.to_string(), "no path from Saket to Vaishali");

        let err = QueryError::unreachable("Saket", "Vaishali");
        assert_eq!(err.to_string(), "Vaishali is unreachable from Saket");
    }
}
