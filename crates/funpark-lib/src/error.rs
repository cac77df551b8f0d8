use thiserror::Error;

/// Convenient result alias for the FunPark library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an attraction name could not be found in the catalog.
    #[error("unknown attraction: {name}{}", format_suggestions(.suggestions))]
    UnknownAttraction {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a location name could not be found in the park graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a location is declared more than once.
    #[error("location {name} is declared more than once")]
    DuplicateLocation { name: String },

    /// Raised when a path references a location that was never declared.
    #[error("path {from} -> {to} references undeclared location {missing}")]
    UndeclaredPathEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    /// Raised when a path has a zero walking distance.
    #[error("path {from} -> {to} must have a positive distance")]
    InvalidPathDistance { from: String, to: String },

    /// Raised when a path connects a location to itself.
    #[error("path from {location} to itself is not allowed")]
    SelfLoop { location: String },

    /// Raised when the same pair of locations is connected twice.
    #[error("path between {from} and {to} is declared more than once")]
    DuplicatePath { from: String, to: String },

    /// Raised when an attraction name is declared more than once.
    #[error("attraction {name} is declared more than once")]
    DuplicateAttraction { name: String },

    /// Raised when an attraction is bound to a location missing from the graph.
    #[error("attraction {attraction} is bound to undeclared location {location}")]
    UndeclaredAttractionLocation {
        attraction: String,
        location: String,
    },

    /// Raised when an attraction has no category labels.
    #[error("attraction {name} must have at least one category")]
    EmptyCategories { name: String },

    /// Raised when a thrill rating falls outside 1..=10.
    #[error("attraction {name} has thrill rating {thrill}; expected 1..=10")]
    ThrillOutOfRange { name: String, thrill: u8 },

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
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
