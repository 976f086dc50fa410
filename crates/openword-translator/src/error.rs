#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("No modifier at position {index} ({available} on page)")]
    ModifierIndex { index: usize, available: usize },

    #[error("Modifier at position {index} has no text")]
    EmptyModifier { index: usize },

    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}
