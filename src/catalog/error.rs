use std::fmt;

/// Errors returned by [`CatalogClient`](super::CatalogClient)
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Base URL could not be used to build endpoint URLs
    InvalidUrl(String),
    /// Empty product id
    InvalidId,
    /// Connection, timeout or body transfer failure
    Network(String),
    /// Server answered with a non-success status
    Status { status: u16, context: &'static str },
    /// Detail lookup for an id the server does not know
    NotFound(String),
    /// Response body was not the expected JSON
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => write!(f, "Invalid catalog URL: {}", url),
            Self::InvalidId => write!(f, "Product id is empty"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, context } => write!(f, "{} (HTTP {})", context, status),
            Self::NotFound(id) => write!(f, "Product '{}' not found", id),
            Self::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_context() {
        let err = CatalogError::Status {
            status: 502,
            context: "Failed to fetch products",
        };
        assert_eq!(err.to_string(), "Failed to fetch products (HTTP 502)");
        assert_eq!(
            CatalogError::NotFound("9".into()).to_string(),
            "Product '9' not found"
        );
    }
}
