use thiserror::Error;

/// Failure to extract an app identifier from a store product URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The input is not a syntactically valid URL.
    #[error("malformed store URL: \"{url}\"")]
    MalformedUrl { url: String },

    /// The URL parses but no recognition pattern captured an identifier.
    #[error("no app id found in store URL: \"{url}\"")]
    NoIdFound { url: String },
}

/// Errors returned by the iTunes lookup client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A caller-supplied URL could not be parsed at all.
    #[error("malformed URL \"{url}\": {reason}")]
    MalformedUrl { url: String, reason: String },

    /// The store URL did not yield an app identifier.
    #[error("invalid store URL: {0}")]
    InvalidStoreUrl(#[from] ExtractError),

    /// The lookup endpoint answered with a status other than 200.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The lookup succeeded but carried zero results for the id.
    #[error("no app found for id {id}")]
    NotFound { id: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
