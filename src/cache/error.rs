use derive_more::{Display, Error, IsVariant};

/// An error raised when a cached value can't be converted to or from its stored JSON form.
#[derive(Debug, Display, Error, IsVariant)]
pub enum CacheError {
    #[display("failed to encode value for key {key:?}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[display("failed to decode value for key {key:?}: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
}
