//! Error types for registry operations.

/// Errors surfaced by the enum registry.
///
/// Misses in validity checks and searches are modeled as `false` / `None`
/// results; the only lookup allowed to fail is construction by name
/// (`Enumerated::make`).
#[derive(Debug, thiserror::Error)]
pub enum EnumError {
    /// Construction by name found no matching entry after fill.
    #[error("the name {name:?} is not available in enum {enum_name}")]
    EntryNotFound {
        enum_name: &'static str,
        name: String,
    },

    /// A definition document does not have a loadable shape.
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),

    /// Serializing a query result failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
