use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every validation failure short-circuits the request before any
/// persistence mutation. The HTTP mapping lives in the API crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A path parameter that does not parse as an integer id (HTTP 400).
    #[error("{entity} {raw} invalid")]
    InvalidIdentifier { entity: &'static str, raw: String },

    /// A well-formed id with no record of the expected type (HTTP 404).
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A request body missing required fields (HTTP 400).
    #[error("Invalid data")]
    InvalidPayload,
}
