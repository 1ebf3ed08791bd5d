use thiserror::Error;

/// Error conditions surfaced by layer construction and shape queries.
///
/// - `InvalidParameter`: a construction argument violated its invariant;
///   the layer is not built.
/// - `Shape`: a shape query received a malformed or rank-incompatible
///   bottom shape, or the computed output dimension collapsed to nothing.
/// - `Unsupported`: a capability was invoked on a variant that does not
///   define it. The shipped variants define every capability, so this
///   only signals a contract violation in a future variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    #[error("{context}: invalid parameter: {what}")]
    InvalidParameter { context: String, what: String },

    #[error("{context}: shape error: {what}")]
    Shape { context: String, what: String },

    #[error("{context}: unsupported capability `{capability}`")]
    Unsupported {
        context: String,
        capability: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, LayerError>;
