pub mod error;
pub mod precision;
pub mod tensor;
pub mod layers;

// Convenience re-exports
pub use error::{LayerError, Result};
pub use precision::NumericKind;
pub use tensor::{Blob, BlobShape, Pair};
pub use layers::{Convolution, InputLayer, Layer, LayerOptions, LayerType, Pooling};
