pub mod contract;
pub mod convolution;
pub mod input;
pub mod pooling;
pub mod spatial;

pub use contract::{Layer, LayerType};
pub use convolution::Convolution;
pub use input::InputLayer;
pub use pooling::Pooling;
pub use spatial::LayerOptions;
