use serde::{Serialize, Deserialize};
use crate::error::Result;
use crate::precision::NumericKind;
use crate::tensor::{Blob, BlobShape};

/// Tag for the closed set of layer variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerType {
    Input,
    Convolution,
    Pooling,
}

/// The capability contract every layer variant satisfies.
///
/// Variants supply identity, shape inference, and parameter counting; the
/// provided methods derive memory accounting from those:
///
/// - `data_memory`:  product of output dimensions × data byte width
/// - `param_memory`: learnable scalar count × parameter byte width
/// - `memory_usage`: the sum of the two
///
/// Every capability has a well-defined value on every variant. A variant
/// with no parameters reports `0`; a variant with no materialized values
/// reports `None`. Nothing is left to fail at runtime as "unimplemented".
pub trait Layer {
    /// Layer identity; set once at construction, never empty.
    fn name(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    /// The materialized tensor this layer carries, if any. Structural
    /// layers (Convolution, Pooling) return `None`.
    fn data(&self) -> Option<&Blob>;

    /// Materialized parameter values, if any. None of the shipped variants
    /// store values; this crate models structure, not weights.
    fn params(&self) -> Option<&Blob>;

    fn datatype(&self) -> NumericKind;

    fn paramtype(&self) -> NumericKind;

    /// Number of learnable scalars owned by this layer.
    fn num_params(&self) -> usize;

    /// The shape this layer produces given the bottom shape(s) feeding it.
    fn output_shape(&self, bottom: &[BlobShape]) -> Result<BlobShape>;

    /// Bytes of activation data this layer produces for the given bottom
    /// shape(s).
    fn data_memory(&self, bottom: &[BlobShape]) -> Result<usize> {
        let top = self.output_shape(bottom)?;
        Ok(top.elements() * self.datatype().byte_width())
    }

    /// Bytes of learnable parameters this layer owns.
    fn param_memory(&self) -> usize {
        self.num_params() * self.paramtype().byte_width()
    }

    /// Total footprint: activation bytes plus parameter bytes.
    fn memory_usage(&self, bottom: &[BlobShape]) -> Result<usize> {
        Ok(self.data_memory(bottom)? + self.param_memory())
    }
}
