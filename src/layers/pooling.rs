use crate::error::{LayerError, Result};
use crate::layers::contract::{Layer, LayerType};
use crate::layers::spatial::{LayerOptions, SpatialParams};
use crate::precision::NumericKind;
use crate::tensor::{Blob, BlobShape, Pair};

/// A 2D pooling layer.
///
/// Shares the validated window configuration with `Convolution` but owns
/// no learnable weights, and its channel depth passes through from the
/// bottom shape unchanged. A declared `output_channels` is advisory
/// metadata and must agree with the bottom shape's channel count.
#[derive(Debug, Clone)]
pub struct Pooling {
    params: SpatialParams,
}

impl Pooling {
    /// Builds a pooling layer with default stride (1, 1), padding (0, 0)
    /// and single-precision data/parameters.
    pub fn new(
        name: &str,
        input_channels: usize,
        output_channels: usize,
        kernel: impl Into<Pair>,
    ) -> Result<Pooling> {
        Pooling::with_options(
            name,
            input_channels,
            output_channels,
            kernel,
            LayerOptions::default(),
        )
    }

    pub fn with_options(
        name: &str,
        input_channels: usize,
        output_channels: usize,
        kernel: impl Into<Pair>,
        options: LayerOptions,
    ) -> Result<Pooling> {
        Ok(Pooling {
            params: SpatialParams::new(name, input_channels, output_channels, kernel, options)?,
        })
    }

    pub fn input_channels(&self) -> usize {
        self.params.input_channels
    }

    pub fn output_channels(&self) -> usize {
        self.params.output_channels
    }

    pub fn kernel(&self) -> Pair {
        self.params.kernel
    }

    pub fn stride(&self) -> Pair {
        self.params.stride
    }

    pub fn padding(&self) -> Pair {
        self.params.padding
    }
}

impl Layer for Pooling {
    fn name(&self) -> &str {
        &self.params.name
    }

    fn layer_type(&self) -> LayerType {
        LayerType::Pooling
    }

    fn data(&self) -> Option<&Blob> {
        None
    }

    fn params(&self) -> Option<&Blob> {
        None
    }

    fn datatype(&self) -> NumericKind {
        self.params.datatype
    }

    fn paramtype(&self) -> NumericKind {
        self.params.paramtype
    }

    /// Pooling owns no learnable weights.
    fn num_params(&self) -> usize {
        0
    }

    fn output_shape(&self, bottom: &[BlobShape]) -> Result<BlobShape> {
        let (c, h, w) = self.params.single_bottom(bottom)?;
        if c != self.params.output_channels {
            return Err(LayerError::Shape {
                context: self.params.name.clone(),
                what: format!(
                    "declared {} output channels but bottom has {}; pooling does not change channel depth",
                    self.params.output_channels, c
                ),
            });
        }
        let (h_out, w_out) = self.params.spatial_output(h, w)?;
        BlobShape::new(vec![c, h_out, w_out])
    }
}
