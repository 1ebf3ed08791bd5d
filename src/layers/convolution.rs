use crate::error::Result;
use crate::layers::contract::{Layer, LayerType};
use crate::layers::spatial::{LayerOptions, SpatialParams};
use crate::precision::NumericKind;
use crate::tensor::{Blob, BlobShape, Pair};

/// A 2D convolution layer, modeled structurally: it carries its window
/// configuration and shape/memory formulas but no weight values.
#[derive(Debug, Clone)]
pub struct Convolution {
    params: SpatialParams,
}

impl Convolution {
    /// Builds a convolution with default stride (1, 1), padding (0, 0) and
    /// single-precision data/parameters.
    pub fn new(
        name: &str,
        input_channels: usize,
        output_channels: usize,
        kernel: impl Into<Pair>,
    ) -> Result<Convolution> {
        Convolution::with_options(
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
    ) -> Result<Convolution> {
        Ok(Convolution {
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

impl Layer for Convolution {
    fn name(&self) -> &str {
        &self.params.name
    }

    fn layer_type(&self) -> LayerType {
        LayerType::Convolution
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

    /// kernel_h × kernel_w × input_channels × output_channels; no bias
    /// term is modeled.
    fn num_params(&self) -> usize {
        let k = self.params.kernel;
        k.h * k.w * self.params.input_channels * self.params.output_channels
    }

    fn output_shape(&self, bottom: &[BlobShape]) -> Result<BlobShape> {
        let (_, h, w) = self.params.single_bottom(bottom)?;
        let (h_out, w_out) = self.params.spatial_output(h, w)?;
        BlobShape::new(vec![self.params.output_channels, h_out, w_out])
    }
}
