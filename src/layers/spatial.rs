use crate::error::{LayerError, Result};
use crate::precision::NumericKind;
use crate::tensor::{BlobShape, Pair};

/// Optional construction arguments shared by the spatial layers.
///
/// Fields:
/// - `stride`:    window step; defaults to (1, 1)
/// - `padding`:   zero-border size; defaults to (0, 0)
/// - `datatype`:  activation precision; defaults to single
/// - `paramtype`: parameter precision; defaults to single
///
/// A defaulted `datatype`/`paramtype` is reported through the `log`
/// facade, so callers that care about precision fallbacks can install a
/// logger and see them; it is never a fatal condition.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerOptions {
    pub stride: Option<Pair>,
    pub padding: Option<Pair>,
    pub datatype: Option<NumericKind>,
    pub paramtype: Option<NumericKind>,
}

/// Validated channel/kernel/stride/padding configuration shared by
/// Convolution and Pooling, composed into each variant.
///
/// Construction is the only mutation these fields ever see: arguments are
/// checked and normalized here, and the variants read them afterwards.
#[derive(Debug, Clone)]
pub(crate) struct SpatialParams {
    pub(crate) name: String,
    pub(crate) input_channels: usize,
    pub(crate) output_channels: usize,
    pub(crate) kernel: Pair,
    pub(crate) stride: Pair,
    pub(crate) padding: Pair,
    pub(crate) datatype: NumericKind,
    pub(crate) paramtype: NumericKind,
}

impl SpatialParams {
    pub(crate) fn new(
        name: &str,
        input_channels: usize,
        output_channels: usize,
        kernel: impl Into<Pair>,
        options: LayerOptions,
    ) -> Result<SpatialParams> {
        if name.is_empty() {
            return Err(invalid("layer", "name must not be empty"));
        }
        if input_channels == 0 {
            return Err(invalid(name, "input_channels must be positive"));
        }
        if output_channels == 0 {
            return Err(invalid(name, "output_channels must be positive"));
        }
        let kernel = kernel.into();
        if kernel.h == 0 || kernel.w == 0 {
            return Err(invalid(name, "kernel entries must be positive"));
        }
        let stride = options.stride.unwrap_or(Pair::new(1, 1));
        if stride.h == 0 || stride.w == 0 {
            return Err(invalid(name, "stride entries must be positive"));
        }
        let padding = options.padding.unwrap_or(Pair::new(0, 0));
        let datatype = options.datatype.unwrap_or_else(|| {
            log::warn!("layer `{}`: datatype not set, defaulting to single precision", name);
            NumericKind::Single
        });
        let paramtype = options.paramtype.unwrap_or_else(|| {
            log::warn!("layer `{}`: paramtype not set, defaulting to single precision", name);
            NumericKind::Single
        });

        Ok(SpatialParams {
            name: name.to_string(),
            input_channels,
            output_channels,
            kernel,
            stride,
            padding,
            datatype,
            paramtype,
        })
    }

    /// Extracts the single rank-3 bottom shape feeding a spatial layer,
    /// returning its (channels, height, width).
    pub(crate) fn single_bottom(&self, bottom: &[BlobShape]) -> Result<(usize, usize, usize)> {
        match bottom {
            [shape] => shape.as_chw().map_err(|_| LayerError::Shape {
                context: self.name.clone(),
                what: format!(
                    "bottom shape must have rank 3 (c, h, w), got rank {}",
                    shape.rank()
                ),
            }),
            _ => Err(LayerError::Shape {
                context: self.name.clone(),
                what: format!("expected exactly one bottom shape, got {}", bottom.len()),
            }),
        }
    }

    /// Applies the window formula to both spatial dimensions:
    /// `out = (in + 2*padding - kernel) / stride + 1`, floor division.
    pub(crate) fn spatial_output(&self, h: usize, w: usize) -> Result<(usize, usize)> {
        let h_out = self.extent(h, self.kernel.h, self.stride.h, self.padding.h)?;
        let w_out = self.extent(w, self.kernel.w, self.stride.w, self.padding.w)?;
        Ok((h_out, w_out))
    }

    fn extent(&self, input: usize, kernel: usize, stride: usize, padding: usize) -> Result<usize> {
        let padded = padding
            .checked_mul(2)
            .and_then(|p| input.checked_add(p))
            .ok_or_else(|| LayerError::Shape {
                context: self.name.clone(),
                what: format!("padded input {} + 2*{} overflows", input, padding),
            })?;
        if padded < kernel {
            return Err(LayerError::Shape {
                context: self.name.clone(),
                what: format!("kernel extent {} exceeds padded input {}", kernel, padded),
            });
        }
        Ok((padded - kernel) / stride + 1)
    }
}

fn invalid(context: &str, what: &str) -> LayerError {
    LayerError::InvalidParameter {
        context: context.to_string(),
        what: what.to_string(),
    }
}
