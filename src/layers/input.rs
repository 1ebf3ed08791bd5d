use crate::error::{LayerError, Result};
use crate::layers::contract::{Layer, LayerType};
use crate::precision::NumericKind;
use crate::tensor::{Blob, BlobShape};

/// A layer that wraps an already-materialized tensor.
///
/// It sits at the bottom of a network and has no upstream, no learnable
/// parameters, and no computation; it only reports the shape and footprint
/// of the data it holds.
#[derive(Debug, Clone)]
pub struct InputLayer {
    name: String,
    blob: Blob,
}

impl InputLayer {
    pub fn new(blob: Blob, name: &str) -> Result<InputLayer> {
        if name.is_empty() {
            return Err(LayerError::InvalidParameter {
                context: "input layer".to_string(),
                what: "name must not be empty".to_string(),
            });
        }
        Ok(InputLayer {
            name: name.to_string(),
            blob,
        })
    }
}

impl Layer for InputLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn layer_type(&self) -> LayerType {
        LayerType::Input
    }

    fn data(&self) -> Option<&Blob> {
        Some(&self.blob)
    }

    fn params(&self) -> Option<&Blob> {
        None
    }

    fn datatype(&self) -> NumericKind {
        self.blob.kind()
    }

    fn paramtype(&self) -> NumericKind {
        self.blob.kind()
    }

    fn num_params(&self) -> usize {
        0
    }

    /// Returns the wrapped tensor's own shape. Passing any bottom shape is
    /// an error: an input layer has nothing upstream.
    fn output_shape(&self, bottom: &[BlobShape]) -> Result<BlobShape> {
        if !bottom.is_empty() {
            return Err(LayerError::Shape {
                context: self.name.clone(),
                what: format!("input layer takes no bottom shapes, got {}", bottom.len()),
            });
        }
        Ok(self.blob.shape().clone())
    }
}
