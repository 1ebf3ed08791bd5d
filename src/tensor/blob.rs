use rand::prelude::*;
use serde::{Serialize, Deserialize};
use crate::error::{LayerError, Result};
use crate::precision::NumericKind;
use crate::tensor::shape::BlobShape;

/// A materialized tensor: a shape, a numeric kind, and backing values.
///
/// Values are held as `f64` regardless of kind; the kind only drives
/// byte accounting, never arithmetic. Deserialization goes through
/// `from_data`, so a value list that does not fill the shape is rejected
/// the same way it is at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawBlob", into = "RawBlob")]
pub struct Blob {
    shape: BlobShape,
    kind: NumericKind,
    data: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawBlob {
    shape: BlobShape,
    kind: NumericKind,
    data: Vec<f64>,
}

impl TryFrom<RawBlob> for Blob {
    type Error = LayerError;

    fn try_from(raw: RawBlob) -> Result<Blob> {
        Blob::from_data(raw.shape, raw.kind, raw.data)
    }
}

impl From<Blob> for RawBlob {
    fn from(blob: Blob) -> RawBlob {
        RawBlob {
            shape: blob.shape,
            kind: blob.kind,
            data: blob.data,
        }
    }
}

impl Blob {
    pub fn zeros(shape: BlobShape, kind: NumericKind) -> Blob {
        let n = shape.elements();
        Blob { shape, kind, data: vec![0.0; n] }
    }

    /// Fills the blob with uniform values in [-1, 1].
    pub fn random(shape: BlobShape, kind: NumericKind) -> Blob {
        let mut rng = rand::thread_rng();
        let n = shape.elements();
        let data = (0..n).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();
        Blob { shape, kind, data }
    }

    /// Wraps existing values; the value count must fill the shape exactly.
    pub fn from_data(shape: BlobShape, kind: NumericKind, data: Vec<f64>) -> Result<Blob> {
        if data.len() != shape.elements() {
            return Err(LayerError::Shape {
                context: "blob".to_string(),
                what: format!(
                    "{} values do not fill shape {:?} ({} elements)",
                    data.len(),
                    shape.dims(),
                    shape.elements()
                ),
            });
        }
        Ok(Blob { shape, kind, data })
    }

    pub fn shape(&self) -> &BlobShape {
        &self.shape
    }

    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Bytes occupied by the materialized values under this blob's kind.
    pub fn size_bytes(&self) -> usize {
        self.shape.elements() * self.kind.byte_width()
    }
}
