use serde::{Serialize, Deserialize};
use crate::error::{LayerError, Result};

/// A (height, width) pair of spatial extents.
///
/// Constructors that take `impl Into<Pair>` accept either a scalar or a
/// tuple, so `3` and `(3, 3)` describe the same square window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub h: usize,
    pub w: usize,
}

impl Pair {
    pub fn new(h: usize, w: usize) -> Pair {
        Pair { h, w }
    }
}

impl From<usize> for Pair {
    fn from(v: usize) -> Pair {
        Pair { h: v, w: v }
    }
}

impl From<(usize, usize)> for Pair {
    fn from((h, w): (usize, usize)) -> Pair {
        Pair { h, w }
    }
}

/// The size descriptor of a layer's output tensor, conventionally
/// (channels, height, width). Immutable once produced.
///
/// Serializes as a plain dimension list; deserialization runs the same
/// validation as `new`, so a rejected shape cannot enter through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct BlobShape {
    dims: Vec<usize>,
}

impl BlobShape {
    /// Validates that the dimension list is non-empty with every entry
    /// strictly positive.
    pub fn new(dims: Vec<usize>) -> Result<BlobShape> {
        if dims.is_empty() {
            return Err(LayerError::Shape {
                context: "blob shape".to_string(),
                what: "dimension list is empty".to_string(),
            });
        }
        for (i, &d) in dims.iter().enumerate() {
            if d == 0 {
                return Err(LayerError::Shape {
                    context: "blob shape".to_string(),
                    what: format!("dimension {} is zero", i),
                });
            }
        }
        Ok(BlobShape { dims })
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total element count: the product of all dimensions.
    pub fn elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Destructures a rank-3 shape into (channels, height, width).
    pub fn as_chw(&self) -> Result<(usize, usize, usize)> {
        match self.dims.as_slice() {
            [c, h, w] => Ok((*c, *h, *w)),
            _ => Err(LayerError::Shape {
                context: "blob shape".to_string(),
                what: format!("expected rank 3 (c, h, w), got rank {}", self.rank()),
            }),
        }
    }
}

impl TryFrom<Vec<usize>> for BlobShape {
    type Error = LayerError;

    fn try_from(dims: Vec<usize>) -> Result<BlobShape> {
        BlobShape::new(dims)
    }
}

impl From<BlobShape> for Vec<usize> {
    fn from(shape: BlobShape) -> Vec<usize> {
        shape.dims
    }
}
