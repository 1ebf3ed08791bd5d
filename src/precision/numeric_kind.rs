use serde::{Serialize, Deserialize};

/// Numeric precision used to store a layer's values.
///
/// The kind determines a value's byte width for memory accounting; no
/// arithmetic is ever performed at a given precision in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    /// Unsigned 8-bit integer, 1 byte per element.
    Uint,
    /// Single-precision float, 4 bytes per element.
    #[default]
    Single,
    /// Double-precision float, 8 bytes per element.
    Double,
}

impl NumericKind {
    /// Bytes occupied by a single element of this kind.
    pub fn byte_width(self) -> usize {
        match self {
            NumericKind::Uint => 1,
            NumericKind::Single => 4,
            NumericKind::Double => 8,
        }
    }
}
