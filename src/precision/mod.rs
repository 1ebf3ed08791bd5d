pub mod numeric_kind;

pub use numeric_kind::NumericKind;
