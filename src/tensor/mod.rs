pub mod blob;
pub mod shape;

pub use blob::Blob;
pub use shape::{BlobShape, Pair};
