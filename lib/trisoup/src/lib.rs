//! Read model files into [TriangleSoups](TriangleSoup).
//!
//! Every loader here returns either a complete soup, with all three attribute streams filled for
//! every corner, or an [Error]. Nothing half-parsed gets out.

mod error;
mod file;
pub mod obj;

pub use error::*;
pub use file::ModelFile;

pub use vertex_indexer_common::TriangleSoup;
