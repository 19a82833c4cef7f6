//! Turn triangle soups into indexed meshes.
//!
//! A *triangle soup* stores every corner of every triangle separately, so a vertex shared by six
//! triangles shows up six times. [index_vertices] collapses those repeats into a table of unique
//! [PackedVertices](PackedVertex) plus an index sequence that rebuilds the original triangles,
//! corner for corner and in the same winding order.
//!
//! Deduplication is exact: two corners are merged only if all eight of their `f32` components
//! are bit-identical. Nothing is normalized, averaged, or welded by distance.
//!
//! ```
//! use nalgebra::{point, vector};
//! use vertex_indexer::{IndexedMesh, TriangleSoup};
//!
//! let n = vector![0.0, 0.0, 1.0];
//! let mut soup = TriangleSoup::new();
//! soup.push_triangle([
//!     (point![0.0, 0.0, 0.0], point![0.0, 0.0], n),
//!     (point![1.0, 0.0, 0.0], point![1.0, 0.0], n),
//!     (point![0.0, 1.0, 0.0], point![0.0, 1.0], n),
//! ]);
//! soup.push_triangle([
//!     (point![1.0, 0.0, 0.0], point![1.0, 0.0], n),
//!     (point![1.0, 1.0, 0.0], point![1.0, 1.0], n),
//!     (point![0.0, 1.0, 0.0], point![0.0, 1.0], n),
//! ]);
//!
//! let mesh = IndexedMesh::<u16>::try_from(&soup).unwrap();
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.indices(), &[0, 1, 2, 1, 3, 2]);
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;
mod mesh;
mod table;
mod vertex;

pub use error::*;
pub use mesh::*;
pub use table::VertexTable;
pub use vertex::*;

pub use vertex_indexer_common::{ArrayIndex, Normal, Position, Texcoord, TriangleSoup};

#[cfg(feature = "obj")]
pub use trisoup;

/// Load a Wavefront OBJ file and index it.
#[cfg(feature = "obj")]
pub fn load_obj<Idx: ArrayIndex>(
    path: impl AsRef<std::path::Path>,
    options: &trisoup::obj::LoadOptions,
) -> Result<IndexedMesh<Idx>, LoadError> {
    let soup = trisoup::obj::load(path, options)?;
    Ok(index_soup(&soup)?)
}

/// Errors from [load_obj].
#[cfg(feature = "obj")]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] trisoup::Error),
    #[error(transparent)]
    Index(#[from] Error),
}
