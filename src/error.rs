/// Reasons a set of attribute streams can't be indexed as a triangle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("attribute streams differ in length: {positions} positions, {texcoords} texture coordinates, {normals} normals")]
    LengthMismatch {
        positions: usize,
        texcoords: usize,
        normals: usize,
    },
    #[error("corner count {0} is not a multiple of 3")]
    NotTriangleAligned(usize),
}

/// Errors related to building an [IndexedMesh](crate::IndexedMesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid mesh input: {0}")]
    InvalidMeshInput(#[from] InputError),
    #[error("vertex table is full: the index type can't address an entry past {max_index}")]
    CapacityExceeded { max_index: u64 },
}
