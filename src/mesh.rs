use num_traits::AsPrimitive;
use vertex_indexer_common::{ArrayIndex, Normal, Position, Texcoord, TriangleSoup};

use crate::{Error, InputError, PackedVertex, VertexTable};

/// A deduplicated vertex table plus the index sequence that rebuilds the original triangles from
/// it.
///
/// # Invariants
///
/// * `positions.len == texcoords.len == normals.len`
/// * no two table entries form the same [PackedVertex]
/// * `indices.len % 3 == 0`, and every index is `< positions.len`
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh<Idx: ArrayIndex = u32> {
    positions: Vec<Position>,
    texcoords: Vec<Texcoord>,
    normals: Vec<Normal>,
    indices: Vec<Idx>,
}

impl<Idx: ArrayIndex> Default for IndexedMesh<Idx> {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            texcoords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }
}

fn check_input(positions: usize, texcoords: usize, normals: usize) -> Result<(), InputError> {
    if positions != texcoords || positions != normals {
        return Err(InputError::LengthMismatch {
            positions,
            texcoords,
            normals,
        });
    }
    if positions % 3 != 0 {
        return Err(InputError::NotTriangleAligned(positions));
    }
    Ok(())
}

/// Build an [IndexedMesh] from three parallel per-corner attribute streams.
///
/// Corners are visited in order; the first occurrence of each distinct [PackedVertex] claims the
/// next free table index, and later occurrences reuse it. The result is fully determined by the
/// input.
///
/// # Errors
///
/// * [Error::InvalidMeshInput] if the streams differ in length, or their length isn't a multiple
///   of 3
/// * [Error::CapacityExceeded] if the mesh has more unique vertices than `Idx` can address
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(corners = positions.len()))
)]
pub fn index_vertices<Idx: ArrayIndex>(
    positions: &[Position],
    texcoords: &[Texcoord],
    normals: &[Normal],
) -> Result<IndexedMesh<Idx>, Error> {
    check_input(positions.len(), texcoords.len(), normals.len())?;

    let corners = positions.len();
    let mut table = VertexTable::<Idx>::with_capacity(corners.min(VertexTable::<Idx>::max_len()));
    let mut indices = Vec::with_capacity(corners);
    for ((position, texcoord), normal) in positions.iter().zip(texcoords).zip(normals) {
        indices.push(table.insert(PackedVertex::new(*position, *texcoord, *normal))?);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(corners, unique = table.len(), "indexed mesh");

    let (positions, texcoords, normals) = table.into_attributes();
    Ok(IndexedMesh {
        positions,
        texcoords,
        normals,
        indices,
    })
}

/// Build an [IndexedMesh] from a [TriangleSoup]. See [index_vertices].
#[inline]
pub fn index_soup<Idx: ArrayIndex>(soup: &TriangleSoup) -> Result<IndexedMesh<Idx>, Error> {
    index_vertices(soup.positions(), soup.texcoords(), soup.normals())
}

impl<Idx: ArrayIndex> TryFrom<&TriangleSoup> for IndexedMesh<Idx> {
    type Error = Error;
    fn try_from(soup: &TriangleSoup) -> Result<Self, Self::Error> {
        index_soup(soup)
    }
}

impl<Idx: ArrayIndex> IndexedMesh<Idx> {
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn texcoords(&self) -> &[Texcoord] {
        &self.texcoords
    }

    #[inline]
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    #[inline]
    pub fn indices(&self) -> &[Idx] {
        &self.indices
    }

    /// Number of unique vertices in the table.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The table entry at `vertex`.
    ///
    /// # Panics
    ///
    /// * `vertex` ≥ [Self::vertex_count]
    pub fn vertex(&self, vertex: Idx) -> PackedVertex {
        let i = AsPrimitive::<usize>::as_(vertex);
        PackedVertex::new(self.positions[i], self.texcoords[i], self.normals[i])
    }

    /// The vertex at position `corner` of the original corner stream.
    ///
    /// # Panics
    ///
    /// * `corner` ≥ [Self::index_count]
    #[inline]
    pub fn corner(&self, corner: usize) -> PackedVertex {
        self.vertex(self.indices[corner])
    }

    /// The corners of triangle `tri`, in winding order.
    ///
    /// # Panics
    ///
    /// * `tri` ≥ [Self::triangle_count]
    pub fn triangle(&self, tri: usize) -> [PackedVertex; 3] {
        let base = tri * 3;
        [self.corner(base), self.corner(base + 1), self.corner(base + 2)]
    }

    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [PackedVertex; 3]> + '_ {
        (0..self.triangle_count()).map(|tri| self.triangle(tri))
    }

    /// Expand back into a flat corner stream.
    pub fn to_soup(&self) -> TriangleSoup {
        let mut soup = TriangleSoup::with_capacity(self.index_count());
        for &index in &self.indices {
            let i = AsPrimitive::<usize>::as_(index);
            soup.push_corner(self.positions[i], self.texcoords[i], self.normals[i]);
        }
        soup
    }

    pub fn into_parts(self) -> (Vec<Position>, Vec<Texcoord>, Vec<Normal>, Vec<Idx>) {
        (self.positions, self.texcoords, self.normals, self.indices)
    }
}
