use crate::{Normal, Position, Texcoord};

/// A flat, per-corner vertex stream: every run of three corners is one triangle, in winding
/// order.
///
/// Vertices shared between triangles appear once per triangle that uses them. The three
/// attribute streams are parallel; a soup built through [`Self::push_corner`] or
/// [`Self::push_triangle`] always keeps them the same length, but one built with
/// [`Self::from_parts`] is taken as-is and may not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    positions: Vec<Position>,
    texcoords: Vec<Texcoord>,
    normals: Vec<Normal>,
}

impl TriangleSoup {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty soup with room for `corners` corners in each stream.
    pub fn with_capacity(corners: usize) -> Self {
        Self {
            positions: Vec::with_capacity(corners),
            texcoords: Vec::with_capacity(corners),
            normals: Vec::with_capacity(corners),
        }
    }

    /// Wrap three attribute streams without checking them.
    pub fn from_parts(
        positions: Vec<Position>,
        texcoords: Vec<Texcoord>,
        normals: Vec<Normal>,
    ) -> Self {
        Self {
            positions,
            texcoords,
            normals,
        }
    }

    pub fn into_parts(self) -> (Vec<Position>, Vec<Texcoord>, Vec<Normal>) {
        (self.positions, self.texcoords, self.normals)
    }

    #[inline]
    pub fn push_corner(&mut self, position: Position, texcoord: Texcoord, normal: Normal) {
        self.positions.push(position);
        self.texcoords.push(texcoord);
        self.normals.push(normal);
    }

    pub fn push_triangle(&mut self, corners: [(Position, Texcoord, Normal); 3]) {
        for (p, t, n) in corners {
            self.push_corner(p, t, n);
        }
    }

    /// Append every corner of `other` after the corners of `self`.
    pub fn append(&mut self, other: &mut TriangleSoup) {
        self.positions.append(&mut other.positions);
        self.texcoords.append(&mut other.texcoords);
        self.normals.append(&mut other.normals);
    }

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

    /// Number of corners, going by the position stream.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of whole triangles in the position stream.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    /// Whether all three streams have the same length, and that length is a whole number of
    /// triangles.
    pub fn is_well_formed(&self) -> bool {
        self.positions.len() == self.texcoords.len()
            && self.positions.len() == self.normals.len()
            && self.positions.len() % 3 == 0
    }
}
