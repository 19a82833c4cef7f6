use std::hash::{Hash, Hasher};

use vertex_indexer_common::{Normal, Position, Texcoord, TriangleSoup, CORNER_COMPONENTS};

/// The full attribute tuple of one triangle corner.
///
/// Equality and hashing compare the raw bit patterns of all eight components, so two
/// corners are the same vertex only if they're bit-for-bit identical: `0.0` and `-0.0`
/// are different vertices, and a NaN component matches a NaN with the same payload.
#[derive(Debug, Clone, Copy)]
pub struct PackedVertex {
    position: Position,
    texcoord: Texcoord,
    normal: Normal,
}

impl PackedVertex {
    #[inline]
    pub fn new(position: Position, texcoord: Texcoord, normal: Normal) -> Self {
        Self {
            position,
            texcoord,
            normal,
        }
    }

    /// The vertex at `corner` within `soup`.
    ///
    /// # Panics
    ///
    /// * `corner` is out of bounds for any of the soup's attribute streams
    #[inline]
    pub fn from_soup(soup: &TriangleSoup, corner: usize) -> Self {
        Self::new(
            soup.positions()[corner],
            soup.texcoords()[corner],
            soup.normals()[corner],
        )
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn texcoord(&self) -> &Texcoord {
        &self.texcoord
    }

    #[inline]
    pub fn normal(&self) -> &Normal {
        &self.normal
    }

    /// All eight components, in position → texcoord → normal order.
    pub fn components(&self) -> [f32; CORNER_COMPONENTS] {
        let (p, t, n) = (&self.position, &self.texcoord, &self.normal);
        [p.x, p.y, p.z, t.x, t.y, n.x, n.y, n.z]
    }

    /// The key that equality and hashing are defined over.
    #[inline]
    pub fn bits(&self) -> [u32; CORNER_COMPONENTS] {
        self.components().map(f32::to_bits)
    }
}

impl From<(Position, Texcoord, Normal)> for PackedVertex {
    fn from((position, texcoord, normal): (Position, Texcoord, Normal)) -> Self {
        Self::new(position, texcoord, normal)
    }
}

impl From<PackedVertex> for (Position, Texcoord, Normal) {
    fn from(value: PackedVertex) -> Self {
        (value.position, value.texcoord, value.normal)
    }
}

impl PartialEq for PackedVertex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for PackedVertex {}

impl Hash for PackedVertex {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}
