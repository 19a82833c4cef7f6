use std::{
    fmt,
    mem::size_of,
    path::{Path, PathBuf},
};

use vertex_indexer::{ArrayIndex, IndexedMesh, Normal, Position, Texcoord, TriangleSoup};

const VERTEX_BYTES: usize = size_of::<Position>() + size_of::<Texcoord>() + size_of::<Normal>();

/// What indexing did to one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub path: PathBuf,
    pub corners: usize,
    pub vertices: usize,
    pub indices: usize,
    /// Size of the soup's attribute streams.
    pub soup_bytes: usize,
    /// Size of the vertex table plus the index buffer.
    pub indexed_bytes: usize,
}

impl Summary {
    pub fn new<Idx: ArrayIndex>(
        path: impl AsRef<Path>,
        soup: &TriangleSoup,
        mesh: &IndexedMesh<Idx>,
    ) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            corners: soup.len(),
            vertices: mesh.vertex_count(),
            indices: mesh.index_count(),
            soup_bytes: soup.len() * VERTEX_BYTES,
            indexed_bytes: mesh.vertex_count() * VERTEX_BYTES
                + mesh.index_count() * size_of::<Idx>(),
        }
    }

    #[inline]
    pub fn triangles(&self) -> usize {
        self.corners / 3
    }

    /// Average number of corners sharing each unique vertex.
    pub fn reuse(&self) -> f64 {
        if self.vertices == 0 {
            0.0
        } else {
            self.corners as f64 / self.vertices as f64
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} triangles, {} corners -> {} vertices + {} indices ({:.2}x reuse), {} -> {} bytes",
            self.path.display(),
            self.triangles(),
            self.corners,
            self.vertices,
            self.indices,
            self.reuse(),
            self.soup_bytes,
            self.indexed_bytes,
        )
    }
}

#[cfg(test)]
mod test {
    use vertex_indexer::{index_soup, PackedVertex, TriangleSoup};

    use super::{Summary, VERTEX_BYTES};

    #[test]
    fn quad() {
        let n = vertex_indexer::Normal::new(0.0, 0.0, 1.0);
        let corner = |x: f32, y: f32| PackedVertex::new([x, y, 0.0].into(), [x, y].into(), n);
        let mut soup = TriangleSoup::new();
        for v in [
            corner(0.0, 0.0),
            corner(1.0, 0.0),
            corner(1.0, 1.0),
            corner(0.0, 0.0),
            corner(1.0, 1.0),
            corner(0.0, 1.0),
        ] {
            soup.push_corner(*v.position(), *v.texcoord(), *v.normal());
        }
        let mesh = index_soup::<u16>(&soup).unwrap();
        let summary = Summary::new("quad.obj", &soup, &mesh);

        assert_eq!(VERTEX_BYTES, 32);
        assert_eq!(summary.triangles(), 2);
        assert_eq!(summary.vertices, 4);
        assert_eq!(summary.indices, 6);
        assert_eq!(summary.soup_bytes, 6 * 32);
        assert_eq!(summary.indexed_bytes, 4 * 32 + 6 * 2);
        assert_eq!(summary.reuse(), 1.5);
        assert_eq!(
            summary.to_string(),
            "quad.obj: 2 triangles, 6 corners -> 4 vertices + 6 indices (1.50x reuse), 192 -> 140 bytes"
        );
    }

    #[test]
    fn empty() {
        let soup = TriangleSoup::new();
        let mesh = index_soup::<u32>(&soup).unwrap();
        let summary = Summary::new("empty.obj", &soup, &mesh);
        assert_eq!(summary.reuse(), 0.0);
        assert_eq!(summary.indexed_bytes, 0);
        assert_eq!(summary.indices, 0);
    }
}
