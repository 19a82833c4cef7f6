use nalgebra::{point, vector};
use vertex_indexer::{
    index_soup, index_vertices, Error, IndexedMesh, InputError, PackedVertex, TriangleSoup,
};

fn corner(i: u32) -> PackedVertex {
    let f = i as f32;
    PackedVertex::new(
        point![f, f * 2.0, -f],
        point![f / 300.0, 1.0 - f / 300.0],
        vector![0.0, 1.0, 0.0],
    )
}

fn soup_of(corners: impl IntoIterator<Item = PackedVertex>) -> TriangleSoup {
    let mut soup = TriangleSoup::new();
    for c in corners {
        soup.push_corner(*c.position(), *c.texcoord(), *c.normal());
    }
    soup
}

#[test]
fn single_triangle() {
    let soup = soup_of((0..3).map(corner));
    let mesh = index_soup::<u32>(&soup).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.indices(), &[0, 1, 2]);
    assert_eq!(mesh.triangle(0), [corner(0), corner(1), corner(2)]);
}

#[test]
fn two_triangles_sharing_an_edge() {
    // (a, b, c) and (c, b, d): the edge b-c is shared
    let [a, b, c, d] = [corner(0), corner(1), corner(2), corner(3)];
    let soup = soup_of([a, b, c, c, b, d]);
    let mesh = index_soup::<u16>(&soup).unwrap();

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.index_count(), 6);
    assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 3]);
    let idx = mesh.indices();
    assert_eq!(idx[1], idx[4]);
    assert_eq!(idx[2], idx[3]);
    assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[a, b, c], [c, b, d]]);
}

#[test]
fn empty_input() {
    let mesh = index_vertices::<u32>(&[], &[], &[]).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.index_count(), 0);
    assert_eq!(mesh, IndexedMesh::default());
}

#[test]
fn mismatched_lengths() {
    let soup = soup_of((0..3).map(corner));
    let err = index_vertices::<u32>(soup.positions(), &soup.texcoords()[..2], soup.normals())
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidMeshInput(InputError::LengthMismatch {
            positions: 3,
            texcoords: 2,
            normals: 3,
        })
    );

    let err = index_vertices::<u32>(soup.positions(), soup.texcoords(), &soup.normals()[..1])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMeshInput(InputError::LengthMismatch { normals: 1, .. })
    ));
}

#[test]
fn partial_triangle() {
    let soup = soup_of((0..4).map(corner));
    assert_eq!(
        index_soup::<u32>(&soup),
        Err(Error::InvalidMeshInput(InputError::NotTriangleAligned(4)))
    );
}

#[test]
fn all_distinct_corners() {
    let soup = soup_of((0..300).map(corner));
    let mesh = index_soup::<u16>(&soup).unwrap();
    assert_eq!(mesh.vertex_count(), 300);
    assert!(mesh.indices().iter().copied().eq(0..300));
}

#[test]
fn all_identical_corners() {
    let soup = soup_of(std::iter::repeat(corner(7)).take(300));
    let mesh = index_soup::<u32>(&soup).unwrap();
    assert_eq!(mesh.vertex_count(), 1);
    assert_eq!(mesh.index_count(), 300);
    assert!(mesh.indices().iter().all(|&i| i == 0));
    // degenerate triangles survive
    assert_eq!(mesh.triangle_count(), 100);
    assert_eq!(mesh.to_soup(), soup);
}

#[test]
fn first_occurrence_claims_the_index() {
    let soup = soup_of([5, 3, 5, 9, 3, 3].map(corner));
    let mesh = index_soup::<u8>(&soup).unwrap();
    assert_eq!(mesh.indices(), &[0, 1, 0, 2, 1, 1]);
    assert_eq!(mesh.vertex(0), corner(5));
    assert_eq!(mesh.vertex(1), corner(3));
    assert_eq!(mesh.vertex(2), corner(9));
}

#[test]
fn near_duplicates_stay_apart() {
    let a = corner(1);
    let nudged = PackedVertex::new(
        *a.position(),
        *a.texcoord(),
        a.normal() * (1.0 + f32::EPSILON),
    );
    let soup = soup_of([a, nudged, a]);
    let mesh = index_soup::<u32>(&soup).unwrap();
    assert_eq!(mesh.vertex_count(), 2);
    assert_eq!(mesh.indices(), &[0, 1, 0]);
}

#[test]
fn signed_zero_is_a_distinct_vertex() {
    let n = vector![0.0, 0.0, 1.0];
    let soup = soup_of([
        PackedVertex::new(point![0.0, 0.0, 0.0], point![0.0, 0.0], n),
        PackedVertex::new(point![-0.0, 0.0, 0.0], point![0.0, 0.0], n),
        PackedVertex::new(point![0.0, 0.0, 0.0], point![0.0, 0.0], n),
    ]);
    let mesh = index_soup::<u32>(&soup).unwrap();
    assert_eq!(mesh.indices(), &[0, 1, 0]);
}

#[test]
fn capacity_of_the_index_type() {
    // u8 addresses exactly 256 table entries
    let fits = soup_of((0..256).chain([0, 1]).map(corner));
    let mesh = index_soup::<u8>(&fits).unwrap();
    assert_eq!(mesh.vertex_count(), 256);
    assert_eq!(mesh.indices()[257], 1);

    let full = soup_of((0..257).chain([0]).map(corner));
    assert_eq!(
        index_soup::<u8>(&full),
        Err(Error::CapacityExceeded { max_index: 255 })
    );
    // the same mesh is fine with wider indices
    assert_eq!(index_soup::<u16>(&full).unwrap().vertex_count(), 257);
}

#[test]
fn try_from_soup() {
    let soup = soup_of([0, 1, 2, 2, 1, 0].map(corner));
    let mesh = IndexedMesh::<u32>::try_from(&soup).unwrap();
    assert_eq!(mesh, index_soup(&soup).unwrap());
    let (positions, texcoords, normals, indices) = mesh.into_parts();
    assert_eq!(positions.len(), 3);
    assert_eq!(texcoords.len(), 3);
    assert_eq!(normals.len(), 3);
    assert_eq!(indices, vec![0, 1, 2, 2, 1, 0]);
}

#[test]
fn meshes_index_independently_across_threads() {
    let first = soup_of([0, 1, 2, 2, 1, 3].map(corner));
    let second = soup_of([9, 8, 7, 7, 8, 9].map(corner));
    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| index_soup::<u32>(&first));
        let b = s.spawn(|| index_soup::<u32>(&second));
        (a.join().unwrap().unwrap(), b.join().unwrap().unwrap())
    });
    // table identity doesn't leak between meshes
    assert_eq!(a.indices(), &[0, 1, 2, 2, 1, 3]);
    assert_eq!(b.indices(), &[0, 1, 2, 2, 1, 0]);
    assert_eq!(b.vertex(0), corner(9));
}
