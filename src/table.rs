use std::collections::{hash_map::Entry, HashMap};

use num_traits::{AsPrimitive, Bounded, ToPrimitive};
use vertex_indexer_common::{ArrayIndex, Normal, Position, Texcoord};

use crate::{Error, PackedVertex};

/// An insertion-ordered set of unique [PackedVertices](PackedVertex), stored as three parallel
/// attribute arrays.
///
/// # Invariants
///
/// * `positions.len == texcoords.len == normals.len == lookup.len`
/// * `lookup[v] == i` ⟺ the attributes at `i` form `v`
/// * every `i` is representable as `Idx`
#[derive(Debug, Clone)]
pub struct VertexTable<Idx: ArrayIndex = u32> {
    positions: Vec<Position>,
    texcoords: Vec<Texcoord>,
    normals: Vec<Normal>,
    lookup: HashMap<PackedVertex, Idx>,
}

impl<Idx: ArrayIndex> Default for VertexTable<Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: ArrayIndex> VertexTable<Idx> {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            texcoords: Vec::new(),
            normals: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// An empty table with room for `vertices` entries before reallocating.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            texcoords: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            lookup: HashMap::with_capacity(vertices),
        }
    }

    /// The greatest number of entries a table indexed by `Idx` can hold.
    pub fn max_len() -> usize {
        num_traits::cast::<Idx, usize>(<Idx as Bounded>::max_value())
            .and_then(|max| max.checked_add(1))
            .unwrap_or(usize::MAX)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The index of `vertex`, if it's in the table.
    #[inline]
    pub fn get(&self, vertex: &PackedVertex) -> Option<Idx> {
        self.lookup.get(vertex).copied()
    }

    /// The entry at `index`, if there is one.
    pub fn vertex(&self, index: Idx) -> Option<PackedVertex> {
        let i = AsPrimitive::<usize>::as_(index);
        (i < self.len()).then(|| {
            PackedVertex::new(self.positions[i], self.texcoords[i], self.normals[i])
        })
    }

    /// Get the index of `vertex`, appending it to the table first if it's new.
    ///
    /// # Errors
    ///
    /// * [Error::CapacityExceeded] if `vertex` is new and the next free index doesn't fit in
    ///   `Idx`. The table is left unchanged.
    pub fn insert(&mut self, vertex: PackedVertex) -> Result<Idx, Error> {
        let next = self.len();
        match self.lookup.entry(vertex) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                let index = num_traits::cast::<usize, Idx>(next).ok_or_else(capacity_exceeded::<Idx>)?;
                entry.insert(index);
                let (position, texcoord, normal): (Position, Texcoord, Normal) = vertex.into();
                self.positions.push(position);
                self.texcoords.push(texcoord);
                self.normals.push(normal);
                Ok(index)
            }
        }
    }

    /// Iterate over the table's entries in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = PackedVertex> + '_ {
        (0..self.len())
            .map(|i| PackedVertex::new(self.positions[i], self.texcoords[i], self.normals[i]))
    }

    /// Drop the lookup map, keeping only the attribute arrays.
    pub fn into_attributes(self) -> (Vec<Position>, Vec<Texcoord>, Vec<Normal>) {
        (self.positions, self.texcoords, self.normals)
    }
}

fn capacity_exceeded<Idx: ArrayIndex>() -> Error {
    Error::CapacityExceeded {
        max_index: <Idx as Bounded>::max_value().to_u64().unwrap_or(u64::MAX),
    }
}
