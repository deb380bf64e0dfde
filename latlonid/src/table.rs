//! Dense per-coordinate storage.
//!
//! [`CoordTable`] keeps one value for every whole-degree coordinate in a flat
//! row-major buffer, the same way a raster tile stores one sample per grid
//! point. Slot `i` belongs to the coordinate whose identifier is `i + 1`.
//!
//! ```
//! use latlonid::{Coordinate, CoordTable};
//!
//! let mut visits: CoordTable<u32> = CoordTable::default();
//! let fuji = Coordinate::from_degrees(35.36, 138.73)?;
//! visits[fuji] += 1;
//! assert_eq!(visits[fuji], 1);
//! assert_eq!(visits.iter().filter(|(_, n)| **n > 0).count(), 1);
//! # Ok::<(), latlonid::LatLonError>(())
//! ```

use std::ops::{Index, IndexMut};

use crate::codec::{self, MAX_ID};
use crate::coord::Coordinate;
use crate::id::LatLonId;

/// One `T` per coordinate, addressed by [`Coordinate`] or [`LatLonId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordTable<T> {
    slots: Box<[T]>,
}

impl<T: Clone> CoordTable<T> {
    /// A table with every slot set to `fill`.
    pub fn new(fill: T) -> Self {
        Self {
            slots: vec![fill; MAX_ID as usize].into_boxed_slice(),
        }
    }
}

impl<T> CoordTable<T> {
    /// A table whose slots are computed from their coordinates.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(Coordinate) -> T,
    {
        Self {
            slots: codec::coordinates().map(f).collect(),
        }
    }

    /// Number of slots; always [`MAX_ID`].
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; every coordinate has a slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The value stored for `coord`.
    pub fn get(&self, coord: Coordinate) -> &T {
        &self.slots[coord.id().index()]
    }

    /// Mutable access to the value stored for `coord`.
    pub fn get_mut(&mut self, coord: Coordinate) -> &mut T {
        &mut self.slots[coord.id().index()]
    }

    /// The value stored for `id`.
    pub fn get_id(&self, id: LatLonId) -> &T {
        &self.slots[id.index()]
    }

    /// Mutable access to the value stored for `id`.
    pub fn get_id_mut(&mut self, id: LatLonId) -> &mut T {
        &mut self.slots[id.index()]
    }

    /// Store `value` for `coord`, returning the previous value.
    pub fn replace(&mut self, coord: Coordinate, value: T) -> T {
        std::mem::replace(self.get_mut(coord), value)
    }

    /// Slots in identifier order.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// `(coordinate, value)` pairs in identifier order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Coordinate, &T)> + ExactSizeIterator {
        codec::coordinates().zip(self.slots.iter())
    }

    /// Mutable `(coordinate, value)` pairs in identifier order.
    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (Coordinate, &mut T)> + ExactSizeIterator {
        codec::coordinates().zip(self.slots.iter_mut())
    }
}

impl<T: Default> Default for CoordTable<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Coordinate> for CoordTable<T> {
    type Output = T;

    fn index(&self, coord: Coordinate) -> &T {
        self.get(coord)
    }
}

impl<T> IndexMut<Coordinate> for CoordTable<T> {
    fn index_mut(&mut self, coord: Coordinate) -> &mut T {
        self.get_mut(coord)
    }
}

impl<T> Index<LatLonId> for CoordTable<T> {
    type Output = T;

    fn index(&self, id: LatLonId) -> &T {
        self.get_id(id)
    }
}

impl<T> IndexMut<LatLonId> for CoordTable<T> {
    fn index_mut(&mut self, id: LatLonId) -> &mut T {
        self.get_id_mut(id)
    }
}
