//! Deduplicated planar vertices shared between cell footprints.

use crate::errors::{GridError, GridResult};
use crate::float_types::Real;
use nalgebra::Point2;

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;

/// The four corners of a rectangular cell: back-left, back-right, front-right, front-left.
pub type Footprint = [Point2<Real>; 4];

/// Exact-coordinate key; `-0.0` and `0.0` share a key.
#[cfg(feature = "hashmap")]
type VertexKey = (u64, u64);

#[cfg(feature = "hashmap")]
#[inline]
fn vertex_key(p: &Point2<Real>) -> VertexKey {
    #[inline]
    fn bits(v: Real) -> u64 {
        let v = if v == 0.0 { 0.0 } else { v };
        u64::from(v.to_bits())
    }
    (bits(p.x), bits(p.y))
}

/// Append-only list of unique `(x, y)` vertices.
///
/// Ids are assigned in first-seen order, so a vertex's id is its position in
/// [`VertexRegistry::points`]. Two points are the same vertex only when both
/// coordinates compare equal; there is no tolerance, so callers must build
/// coordinates from the same arithmetic.
#[derive(Debug, Clone, Default)]
pub struct VertexRegistry {
    points: Vec<Point2<Real>>,
    #[cfg(feature = "hashmap")]
    index: HashMap<VertexKey, usize>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VertexRegistry {
            points: Vec::with_capacity(capacity),
            #[cfg(feature = "hashmap")]
            index: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    /// Vertex ids in registration order (`0..len`).
    pub fn ids(&self) -> Vec<usize> {
        (0..self.points.len()).collect()
    }

    pub fn xv(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn yv(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Id of the vertex at exactly `point`, if registered.
    #[cfg(feature = "hashmap")]
    pub fn find(&self, point: &Point2<Real>) -> Option<usize> {
        self.index.get(&vertex_key(point)).copied()
    }

    /// Id of the vertex at exactly `point`, if registered.
    #[cfg(not(feature = "hashmap"))]
    pub fn find(&self, point: &Point2<Real>) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.x == point.x && p.y == point.y)
    }

    /// Id of `point`, registering it with the next id when it is new.
    pub fn insert(&mut self, point: Point2<Real>) -> usize {
        if let Some(id) = self.find(&point) {
            return id;
        }
        let id = self.points.len();
        #[cfg(feature = "hashmap")]
        self.index.insert(vertex_key(&point), id);
        self.points.push(point);
        id
    }

    /// Register every corner of `footprint` not already present.
    pub fn register(mut self, footprint: &Footprint) -> Self {
        for &corner in footprint {
            self.insert(corner);
        }
        self
    }

    /// Resolve the corners of `cell`'s footprint to four distinct vertex ids.
    ///
    /// ## Errors
    /// [`GridError::DegenerateFootprint`] when a corner is not registered or two
    /// corners resolve to the same vertex.
    pub fn resolve(&self, cell: usize, footprint: &Footprint) -> GridResult<[usize; 4]> {
        let mut ids = [0usize; 4];
        for (slot, corner) in ids.iter_mut().zip(footprint) {
            *slot = match self.find(corner) {
                Some(id) => id,
                None => {
                    let resolved = footprint.iter().filter(|c| self.find(c).is_some()).count();
                    return Err(GridError::DegenerateFootprint { cell, resolved });
                },
            };
        }

        let mut sorted = ids;
        sorted.sort_unstable();
        let distinct = 1 + sorted.windows(2).filter(|w| w[0] != w[1]).count();
        if distinct != 4 {
            return Err(GridError::DegenerateFootprint {
                cell,
                resolved: distinct,
            });
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square(x0: Real) -> Footprint {
        [
            Point2::new(x0, 1.0),
            Point2::new(x0 + 1.0, 1.0),
            Point2::new(x0 + 1.0, 0.0),
            Point2::new(x0, 0.0),
        ]
    }

    #[test]
    fn first_registration_takes_ids_zero_to_three() {
        let registry = VertexRegistry::new().register(&unit_square(0.0));
        assert_eq!(registry.ids(), vec![0, 1, 2, 3]);
        assert_eq!(registry.xv(), vec![0.0, 1.0, 1.0, 0.0]);
        assert_eq!(registry.yv(), vec![1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn shared_edge_is_not_duplicated() {
        let registry = VertexRegistry::new()
            .register(&unit_square(0.0))
            .register(&unit_square(1.0));
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.resolve(1, &unit_square(1.0)).unwrap(), [1, 4, 5, 2]);
    }

    #[test]
    fn registering_twice_is_idempotent() {
        let once = VertexRegistry::new().register(&unit_square(0.0));
        let twice = once.clone().register(&unit_square(0.0));
        assert_eq!(once.points(), twice.points());
    }

    #[test]
    fn negative_zero_matches_zero() {
        let mut registry = VertexRegistry::new();
        let a = registry.insert(Point2::new(0.0, 1.0));
        let b = registry.insert(Point2::new(-0.0, 1.0));
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregistered_corner_is_degenerate() {
        let registry = VertexRegistry::new().register(&unit_square(0.0));
        assert_eq!(
            registry.resolve(7, &unit_square(1.0)),
            Err(GridError::DegenerateFootprint {
                cell: 7,
                resolved: 2
            })
        );
    }

    #[test]
    fn collapsed_footprint_is_degenerate() {
        let p = Point2::new(0.0, 0.0);
        let q = Point2::new(1.0, 0.0);
        let footprint = [p, q, q, p];
        let registry = VertexRegistry::new().register(&footprint);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.resolve(0, &footprint),
            Err(GridError::DegenerateFootprint {
                cell: 0,
                resolved: 2
            })
        );
    }
}
