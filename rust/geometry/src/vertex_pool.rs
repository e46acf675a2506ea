// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deduplicated vertex pool
//!
//! Adjacent cells share corners; the pool merges coincident points so the
//! renderer gets one vertex per geometric location. Keys are the three
//! coordinates quantized to 1e-6, hashed as an integer tuple (not formatted
//! strings). Append-only: indices stay stable for one reconstruction pass.

use nalgebra::Point3;
use rustc_hash::FxHashMap;

/// Quantization step for the dedup key
const KEY_SCALE: f64 = 1e6;

#[inline]
fn quantize(v: f64) -> i64 {
    (v * KEY_SCALE).round() as i64
}

/// Append-only pool of unique 3-D points
#[derive(Debug, Default)]
pub struct VertexPool {
    points: Vec<Point3<f64>>,
    index: FxHashMap<[i64; 3], u32>,
}

impl VertexPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a point, or return the index of the existing point whose
    /// coordinates match to 1e-6.
    pub fn insert(&mut self, point: Point3<f64>) -> u32 {
        let key = [quantize(point.x), quantize(point.y), quantize(point.z)];
        match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.points.len() as u32;
                self.points.push(point);
                self.index.insert(key, idx);
                idx
            }
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
    pub fn point(&self, index: u32) -> Point3<f64> {
        self.points[index as usize]
    }

    /// Consume the pool, keeping only the point list
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_reuse() {
        let mut pool = VertexPool::new();
        let a = pool.insert(Point3::new(1.0, 2.0, 3.0));
        let b = pool.insert(Point3::new(4.0, 5.0, 6.0));
        let c = pool.insert(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(c, a);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_merge_within_tolerance() {
        let mut pool = VertexPool::new();
        let a = pool.insert(Point3::new(1.0, 0.0, 0.0));
        // 4e-7 apart: quantizes to the same 1e-6 bucket
        let b = pool.insert(Point3::new(1.0 + 4e-7, 0.0, 0.0));
        assert_eq!(a, b);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_distinct_beyond_tolerance() {
        let mut pool = VertexPool::new();
        let a = pool.insert(Point3::new(1.0, 0.0, 0.0));
        let b = pool.insert(Point3::new(1.00001, 0.0, 0.0));
        assert_ne!(a, b);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut pool = VertexPool::new();
        let a = pool.insert(Point3::new(-1.5, -2.5, -3.5));
        let b = pool.insert(Point3::new(-1.5, -2.5, -3.5));
        assert_eq!(a, b);
        assert_eq!(pool.point(a), Point3::new(-1.5, -2.5, -3.5));
    }

    #[test]
    fn test_first_point_wins() {
        let mut pool = VertexPool::new();
        pool.insert(Point3::new(2.0, 0.0, 0.0));
        pool.insert(Point3::new(2.0 + 3e-7, 0.0, 0.0));
        // The stored coordinates are those of the first occurrence
        assert_eq!(pool.point(0).x, 2.0);
    }
}
