//! Coordinate geometry: distances, angles, centers, and the angle provider
//! used by ring filters.

use zeoring_core::Result;

use crate::types::{Framework, Point3D};

/// Euclidean distance between two points.
pub fn distance_points(p1: &Point3D, p2: &Point3D) -> f64 {
    p1.distance_to(p2)
}

/// Angle in degrees between two vectors.
pub fn angle_vectors(v1: &Point3D, v2: &Point3D) -> f64 {
    let cos_angle = v1.dot(v2) / (v1.norm() * v2.norm());
    // Clamp for numerical safety
    cos_angle.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Bond angle in degrees at the central point `p2`.
pub fn angle_points(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> f64 {
    angle_vectors(&p1.sub(p2), &p3.sub(p2))
}

/// Geometric center (unweighted) of a slice of points.
pub fn center_of_mass_points(points: &[Point3D]) -> Point3D {
    if points.is_empty() {
        return Point3D::zero();
    }
    let mut sum = Point3D::zero();
    for p in points {
        sum = sum.add(p);
    }
    sum.scale(1.0 / points.len() as f64)
}

/// Weighted center of `(point, weight)` pairs.
///
/// Falls back to the unweighted center when the weights sum to zero.
pub fn weighted_center(points: &[(Point3D, f64)]) -> Point3D {
    let total: f64 = points.iter().map(|(_, w)| w).sum();
    if total.abs() < 1e-15 {
        let plain: Vec<Point3D> = points.iter().map(|(p, _)| *p).collect();
        return center_of_mass_points(&plain);
    }
    let mut sum = Point3D::zero();
    for (p, w) in points {
        sum = sum.add(&p.scale(*w));
    }
    sum.scale(1.0 / total)
}

/// Source of bond angles between framework atoms.
pub trait AngleProvider {
    /// Angle in degrees at atom `j` formed with atoms `i` and `k`.
    fn angle(&self, framework: &Framework, i: usize, j: usize, k: usize) -> Result<f64>;
}

/// Angles from atom coordinates under the minimum-image convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumImageAngles;

impl AngleProvider for MinimumImageAngles {
    fn angle(&self, framework: &Framework, i: usize, j: usize, k: usize) -> Result<f64> {
        framework.angle(i, j, k)
    }
}
