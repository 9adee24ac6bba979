//! Geometric rejection of random-walk paths.
//!
//! In a real ring of more than 16 atoms, every T-T-T angle (three framework
//! T atoms two bonds apart) is wide. A path with a sharp T-T-T kink is a walk
//! through the framework rather than a ring.

use zeoring_core::Result;
use zeoring_struct::{AngleProvider, Framework};

use crate::paths::Path;

/// Rings up to this many atoms are never checked.
pub const MAX_UNCHECKED_RING_SIZE: usize = 16;

/// Smallest T-T-T angle (degrees, after rounding) a large ring may contain.
pub const MIN_TTT_ANGLE: f64 = 100.0;

/// Atoms appended from the start of the ring so angles across the closure are
/// checked too.
const CLOSURE_OVERLAP: usize = 4;

/// Whether `path` contains a T-T-T angle below [`MIN_TTT_ANGLE`].
///
/// Angles are taken at every other atom starting from the fourth, each
/// between the atoms two positions before and after it, walking around the
/// ring closure.
pub fn has_sharp_ttt_angle<A: AngleProvider + ?Sized>(
    framework: &Framework,
    path: &Path,
    angles: &A,
) -> Result<bool> {
    let mut extended = path.clone();
    extended.extend(path.iter().take(CLOSURE_OVERLAP));

    let mut i = 1;
    while i + 4 < extended.len() {
        let angle = angles
            .angle(framework, extended[i], extended[i + 2], extended[i + 4])?
            .round();
        if angle < MIN_TTT_ANGLE {
            log::trace!(
                "T-T-T angle {} at atom {} in {}-atom path",
                angle,
                extended[i + 2],
                path.len()
            );
            return Ok(true);
        }
        i += 2;
    }
    Ok(false)
}

/// Drop rings of more than 16 atoms that contain a sharp T-T-T angle.
pub fn remove_geometric_outliers<A: AngleProvider + ?Sized>(
    framework: &Framework,
    paths: Vec<Path>,
    angles: &A,
) -> Result<Vec<Path>> {
    let before = paths.len();
    let mut kept = Vec::with_capacity(paths.len());
    for path in paths {
        if path.len() > MAX_UNCHECKED_RING_SIZE && has_sharp_ttt_angle(framework, &path, angles)? {
            continue;
        }
        kept.push(path);
    }
    log::debug!("geometric filter: {} -> {} paths", before, kept.len());
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use zeoring_core::ZeoringError;
    use zeoring_struct::{Lattice, MinimumImageAngles, Point3D};

    /// Angle at each central atom; unlisted centers are 150 degrees.
    struct AnglesAt(HashMap<usize, f64>);

    impl AngleProvider for AnglesAt {
        fn angle(&self, _: &Framework, _: usize, j: usize, _: usize) -> Result<f64> {
            Ok(*self.0.get(&j).unwrap_or(&150.0))
        }
    }

    fn sharp_at(center: usize, angle: f64) -> AnglesAt {
        AnglesAt(HashMap::from([(center, angle)]))
    }

    fn empty() -> Framework {
        Framework::new("TST", Lattice::orthorhombic(30.0, 30.0, 30.0).unwrap())
    }

    fn ring(size: usize) -> Path {
        (0..size).collect()
    }

    #[test]
    fn sharp_angle_discards_large_ring() {
        let fw = empty();
        let kept = remove_geometric_outliers(&fw, vec![ring(18)], &sharp_at(5, 95.0)).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn closure_angle_is_checked() {
        // the last triple wraps around to center on path[1]
        let fw = empty();
        assert!(has_sharp_ttt_angle(&fw, &ring(18), &sharp_at(1, 90.0)).unwrap());
    }

    #[test]
    fn even_positions_are_not_centers() {
        let fw = empty();
        assert!(!has_sharp_ttt_angle(&fw, &ring(18), &sharp_at(4, 60.0)).unwrap());
        assert!(!has_sharp_ttt_angle(&fw, &ring(18), &sharp_at(0, 60.0)).unwrap());
    }

    #[test]
    fn small_rings_bypass_filter() {
        let fw = empty();
        let paths = vec![ring(16), ring(8)];
        let kept = remove_geometric_outliers(&fw, paths.clone(), &sharp_at(3, 45.0)).unwrap();
        assert_eq!(kept, paths);
    }

    #[test]
    fn angle_is_rounded_before_comparison() {
        let fw = empty();
        assert!(has_sharp_ttt_angle(&fw, &ring(20), &sharp_at(7, 99.4)).unwrap());
        assert!(!has_sharp_ttt_angle(&fw, &ring(20), &sharp_at(7, 99.5)).unwrap());
        assert!(!has_sharp_ttt_angle(&fw, &ring(20), &sharp_at(7, 100.0)).unwrap());
    }

    #[test]
    fn keeps_wide_rings_in_order() {
        let fw = empty();
        let paths = vec![ring(18), ring(6), ring(24)];
        let kept = remove_geometric_outliers(&fw, paths.clone(), &sharp_at(999, 10.0)).unwrap();
        assert_eq!(kept, paths);
    }

    #[test]
    fn provider_errors_propagate() {
        // 18 indices into a framework with no atoms
        let fw = empty();
        let result = remove_geometric_outliers(&fw, vec![ring(18)], &MinimumImageAngles);
        assert!(matches!(result, Err(ZeoringError::Geometry(_))));
    }

    #[test]
    fn real_coordinates() {
        // 18 atoms on a circle: angles between every second neighbor are wide
        let mut fw = empty();
        for k in 0..18 {
            let t = (k as f64 * 20.0).to_radians();
            fw.push("Si", Point3D::new(15.0 + 6.0 * t.cos(), 15.0 + 6.0 * t.sin(), 15.0));
        }
        assert!(!has_sharp_ttt_angle(&fw, &ring(18), &MinimumImageAngles).unwrap());
        // fold atom 7 back toward atom 3
        fw.atoms[7].coords = fw.atoms[3].coords.add(&Point3D::new(0.0, 0.0, 1.0));
        assert!(has_sharp_ttt_angle(&fw, &ring(18), &MinimumImageAngles).unwrap());
    }
}
