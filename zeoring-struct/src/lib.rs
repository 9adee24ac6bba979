//! Periodic framework structures for the zeoring ring-search crates.
//!
//! - **Lattice**: cell vectors, fractional coordinates, wrapping, minimum image in [`lattice`]
//! - **Frameworks**: atoms in a periodic cell, repetition into supercells in [`types`]
//! - **Coordinate geometry**: distances, angles, centers of mass in [`geometry`]
//! - **Element data**: atomic weights and covalent radii in [`element`]
//! - **Connectivity**: covalent-cutoff neighbor lists in [`neighbor`]
//!
//! # Quick start
//!
//! ```
//! use zeoring_struct::{ConnectivityProvider, Framework, Lattice, NeighborList, Point3D};
//!
//! let mut fw = Framework::new("SOD", Lattice::orthorhombic(10.0, 10.0, 10.0).unwrap());
//! fw.push("Si", Point3D::new(1.0, 1.0, 1.0));
//! fw.push("O", Point3D::new(2.6, 1.0, 1.0));
//!
//! let bonds = NeighborList::default().connectivity(&fw).unwrap();
//! assert!(bonds.get(0, 1));
//! ```

pub mod element;
pub mod geometry;
pub mod lattice;
mod linalg;
pub mod neighbor;
pub mod types;

pub use element::{element_by_number, element_by_symbol, Element};
pub use geometry::{
    angle_points, angle_vectors, center_of_mass_points, distance_points, weighted_center,
    AngleProvider, MinimumImageAngles,
};
pub use lattice::Lattice;
pub use neighbor::{
    natural_cutoffs, ConnectivityMatrix, ConnectivityProvider, NeighborList, DEFAULT_CUTOFF_MULT,
    DEFAULT_SKIN,
};
pub use types::{Framework, FrameworkAtom, Point3D};

#[cfg(test)]
mod tests {
    use super::*;
    use zeoring_core::Summarizable;

    #[test]
    fn integration_supercell_connectivity() {
        // Si-O-Si chain along x that only closes through the periodic boundary
        let mut fw = Framework::new("CHN", Lattice::orthorhombic(3.2, 12.0, 12.0).unwrap());
        fw.push("Si", Point3D::new(0.0, 6.0, 6.0));
        fw.push("O", Point3D::new(1.6, 6.0, 6.0));

        let big = fw.repeat([3, 1, 1]).unwrap();
        assert_eq!(big.atom_count(), 6);
        assert!(big.summary().contains("9.60 x 12.00 x 12.00"));

        let bonds = NeighborList::default().connectivity(&big).unwrap();
        assert_eq!(bonds.bond_count(), 6);
        for i in 0..6 {
            assert_eq!(bonds.neighbors(i).len(), 2);
        }
        let angle = MinimumImageAngles.angle(&big, 1, 2, 3).unwrap();
        assert!((angle - 180.0).abs() < 1e-9);
    }
}
