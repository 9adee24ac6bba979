//! Ring search for periodic frameworks such as zeolites.
//!
//! Finds the rings of requested sizes that pass through a seed atom: the
//! framework is replicated and centered on the seed, candidate paths are
//! enumerated on its bond graph, and duplicates, secondary rings and
//! geometric outliers are filtered away. The result is the supercell reduced
//! to the atoms of the surviving rings.
//!
//! # Example
//!
//! ```
//! use zeoring_rings::RingFinder;
//! use zeoring_struct::{Framework, Lattice, Point3D};
//!
//! // primitive cubic silica: Si at the corner, O on each Si-Si edge
//! let edge = 3.1;
//! let mut cell = Framework::new("CUB", Lattice::orthorhombic(edge, edge, edge).unwrap());
//! cell.push("Si", Point3D::new(0.0, 0.0, 0.0));
//! cell.push("O", Point3D::new(edge / 2.0, 0.0, 0.0));
//! cell.push("O", Point3D::new(0.0, edge / 2.0, 0.0));
//! cell.push("O", Point3D::new(0.0, 0.0, edge / 2.0));
//!
//! let result = RingFinder::default().search(&cell, 0, &[8]).unwrap();
//! assert_eq!(result.ring_count(), 4);
//! assert_eq!(result.framework.atom_count(), 23);
//! ```

pub mod dedup;
pub mod geometric;
pub mod graph;
pub mod paths;
pub mod prune;
pub mod search;
pub mod secondary;

pub use dedup::dedup;
pub use geometric::{has_sharp_ttt_angle, remove_geometric_outliers};
pub use graph::{repeat_factor, repeat_factors, FrameworkGraph, GraphBuilder, ReplicatedGraph};
pub use paths::{enumerate_paths, ring_partner, simple_paths, Path};
pub use prune::{prune, ring_atoms};
pub use search::{find_rings, RingFinder, RingSearchConfig, RingSearchResult};
pub use secondary::{remove_secondary, secondary_demerits};
