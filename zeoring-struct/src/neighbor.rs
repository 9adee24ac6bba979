//! Bond connectivity from covalent-radius cutoffs.
//!
//! Two atoms are bonded when their minimum-image distance is below the sum of
//! their cutoff radii, where each radius is the covalent radius scaled by a
//! multiplicative slack and then widened by a fixed skin.

use zeoring_core::{Result, Summarizable, ZeoringError};

use crate::element::element_by_symbol;
use crate::types::Framework;

/// A symmetric boolean bond matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectivityMatrix {
    /// Number of atoms (matrix is size × size).
    pub size: usize,
    /// Row-major n×n bond flags.
    pub bonded: Vec<bool>,
}

impl ConnectivityMatrix {
    /// An n×n matrix with no bonds.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            bonded: vec![false; size * size],
        }
    }

    /// Build a matrix from undirected bond pairs, setting both directions.
    pub fn from_bonds(size: usize, bonds: &[(usize, usize)]) -> Result<Self> {
        let mut matrix = Self::new(size);
        for &(i, j) in bonds {
            if i >= size || j >= size {
                return Err(ZeoringError::Connectivity(format!(
                    "bond ({}, {}) outside a {}-atom matrix",
                    i, j, size
                )));
            }
            matrix.set(i, j, true);
            matrix.set(j, i, true);
        }
        Ok(matrix)
    }

    /// Whether atoms i and j are bonded.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.bonded[i * self.size + j]
    }

    /// Set a single (directed) entry.
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        self.bonded[i * self.size + j] = value;
    }

    /// Number of undirected bonds (upper triangle, diagonal excluded).
    pub fn bond_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Bonded partners of atom i in ascending index order.
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        (0..self.size).filter(|&j| self.get(i, j)).collect()
    }

    /// Check the matrix contract: square storage, no self bonds, symmetric.
    pub fn validate(&self) -> Result<()> {
        if self.bonded.len() != self.size * self.size {
            return Err(ZeoringError::Connectivity(format!(
                "{} entries for a {}x{} matrix",
                self.bonded.len(),
                self.size,
                self.size
            )));
        }
        for i in 0..self.size {
            if self.get(i, i) {
                return Err(ZeoringError::Connectivity(format!(
                    "atom {} is bonded to itself",
                    i
                )));
            }
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return Err(ZeoringError::Connectivity(format!(
                        "matrix is not symmetric at ({}, {})",
                        i, j
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Summarizable for ConnectivityMatrix {
    fn summary(&self) -> String {
        format!(
            "ConnectivityMatrix: {} atoms, {} bonds",
            self.size,
            self.bond_count()
        )
    }
}

/// Source of bond connectivity for a framework.
pub trait ConnectivityProvider {
    /// Bond matrix over all atoms of `framework`.
    fn connectivity(&self, framework: &Framework) -> Result<ConnectivityMatrix>;
}

/// A precomputed matrix serves as its own provider; it must match the atom
/// count of the framework it is asked about.
impl ConnectivityProvider for ConnectivityMatrix {
    fn connectivity(&self, framework: &Framework) -> Result<ConnectivityMatrix> {
        if self.size != framework.atom_count() {
            return Err(ZeoringError::Connectivity(format!(
                "matrix covers {} atoms, framework has {}",
                self.size,
                framework.atom_count()
            )));
        }
        Ok(self.clone())
    }
}

/// Default multiplicative slack applied to covalent radii.
pub const DEFAULT_CUTOFF_MULT: f64 = 1.05;

/// Default skin (Å) added to every cutoff radius.
pub const DEFAULT_SKIN: f64 = 0.3;

/// Per-atom cutoff radii: covalent radius × `mult`.
pub fn natural_cutoffs(framework: &Framework, mult: f64) -> Result<Vec<f64>> {
    framework
        .atoms
        .iter()
        .map(|atom| {
            element_by_symbol(&atom.element)
                .map(|e| e.covalent_radius * mult)
                .ok_or_else(|| {
                    ZeoringError::InvalidInput(format!("unknown element '{}'", atom.element))
                })
        })
        .collect()
}

/// Cutoff-based neighbor search over periodic images.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborList {
    /// Multiplicative slack on covalent radii.
    pub cutoff_mult: f64,
    /// Distance (Å) added to each cutoff radius, so a pair gains `2 * skin`.
    pub skin: f64,
}

impl Default for NeighborList {
    fn default() -> Self {
        NeighborList {
            cutoff_mult: DEFAULT_CUTOFF_MULT,
            skin: DEFAULT_SKIN,
        }
    }
}

impl NeighborList {
    /// Neighbor list with the given cutoff slack and the default skin.
    pub fn new(cutoff_mult: f64) -> Self {
        NeighborList {
            cutoff_mult,
            skin: DEFAULT_SKIN,
        }
    }

    /// Replace the skin.
    pub fn with_skin(mut self, skin: f64) -> Self {
        self.skin = skin;
        self
    }
}

impl ConnectivityProvider for NeighborList {
    fn connectivity(&self, framework: &Framework) -> Result<ConnectivityMatrix> {
        if self.cutoff_mult.is_nan() || self.cutoff_mult <= 0.0 {
            return Err(ZeoringError::InvalidInput(format!(
                "cutoff multiplier must be positive, got {}",
                self.cutoff_mult
            )));
        }
        if self.skin.is_nan() || self.skin < 0.0 {
            return Err(ZeoringError::InvalidInput(format!(
                "skin must not be negative, got {}",
                self.skin
            )));
        }
        let cutoffs = natural_cutoffs(framework, self.cutoff_mult)?;
        let positions = framework.positions();
        let n = positions.len();
        let lattice = &framework.lattice;
        let pbc = framework.pbc;

        let bonded_row = |i: usize| -> Vec<usize> {
            ((i + 1)..n)
                .filter(|&j| {
                    let d = lattice.minimum_image(&positions[j].sub(&positions[i]), pbc);
                    d.norm() < cutoffs[i] + cutoffs[j] + 2.0 * self.skin
                })
                .collect()
        };

        #[cfg(feature = "parallel")]
        let upper: Vec<Vec<usize>> = {
            use rayon::prelude::*;
            (0..n).into_par_iter().map(bonded_row).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let upper: Vec<Vec<usize>> = (0..n).map(bonded_row).collect();

        let mut matrix = ConnectivityMatrix::new(n);
        for (i, row) in upper.into_iter().enumerate() {
            for j in row {
                matrix.set(i, j, true);
                matrix.set(j, i, true);
            }
        }
        log::debug!(
            "neighbor list for {}: {} atoms, {} bonds (cutoff x{}, skin {})",
            framework.name,
            n,
            matrix.bond_count(),
            self.cutoff_mult,
            self.skin
        );
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Lattice;
    use crate::types::Point3D;

    /// Si-O-Si bridge across the periodic boundary plus a distant oxygen.
    fn make_bridge() -> Framework {
        let mut fw = Framework::new("TST", Lattice::orthorhombic(10.0, 10.0, 10.0).unwrap());
        fw.push("Si", Point3D::new(9.2, 5.0, 5.0));
        fw.push("O", Point3D::new(0.8, 5.0, 5.0));
        fw.push("Si", Point3D::new(2.4, 5.0, 5.0));
        fw.push("O", Point3D::new(5.0, 1.0, 1.0));
        fw
    }

    #[test]
    fn cutoffs_from_covalent_radii() {
        let fw = make_bridge();
        let cutoffs = natural_cutoffs(&fw, 1.05).unwrap();
        assert!((cutoffs[0] - 1.11 * 1.05).abs() < 1e-10);
        assert!((cutoffs[1] - 0.66 * 1.05).abs() < 1e-10);
    }

    #[test]
    fn unknown_element_is_rejected() {
        let mut fw = make_bridge();
        fw.push("Xx", Point3D::zero());
        assert!(natural_cutoffs(&fw, 1.05).is_err());
    }

    #[test]
    fn bonds_across_boundary() {
        let fw = make_bridge();
        let m = NeighborList::default().connectivity(&fw).unwrap();
        assert!(m.get(0, 1) && m.get(1, 0));
        assert!(m.get(1, 2) && m.get(2, 1));
        // Si...Si at 3.2 Å is not a bond
        assert!(!m.get(0, 2));
        assert!(m.neighbors(3).is_empty());
        assert_eq!(m.bond_count(), 2);
        m.validate().unwrap();
    }

    #[test]
    fn non_periodic_axis_breaks_bond() {
        let fw = make_bridge().with_pbc([false, true, true]);
        let m = NeighborList::default().connectivity(&fw).unwrap();
        assert!(!m.get(0, 1));
        assert!(m.get(1, 2));
    }

    #[test]
    fn tight_cutoff_has_no_bonds() {
        let fw = make_bridge();
        let m = NeighborList::new(0.5).connectivity(&fw).unwrap();
        assert_eq!(m.bond_count(), 0);
        assert!(NeighborList::new(0.0).connectivity(&fw).is_err());
        assert!(NeighborList::new(f64::NAN).connectivity(&fw).is_err());
        assert!(NeighborList::default()
            .with_skin(-0.1)
            .connectivity(&fw)
            .is_err());
    }

    /// Two atoms `d` Å apart along x in a large cell.
    fn pair(first: &str, second: &str, d: f64) -> Framework {
        let mut fw = Framework::new("PAIR", Lattice::orthorhombic(20.0, 20.0, 20.0).unwrap());
        fw.push(first, Point3D::new(5.0, 5.0, 5.0));
        fw.push(second, Point3D::new(5.0 + d, 5.0, 5.0));
        fw
    }

    #[test]
    fn skin_widens_every_cutoff() {
        // Si-O cutoff: (1.11 + 0.66) * 1.05 + 2 * 0.3 = 2.4585 Å
        let stretched = pair("Si", "O", 2.0);
        assert!(NeighborList::default().connectivity(&stretched).unwrap().get(0, 1));
        let bare = NeighborList::default().with_skin(0.0);
        assert!(!bare.connectivity(&stretched).unwrap().get(0, 1));
        assert!(!NeighborList::default()
            .connectivity(&pair("Si", "O", 2.5))
            .unwrap()
            .get(0, 1));

        // Na-O cutoff: (1.66 + 0.66) * 1.05 + 0.6 = 3.036 Å
        let cation = pair("Na", "O", 2.8);
        assert!(NeighborList::default().connectivity(&cation).unwrap().get(1, 0));
        assert!(!bare.connectivity(&cation).unwrap().get(1, 0));
    }

    #[test]
    fn heavy_cations_have_cutoffs() {
        let fw = pair("Cs", "O", 3.5);
        let cutoffs = natural_cutoffs(&fw, 1.05).unwrap();
        assert!((cutoffs[0] - 2.44 * 1.05).abs() < 1e-10);
        assert!(NeighborList::default().connectivity(&fw).unwrap().get(0, 1));
    }

    #[test]
    fn validate_rejects_malformed() {
        let mut m = ConnectivityMatrix::new(3);
        m.set(0, 1, true);
        assert!(m.validate().is_err());
        m.set(1, 0, true);
        m.validate().unwrap();
        m.set(2, 2, true);
        assert!(m.validate().is_err());
        let short = ConnectivityMatrix {
            size: 3,
            bonded: vec![false; 4],
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn from_bonds_and_provider() {
        let m = ConnectivityMatrix::from_bonds(4, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(m.neighbors(1), vec![0, 2]);
        assert!(ConnectivityMatrix::from_bonds(2, &[(0, 5)]).is_err());
        let fw = make_bridge();
        assert_eq!(m.connectivity(&fw).unwrap(), m);
        let wrong = ConnectivityMatrix::new(2);
        assert!(wrong.connectivity(&fw).is_err());
        assert!(m.summary().contains("2 bonds"));
    }
}
