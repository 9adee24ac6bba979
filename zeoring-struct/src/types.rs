//! Core types for periodic framework representation.

use zeoring_core::hash::sha256;
use zeoring_core::{Annotated, ContentAddressable, Result, Summarizable, ZeoringError};

use crate::element::element_by_symbol;
use crate::geometry::{angle_vectors, weighted_center};
use crate::lattice::Lattice;

/// A point in 3D Cartesian space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Dot product.
    pub fn dot(&self, other: &Point3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Vector magnitude.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or zero if magnitude is zero.
    pub fn normalize(&self) -> Point3D {
        let n = self.norm();
        if n < 1e-15 {
            Point3D::zero()
        } else {
            Point3D {
                x: self.x / n,
                y: self.y / n,
                z: self.z / n,
            }
        }
    }

    /// Vector addition.
    pub fn add(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Vector subtraction.
    pub fn sub(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Components as `[x, y, z]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Point from `[x, y, z]`.
    pub fn from_array(v: [f64; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    /// Scalar multiplication.
    pub fn scale(&self, s: f64) -> Point3D {
        Point3D {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

/// A single atom of a periodic framework.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameworkAtom {
    /// Element symbol (e.g. "Si", "O").
    pub element: String,
    /// Cartesian coordinates in Angstroms.
    pub coords: Point3D,
    /// Index of the unit-cell atom this atom was copied from.
    pub origin: usize,
}

impl FrameworkAtom {
    /// Atomic mass, or 1.0 for symbols missing from the element table.
    pub fn mass(&self) -> f64 {
        element_by_symbol(&self.element)
            .map(|e| e.atomic_weight)
            .unwrap_or(1.0)
    }
}

/// A periodic framework: atoms inside a lattice with per-axis periodicity.
///
/// Atom indices are positions in [`Framework::atoms`]; they stay stable until
/// atoms are deleted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Framework {
    /// Framework code or user-supplied name.
    pub name: String,
    /// The periodic cell.
    pub lattice: Lattice,
    /// Periodic boundary flags along `a`, `b`, `c`.
    pub pbc: [bool; 3],
    /// Atoms in index order.
    pub atoms: Vec<FrameworkAtom>,
}

impl Framework {
    /// Create an empty, fully periodic framework.
    pub fn new(name: impl Into<String>, lattice: Lattice) -> Self {
        Self {
            name: name.into(),
            lattice,
            pbc: [true; 3],
            atoms: Vec::new(),
        }
    }

    /// Replace the periodic boundary flags.
    pub fn with_pbc(mut self, pbc: [bool; 3]) -> Self {
        self.pbc = pbc;
        self
    }

    /// Append an atom, returning its index. The atom is its own origin.
    pub fn push(&mut self, element: &str, coords: Point3D) -> usize {
        let index = self.atoms.len();
        self.atoms.push(FrameworkAtom {
            element: element.into(),
            coords,
            origin: index,
        });
        index
    }

    /// Number of atoms.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the framework has no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Atom at `index`, or a geometry error if out of range.
    pub fn get(&self, index: usize) -> Result<&FrameworkAtom> {
        self.atoms.get(index).ok_or_else(|| {
            ZeoringError::Geometry(format!(
                "atom index {} out of range ({} atoms)",
                index,
                self.atoms.len()
            ))
        })
    }

    /// Cartesian positions in index order.
    pub fn positions(&self) -> Vec<Point3D> {
        self.atoms.iter().map(|a| a.coords).collect()
    }

    /// Tile the framework `factors[0] x factors[1] x factors[2]` times.
    ///
    /// Images are laid out with the `a` offset outermost and the `c` offset
    /// innermost; each image holds a full copy of the atoms in order, so the
    /// first `atom_count()` atoms of the result are the original ones.
    pub fn repeat(&self, factors: [usize; 3]) -> Result<Framework> {
        if factors.contains(&0) {
            return Err(ZeoringError::InvalidInput(format!(
                "repeat factors must be positive, got {:?}",
                factors
            )));
        }
        let [a, b, c] = self.lattice.vectors();
        let mut atoms = Vec::with_capacity(self.atoms.len() * factors.iter().product::<usize>());
        for i in 0..factors[0] {
            for j in 0..factors[1] {
                for k in 0..factors[2] {
                    let shift = a
                        .scale(i as f64)
                        .add(&b.scale(j as f64))
                        .add(&c.scale(k as f64));
                    atoms.extend(self.atoms.iter().map(|atom| FrameworkAtom {
                        element: atom.element.clone(),
                        coords: atom.coords.add(&shift),
                        origin: atom.origin,
                    }));
                }
            }
        }
        Ok(Framework {
            name: self.name.clone(),
            lattice: self.lattice.scaled(factors)?,
            pbc: self.pbc,
            atoms,
        })
    }

    /// Shift every atom by `v`.
    pub fn translate(&mut self, v: &Point3D) {
        for atom in &mut self.atoms {
            atom.coords = atom.coords.add(v);
        }
    }

    /// Wrap every atom back into the cell along the periodic axes.
    pub fn wrap(&mut self) {
        for atom in &mut self.atoms {
            atom.coords = self.lattice.wrap(&atom.coords, self.pbc);
        }
    }

    /// Remove the atoms at the given indices. Out-of-range indices are ignored
    /// and the remaining atoms keep their relative order.
    pub fn delete_atoms(&mut self, indices: &[usize]) {
        let mut remove = vec![false; self.atoms.len()];
        for &i in indices {
            if let Some(flag) = remove.get_mut(i) {
                *flag = true;
            }
        }
        let mut index = 0;
        self.atoms.retain(|_| {
            let keep = !remove[index];
            index += 1;
            keep
        });
    }

    /// Mass-weighted center of all atoms.
    pub fn center_of_mass(&self) -> Point3D {
        let weighted: Vec<(Point3D, f64)> =
            self.atoms.iter().map(|a| (a.coords, a.mass())).collect();
        weighted_center(&weighted)
    }

    /// Minimum-image distance between atoms `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> Result<f64> {
        let d = self.get(j)?.coords.sub(&self.get(i)?.coords);
        Ok(self.lattice.minimum_image(&d, self.pbc).norm())
    }

    /// Angle in degrees at atom `j` between `i` and `k`, using minimum images.
    pub fn angle(&self, i: usize, j: usize, k: usize) -> Result<f64> {
        let center = self.get(j)?.coords;
        let v1 = self.get(i)?.coords.sub(&center);
        let v2 = self.get(k)?.coords.sub(&center);
        Ok(angle_vectors(
            &self.lattice.minimum_image(&v1, self.pbc),
            &self.lattice.minimum_image(&v2, self.pbc),
        ))
    }
}

impl Annotated for Framework {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Summarizable for Framework {
    fn summary(&self) -> String {
        let [a, b, c] = self.lattice.lengths();
        format!(
            "Framework {}: {} atom(s), cell {:.2} x {:.2} x {:.2} Å",
            self.name,
            self.atom_count(),
            a,
            b,
            c,
        )
    }
}

impl ContentAddressable for Framework {
    fn content_hash(&self) -> String {
        let mut bytes = Vec::with_capacity(64 + self.atoms.len() * 28);
        bytes.extend_from_slice(self.name.as_bytes());
        for v in self.lattice.vectors() {
            for x in v.to_array() {
                bytes.extend_from_slice(&x.to_le_bytes());
            }
        }
        bytes.extend(self.pbc.map(u8::from));
        for atom in &self.atoms {
            bytes.extend_from_slice(atom.element.as_bytes());
            for x in atom.coords.to_array() {
                bytes.extend_from_slice(&x.to_le_bytes());
            }
        }
        sha256(&bytes)
    }
}
