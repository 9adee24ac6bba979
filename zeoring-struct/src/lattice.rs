//! Periodic cells: lattice vectors, fractional coordinates, wrapping and
//! minimum-image displacements.

use zeoring_core::{Result, ZeoringError};

use crate::linalg::Matrix3x3;
use crate::types::Point3D;

/// Three lattice vectors `a`, `b`, `c` spanning a periodic cell.
///
/// The Cartesian/fractional transforms are computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[Point3D; 3]", into = "[Point3D; 3]")
)]
pub struct Lattice {
    vectors: [Point3D; 3],
    /// Columns are the cell vectors.
    to_cart: Matrix3x3,
    to_frac: Matrix3x3,
}

impl Lattice {
    /// Create a lattice from three cell vectors.
    ///
    /// Fails if the vectors are (nearly) coplanar.
    pub fn new(a: Point3D, b: Point3D, c: Point3D) -> Result<Self> {
        let vectors = [a, b, c];
        let volume = a.dot(&b.cross(&c)).abs();
        let to_cart = Matrix3x3::from_rows(&vectors).transpose();
        match to_cart.inverse() {
            Some(to_frac) if volume >= 1e-8 => Ok(Lattice {
                vectors,
                to_cart,
                to_frac,
            }),
            _ => Err(ZeoringError::Geometry(format!(
                "degenerate cell, volume {:.3e}",
                volume
            ))),
        }
    }

    /// Rectangular cell with edge lengths `a`, `b`, `c`.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::new(
            Point3D::new(a, 0.0, 0.0),
            Point3D::new(0.0, b, 0.0),
            Point3D::new(0.0, 0.0, c),
        )
    }

    /// Cell from lengths (Å) and angles alpha, beta, gamma (degrees).
    ///
    /// `a` lies along x and `b` in the xy plane.
    pub fn from_parameters(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self> {
        let (cos_a, cos_b) = (alpha.to_radians().cos(), beta.to_radians().cos());
        let (cos_g, sin_g) = (gamma.to_radians().cos(), gamma.to_radians().sin());
        if sin_g.abs() < 1e-10 {
            return Err(ZeoringError::Geometry(format!(
                "gamma of {} degrees gives a flat cell",
                gamma
            )));
        }
        let cy = (cos_a - cos_b * cos_g) / sin_g;
        let cz_sq = 1.0 - cos_b * cos_b - cy * cy;
        if cz_sq <= 0.0 {
            return Err(ZeoringError::Geometry(format!(
                "cell angles ({}, {}, {}) are inconsistent",
                alpha, beta, gamma
            )));
        }
        Self::new(
            Point3D::new(a, 0.0, 0.0),
            Point3D::new(b * cos_g, b * sin_g, 0.0),
            Point3D::new(c * cos_b, c * cy, c * cz_sq.sqrt()),
        )
    }

    /// The cell vectors `a`, `b`, `c`.
    pub fn vectors(&self) -> &[Point3D; 3] {
        &self.vectors
    }

    /// Lengths of the three cell vectors.
    pub fn lengths(&self) -> [f64; 3] {
        [
            self.vectors[0].norm(),
            self.vectors[1].norm(),
            self.vectors[2].norm(),
        ]
    }

    /// Cell angles (alpha, beta, gamma) in degrees.
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = &self.vectors;
        let between = |u: &Point3D, v: &Point3D| {
            (u.dot(v) / (u.norm() * v.norm()))
                .clamp(-1.0, 1.0)
                .acos()
                .to_degrees()
        };
        [between(b, c), between(a, c), between(a, b)]
    }

    /// Cell volume in Å³.
    pub fn volume(&self) -> f64 {
        let [a, b, c] = &self.vectors;
        a.dot(&b.cross(c)).abs()
    }

    /// The supercell lattice obtained by repeating along each vector.
    ///
    /// A zero factor gives a degenerate cell and fails.
    pub fn scaled(&self, factors: [usize; 3]) -> Result<Lattice> {
        let [a, b, c] = &self.vectors;
        Lattice::new(
            a.scale(factors[0] as f64),
            b.scale(factors[1] as f64),
            c.scale(factors[2] as f64),
        )
    }

    /// Fractional coordinates to Cartesian: `f0*a + f1*b + f2*c`.
    pub fn to_cartesian(&self, frac: &Point3D) -> Point3D {
        self.to_cart.apply(frac)
    }

    /// Cartesian coordinates to fractional.
    pub fn to_fractional(&self, p: &Point3D) -> Point3D {
        self.to_frac.apply(p)
    }

    /// Wrap a position into the cell along the periodic axes.
    pub fn wrap(&self, p: &Point3D, pbc: [bool; 3]) -> Point3D {
        let mut frac = self.to_fractional(p).to_array();
        for axis in 0..3 {
            if pbc[axis] {
                let mut f = frac[axis] - frac[axis].floor();
                // -1e-17 floors to -1 and lands on exactly 1.0
                if f >= 1.0 {
                    f = 0.0;
                }
                frac[axis] = f;
            }
        }
        self.to_cartesian(&Point3D::from_array(frac))
    }

    /// Shortest periodic image of the displacement `d`.
    ///
    /// Rounds in fractional space, then checks the 26 surrounding images so
    /// that skewed cells still give the true minimum.
    pub fn minimum_image(&self, d: &Point3D, pbc: [bool; 3]) -> Point3D {
        let mut frac = self.to_fractional(d).to_array();
        for axis in 0..3 {
            if pbc[axis] {
                frac[axis] -= frac[axis].round();
            }
        }
        let base = self.to_cartesian(&Point3D::from_array(frac));

        let range = |axis: usize| if pbc[axis] { -1i32..=1 } else { 0..=0 };
        let mut best = base;
        let mut best_norm = base.norm();
        for i in range(0) {
            for j in range(1) {
                for k in range(2) {
                    if i == 0 && j == 0 && k == 0 {
                        continue;
                    }
                    let shift = self.to_cartesian(&Point3D::new(i as f64, j as f64, k as f64));
                    let candidate = base.add(&shift);
                    let norm = candidate.norm();
                    if norm < best_norm {
                        best = candidate;
                        best_norm = norm;
                    }
                }
            }
        }
        best
    }
}

impl TryFrom<[Point3D; 3]> for Lattice {
    type Error = ZeoringError;

    fn try_from(vectors: [Point3D; 3]) -> Result<Self> {
        let [a, b, c] = vectors;
        Lattice::new(a, b, c)
    }
}

impl From<Lattice> for [Point3D; 3] {
    fn from(lattice: Lattice) -> Self {
        lattice.vectors
    }
}
