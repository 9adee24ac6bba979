//! Private 3x3 linear algebra for lattice transforms.
//!
//! Enough to move between Cartesian and fractional coordinates without
//! requiring an external linear algebra crate.

use crate::types::Point3D;

/// A 3x3 matrix stored in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Matrix3x3 {
    pub data: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Zero matrix.
    pub fn zeros() -> Self {
        Self {
            data: [[0.0; 3]; 3],
        }
    }

    /// Matrix whose rows are the given vectors.
    pub fn from_rows(rows: &[Point3D; 3]) -> Self {
        let mut m = Matrix3x3::zeros();
        for (i, r) in rows.iter().enumerate() {
            m.data[i] = r.to_array();
        }
        m
    }

    /// Transpose.
    pub fn transpose(&self) -> Matrix3x3 {
        let mut result = Matrix3x3::zeros();
        for i in 0..3 {
            for j in 0..3 {
                result.data[i][j] = self.data[j][i];
            }
        }
        result
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        let d = &self.data;
        d[0][0] * (d[1][1] * d[2][2] - d[1][2] * d[2][1])
            - d[0][1] * (d[1][0] * d[2][2] - d[1][2] * d[2][0])
            + d[0][2] * (d[1][0] * d[2][1] - d[1][1] * d[2][0])
    }

    /// Inverse via the adjugate, or `None` for a (near-)singular matrix.
    pub fn inverse(&self) -> Option<Matrix3x3> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return None;
        }
        let d = &self.data;
        let mut inv = Matrix3x3::zeros();
        inv.data[0][0] = (d[1][1] * d[2][2] - d[1][2] * d[2][1]) / det;
        inv.data[0][1] = (d[0][2] * d[2][1] - d[0][1] * d[2][2]) / det;
        inv.data[0][2] = (d[0][1] * d[1][2] - d[0][2] * d[1][1]) / det;
        inv.data[1][0] = (d[1][2] * d[2][0] - d[1][0] * d[2][2]) / det;
        inv.data[1][1] = (d[0][0] * d[2][2] - d[0][2] * d[2][0]) / det;
        inv.data[1][2] = (d[0][2] * d[1][0] - d[0][0] * d[1][2]) / det;
        inv.data[2][0] = (d[1][0] * d[2][1] - d[1][1] * d[2][0]) / det;
        inv.data[2][1] = (d[0][1] * d[2][0] - d[0][0] * d[2][1]) / det;
        inv.data[2][2] = (d[0][0] * d[1][1] - d[0][1] * d[1][0]) / det;
        Some(inv)
    }

    /// Apply this matrix to a point: M * p.
    pub fn apply(&self, p: &Point3D) -> Point3D {
        Point3D {
            x: self.data[0][0] * p.x + self.data[0][1] * p.y + self.data[0][2] * p.z,
            y: self.data[1][0] * p.x + self.data[1][1] * p.y + self.data[1][2] * p.z,
            z: self.data[2][0] * p.x + self.data[2][1] * p.y + self.data[2][2] * p.z,
        }
    }
}
