use std::fmt;
use std::ops::Mul;

use bytemuck::{Pod, Zeroable};

/// Column-major 4x4 matrix.
///
/// Element `(row, col)` lives at `m[col * 4 + row]`, which is the layout WGSL
/// expects for `mat4x4<f32>`, so a `Mat4` can be uploaded with `bytemuck` as-is.
///
/// Composition is accumulator-style: every in-place operation replaces the
/// matrix `acc` with `op * acc`. A vector transformed by the result sees the
/// most recently applied operation last.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [f32; 16],
}

impl Mat4 {
    /// Identity matrix.
    #[inline]
    pub const fn unity() -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Returns element `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[(col << 2) + row]
    }

    /// Perspective-divide projection.
    ///
    /// Identity except `w' = z / focal_distance`, so after the divide a point at
    /// depth `z` is scaled by `focal_distance / z`.
    pub fn projection(focal_distance: f32) -> Self {
        let mut p = Self::unity();
        p.m[11] = 1.0 / focal_distance;
        p.m[15] = 0.0;
        p
    }

    /// Rotation about +X by `deg` degrees (right-hand rule).
    pub fn rotation_x(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        let mut r = Self::unity();
        r.m[5] = c;
        r.m[6] = s;
        r.m[9] = -s;
        r.m[10] = c;
        r
    }

    /// Rotation about +Y by `deg` degrees (right-hand rule).
    pub fn rotation_y(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        let mut r = Self::unity();
        r.m[0] = c;
        r.m[2] = -s;
        r.m[8] = s;
        r.m[10] = c;
        r
    }

    /// Rotation about +Z by `deg` degrees (right-hand rule).
    pub fn rotation_z(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        let mut r = Self::unity();
        r.m[0] = c;
        r.m[1] = s;
        r.m[4] = -s;
        r.m[5] = c;
        r
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut t = Self::unity();
        t.m[12] = x;
        t.m[13] = y;
        t.m[14] = z;
        t
    }

    pub fn scaling(xs: f32, ys: f32, zs: f32) -> Self {
        let mut s = Self::unity();
        s.m[0] = xs;
        s.m[5] = ys;
        s.m[10] = zs;
        s
    }

    /// Replaces `self` with `op * self`.
    #[inline]
    pub fn apply(&mut self, op: Mat4) -> &mut Self {
        *self = op * *self;
        self
    }

    #[inline]
    pub fn rotate_x(&mut self, deg: f32) -> &mut Self {
        self.apply(Self::rotation_x(deg))
    }

    #[inline]
    pub fn rotate_y(&mut self, deg: f32) -> &mut Self {
        self.apply(Self::rotation_y(deg))
    }

    #[inline]
    pub fn rotate_z(&mut self, deg: f32) -> &mut Self {
        self.apply(Self::rotation_z(deg))
    }

    #[inline]
    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.apply(Self::translation(x, y, z))
    }

    #[inline]
    pub fn scale(&mut self, xs: f32, ys: f32, zs: f32) -> &mut Self {
        self.apply(Self::scaling(xs, ys, zs))
    }

    /// Multiplies a column vector: `self * v`.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = self.at(row, 0) * v[0]
                + self.at(row, 1) * v[1]
                + self.at(row, 2) * v[2]
                + self.at(row, 3) * v[3];
        }
        out
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Mat4, eps: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::unity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut p = [0.0f32; 16];
        for i in 0..4 {
            let (ai0, ai1, ai2, ai3) = (self.at(i, 0), self.at(i, 1), self.at(i, 2), self.at(i, 3));
            for j in 0..4 {
                p[(j << 2) + i] = ai0 * rhs.at(0, j)
                    + ai1 * rhs.at(1, j)
                    + ai2 * rhs.at(2, j)
                    + ai3 * rhs.at(3, j);
            }
        }
        Mat4 { m: p }
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for row in 0..4 {
            writeln!(
                f,
                " [{:.6}, {:.6}, {:.6}, {:.6}]",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3)
            )?;
        }
        write!(f, "}}")
    }
}
