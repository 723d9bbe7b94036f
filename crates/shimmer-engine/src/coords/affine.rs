use super::Vec2;

/// A 2D affine transform.
///
/// Stored as the top two rows of a 3x3 matrix in row-major order:
///
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// | 0  0  1  |
/// ```
///
/// Points are column vectors, so `A.then(B)` maps with `B` first and `A` last.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub data: [f32; 6],
}

impl Affine {
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, // row 1
        ],
    };

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, x, // row 0
                0.0, 1.0, y, // row 1
            ],
        }
    }

    /// Rotation about the origin.
    pub fn rotate(angle_radians: f32) -> Self {
        let (sin, cos) = angle_radians.sin_cos();
        Self {
            data: [
                cos, -sin, 0.0, // row 0
                sin, cos, 0.0, // row 1
            ],
        }
    }

    pub fn rotate_degrees(angle_degrees: f32) -> Self {
        Self::rotate(angle_degrees.to_radians())
    }

    /// Rotation by `angle_degrees` about `pivot`.
    pub fn rotate_about(angle_degrees: f32, pivot: Vec2) -> Self {
        Self::translate(pivot.x, pivot.y)
            .then(&Self::rotate_degrees(angle_degrees))
            .then(&Self::translate(-pivot.x, -pivot.y))
    }

    /// Matrix product `self * other`: applies `other` first, then `self`.
    pub fn then(&self, other: &Affine) -> Affine {
        let [a0, b0, tx0, c0, d0, ty0] = self.data;
        let [a1, b1, tx1, c1, d1, ty1] = other.data;

        Affine {
            data: [
                a0 * a1 + b0 * c1,
                a0 * b1 + b0 * d1,
                a0 * tx1 + b0 * ty1 + tx0,
                c0 * a1 + d0 * c1,
                c0 * b1 + d0 * d1,
                c0 * tx1 + d0 * ty1 + ty0,
            ],
        }
    }

    /// Prepends a translation: the result maps `p` to `self(p + (dx, dy))`.
    #[inline]
    pub fn pre_translate(&self, dx: f32, dy: f32) -> Affine {
        self.then(&Self::translate(dx, dy))
    }

    /// Inverse transform, or `None` when the matrix is degenerate.
    pub fn inverse(&self) -> Option<Affine> {
        let [a, b, tx, c, d, ty] = self.data;

        let det = a * d - b * c;
        if det.abs() < 1e-10 || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;

        Some(Affine {
            data: [
                d * inv_det,
                -b * inv_det,
                (-d * tx + b * ty) * inv_det,
                -c * inv_det,
                a * inv_det,
                (c * tx - a * ty) * inv_det,
            ],
        })
    }

    #[inline]
    pub fn map_point(&self, p: Vec2) -> Vec2 {
        let [a, b, tx, c, d, ty] = self.data;
        Vec2::new(a * p.x + b * p.y + tx, c * p.x + d * p.y + ty)
    }

    /// Translation component.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.data[2], self.data[5])
    }

    /// Rows padded to `vec4`, the layout GPU uniform blocks expect.
    pub fn rows(&self) -> [[f32; 4]; 2] {
        let [a, b, tx, c, d, ty] = self.data;
        [[a, b, tx, 0.0], [c, d, ty, 0.0]]
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}
