use metra_units::{Angle, Scalar};

use super::MatrixMxN;
use crate::vector::{Vector3, VectorN};

/// 正方行列。
pub type MatrixNxN<T, const N: usize> = MatrixMxN<T, N, N>;

/// 3×3 行列。要素は `xx, xy, xz, yx, ..., zz` の名前で行優先に並ぶ。
pub type Matrix3x3<T> = MatrixNxN<T, 3>;

impl<T: Scalar, const N: usize> MatrixMxN<T, N, N> {
    /// 単位行列: 対角成分が `T` の大きさ 1、それ以外が零。
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::from_magnitude(1.0);
        }
        m
    }

    pub fn from_diagonal(diagonal: VectorN<T, N>) -> Self {
        let mut m = Self::zeros();
        for (i, value) in diagonal.into_array().into_iter().enumerate() {
            m.data[i][i] = value;
        }
        m
    }

    pub fn diagonal(&self) -> VectorN<T, N> {
        let mut d = VectorN::zeros();
        for i in 0..N {
            d[i] = self.data[i][i];
        }
        d
    }

    /// 対角成分の和。
    pub fn trace(&self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc += self.data[i][i];
        }
        acc
    }

    /// `a_ij == a_ji` が全要素で厳密に成り立つか。
    pub fn is_symmetric(&self) -> bool {
        (0..N).all(|i| (i + 1..N).all(|j| self.data[i][j] == self.data[j][i]))
    }
}

macro_rules! element_accessors {
    ($($row:literal, $col:literal => $get:ident, $set:ident;)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> T {
                self.data[$row][$col]
            }

            #[inline]
            pub fn $set(&mut self, value: T) {
                self.data[$row][$col] = value;
            }
        )*
    };
}

impl<T: Scalar> MatrixMxN<T, 3, 3> {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(xx: T, xy: T, xz: T, yx: T, yy: T, yz: T, zx: T, zy: T, zz: T) -> Self {
        Self::from_rows([[xx, xy, xz], [yx, yy, yz], [zx, zy, zz]])
    }

    element_accessors! {
        0, 0 => xx, set_xx;
        0, 1 => xy, set_xy;
        0, 2 => xz, set_xz;
        1, 0 => yx, set_yx;
        1, 1 => yy, set_yy;
        1, 2 => yz, set_yz;
        2, 0 => zx, set_zx;
        2, 1 => zy, set_zy;
        2, 2 => zz, set_zz;
    }

    /// クロス積行列 `[a]×`。`skew(a) * b == a % b` を満たす。
    ///
    /// ```text
    /// |  0  -az  ay |
    /// |  az  0  -ax |
    /// | -ay  ax  0  |
    /// ```
    pub fn skew(a: &Vector3<T>) -> Self {
        let zero = T::zero();
        Self::new(
            zero,
            -a.z(),
            a.y(),
            a.z(),
            zero,
            -a.x(),
            -a.y(),
            a.x(),
            zero,
        )
    }
}

// ===== 座標系回転 =====

/// 座標軸まわりの座標系回転（passive rotation）行列。
///
/// ベクトルを固定したまま座標系を `angle` だけ回したときの成分変換を表す。
/// 例えば `rotation_z(90°) * (1, 0, 0) = (0, -1, 0)`。
impl MatrixMxN<f64, 3, 3> {
    pub fn rotation_x(angle: Angle) -> Self {
        let (s, c) = angle.value().sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
    }

    pub fn rotation_y(angle: Angle) -> Self {
        let (s, c) = angle.value().sin_cos();
        Self::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
    }

    pub fn rotation_z(angle: Angle) -> Self {
        let (s, c) = angle.value().sin_cos();
        Self::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use metra_units::unit::Degree;
    use metra_units::{AngularVelocity, Length, MomentOfInertia, Velocity};

    fn sample() -> Matrix3x3<f64> {
        Matrix3x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0)
    }

    #[test]
    fn test_identity() {
        let i = Matrix3x3::<f64>::identity();
        assert_eq!(
            i.magnitudes(),
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(i * sample(), sample());
        assert_eq!(sample() * i, sample());
    }

    #[test]
    fn test_identity_of_quantity_has_unit_magnitude() {
        let i = MatrixNxN::<MomentOfInertia, 2>::identity();
        assert_eq!(i.get(0, 0), MomentOfInertia::from_base(1.0));
        assert_eq!(i.get(0, 1), MomentOfInertia::zero());
    }

    #[test]
    fn test_named_accessors() {
        let mut m = sample();
        assert_eq!((m.xx(), m.yz(), m.zx()), (1.0, 6.0, 7.0));
        m.set_zy(-8.0);
        assert_eq!(m[(2, 1)], -8.0);
        assert_eq!(m[7], -8.0);
    }

    #[test]
    fn test_trace_and_diagonal() {
        let m = sample();
        assert_eq!(m.trace(), 15.0);
        assert_eq!(m.diagonal(), VectorN::from_array([1.0, 5.0, 9.0]));
        let d = Matrix3x3::from_diagonal(m.diagonal());
        assert_eq!(d.trace(), 15.0);
        assert_eq!(d.get(0, 1), 0.0);
    }

    #[test]
    fn test_is_symmetric() {
        assert!(!sample().is_symmetric());
        assert!((sample() + sample().transposed()).is_symmetric());
        assert!(Matrix3x3::<f64>::identity().is_symmetric());
    }

    #[test]
    fn test_skew_matches_cross() {
        let a = Vector3::new(0.5, -1.5, 2.0);
        let b = Vector3::new(3.0, 0.25, -4.0);
        assert_eq!(Matrix3x3::skew(&a) * b, a % b);
    }

    #[test]
    fn test_skew_of_angular_velocity() {
        let omega = Vector3::new(
            AngularVelocity::from_base(0.1),
            AngularVelocity::from_base(-0.2),
            AngularVelocity::from_base(0.3),
        );
        let r = Vector3::new(
            Length::from_base(1.0),
            Length::from_base(2.0),
            Length::from_base(3.0),
        );
        let v: Vector3<Velocity> = Matrix3x3::skew(&omega) * r;
        assert_relative_eq!(v, omega % r, epsilon = 1e-15);
    }

    #[test]
    fn test_rotation_z_is_passive() {
        let r = Matrix3x3::rotation_z(Angle::new::<Degree>(90.0));
        let v = r * Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(v, Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_rotation_x_and_y() {
        let quarter = Angle::new::<Degree>(90.0);
        let vx = Matrix3x3::rotation_x(quarter) * Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(vx, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-15);
        let vy = Matrix3x3::rotation_y(quarter) * Vector3::new(0.0, 0.0, 1.0);
        assert_relative_eq!(vy, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let r = Matrix3x3::rotation_x(Angle::from_base(0.3))
            * Matrix3x3::rotation_y(Angle::from_base(-1.1))
            * Matrix3x3::rotation_z(Angle::from_base(2.4));
        assert_relative_eq!(r * r.transposed(), Matrix3x3::identity(), epsilon = 1e-12);
    }
}
