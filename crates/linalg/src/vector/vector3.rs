use std::ops::{Mul, Rem};

use metra_units::Scalar;

use super::VectorN;

/// 3 成分ベクトル。
///
/// 成分名は用途に応じて 3 組の別名を持つ:
///
/// | 添字 | 位置 | 角速度 | 速度 |
/// |------|------|--------|------|
/// | 0    | `x`  | `p`    | `u`  |
/// | 1    | `y`  | `q`    | `v`  |
/// | 2    | `z`  | `r`    | `w`  |
///
/// どの別名も同じ格納位置を指す。
pub type Vector3<T> = VectorN<T, 3>;

macro_rules! component_accessors {
    ($($index:literal => $get:ident, $set:ident;)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> T {
                self.data[$index]
            }

            #[inline]
            pub fn $set(&mut self, value: T) {
                self.data[$index] = value;
            }
        )*
    };
}

impl<T: Scalar> VectorN<T, 3> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    component_accessors! {
        0 => x, set_x;
        1 => y, set_y;
        2 => z, set_z;
        0 => p, set_p;
        1 => q, set_q;
        2 => r, set_r;
        0 => u, set_u;
        1 => v, set_v;
        2 => w, set_w;
    }

    /// クロス積: `a × b`（右手系）。
    ///
    /// 結果の次元は成分同士の積の次元で、内積と同じ角度除去規則に従う。
    #[inline]
    pub fn cross<U>(&self, other: &Vector3<U>) -> Vector3<<T as Mul<U>>::Output>
    where
        T: Mul<U>,
        U: Scalar,
        <T as Mul<U>>::Output: Scalar,
    {
        VectorN::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl<T, U> Rem<Vector3<U>> for Vector3<T>
where
    T: Scalar + Mul<U>,
    U: Scalar,
    <T as Mul<U>>::Output: Scalar,
{
    type Output = Vector3<<T as Mul<U>>::Output>;

    /// クロス積演算子: `a % b == a.cross(&b)`。
    #[inline]
    fn rem(self, rhs: Vector3<U>) -> Self::Output {
        self.cross(&rhs)
    }
}
