/// ベクトルの算術演算を提供する。
///
/// 右辺がスカラー（[`Scalar`] 実装型）か同じ長さのベクトルかはコンパイル時に区別され、
/// `v * s` はスカラー倍、`v * w` は内積になる。
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use metra_units::{Compose, Dimension, Product, Quantity, Scalar};

use super::VectorN;

// ===== 同型ベクトル =====

impl<T: Scalar, const N: usize> Add for VectorN<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out += rhs;
        out
    }
}

impl<T: Scalar, const N: usize> Sub for VectorN<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out -= rhs;
        out
    }
}

impl<T: Scalar, const N: usize> Neg for VectorN<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_array(self.data.map(|x| -x))
    }
}

impl<T: Scalar, const N: usize> AddAssign for VectorN<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a += b;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for VectorN<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a -= b;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<f64> for VectorN<T, N> {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        for a in self.data.iter_mut() {
            *a = *a * s;
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<f64> for VectorN<T, N> {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        *self *= 1.0 / s;
    }
}

// ===== スカラー倍 =====

impl<T, U, const N: usize> Mul<U> for VectorN<T, N>
where
    T: Scalar + Mul<U>,
    U: Scalar,
    <T as Mul<U>>::Output: Scalar,
{
    type Output = VectorN<<T as Mul<U>>::Output, N>;

    /// スカラー倍（右）: `v * s`。
    ///
    /// `s` が `f64` なら要素の次元を保ち、量なら要素との積の次元になる。
    #[inline]
    fn mul(self, s: U) -> Self::Output {
        VectorN::from_array(self.data.map(|x| x * s))
    }
}

impl<T, U, const N: usize> Div<U> for VectorN<T, N>
where
    T: Scalar + Div<U>,
    U: Scalar,
    <T as Div<U>>::Output: Scalar,
{
    type Output = VectorN<<T as Div<U>>::Output, N>;

    /// スカラー除算: `v / s`。
    ///
    /// 倍精度の逆数 `1 / s` を一度だけ計算し、各成分に乗じる。`s` が 0 の場合の検査はしない。
    #[inline]
    fn div(self, s: U) -> Self::Output {
        let inv = 1.0 / s.magnitude();
        VectorN::from_array(
            self.data
                .map(|x| <<T as Div<U>>::Output as Scalar>::from_magnitude(x.magnitude() * inv)),
        )
    }
}

impl<T, const N: usize> Mul<VectorN<T, N>> for f64
where
    T: Scalar,
{
    type Output = VectorN<T, N>;

    /// スカラー倍（左）: `s * v`。`v * s` に委譲する。
    #[inline]
    fn mul(self, v: VectorN<T, N>) -> VectorN<T, N> {
        v * self
    }
}

impl<D: Dimension, const N: usize> Mul<VectorN<f64, N>> for Quantity<D> {
    type Output = VectorN<Quantity<D>, N>;

    /// 量によるスカラー倍（左）: `q * v`。無次元ベクトルに次元を付与する。
    #[inline]
    fn mul(self, v: VectorN<f64, N>) -> VectorN<Quantity<D>, N> {
        v * self
    }
}

impl<D1, D2, const N: usize> Mul<VectorN<Quantity<D2>, N>> for Quantity<D1>
where
    D1: Compose<D2>,
    D2: Dimension,
{
    type Output = VectorN<Quantity<Product<D1, D2>>, N>;

    /// 量によるスカラー倍（左）: `q * v`。要素の次元は `Compose` で決まる。
    #[inline]
    fn mul(self, v: VectorN<Quantity<D2>, N>) -> Self::Output {
        VectorN::from_array(v.data.map(|x| self * x))
    }
}

// ===== 内積 =====

impl<T, U, const N: usize> Mul<VectorN<U, N>> for VectorN<T, N>
where
    T: Scalar + Mul<U>,
    U: Scalar,
    <T as Mul<U>>::Output: Scalar,
{
    type Output = <T as Mul<U>>::Output;

    /// 内積: `a · b = Σ a_i * b_i`。
    #[inline]
    fn mul(self, rhs: VectorN<U, N>) -> Self::Output {
        self.dot(&rhs)
    }
}
