/// 同型行列間の要素ごとの算術演算とスカラー倍を提供する。
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use metra_units::{Compose, Dimension, Product, Quantity, Scalar};

use super::MatrixMxN;

// ===== 同型行列 =====

impl<T: Scalar, const R: usize, const C: usize> Add for MatrixMxN<T, R, C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out += rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for MatrixMxN<T, R, C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out -= rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for MatrixMxN<T, R, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for MatrixMxN<T, R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().flatten().zip(rhs.iter()) {
            *a += *b;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for MatrixMxN<T, R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().flatten().zip(rhs.iter()) {
            *a -= *b;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<f64> for MatrixMxN<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        for a in self.data.iter_mut().flatten() {
            *a = *a * s;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<f64> for MatrixMxN<T, R, C> {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        *self *= 1.0 / s;
    }
}

// ===== スカラー倍 =====

impl<T, U, const R: usize, const C: usize> Mul<U> for MatrixMxN<T, R, C>
where
    T: Scalar + Mul<U>,
    U: Scalar,
    <T as Mul<U>>::Output: Scalar,
{
    type Output = MatrixMxN<<T as Mul<U>>::Output, R, C>;

    /// スカラー倍（右）: `m * s`。結果の要素型は `T * U`（角度除去規則を含む）。
    #[inline]
    fn mul(self, s: U) -> Self::Output {
        self.map(|x| x * s)
    }
}

impl<T, U, const R: usize, const C: usize> Div<U> for MatrixMxN<T, R, C>
where
    T: Scalar + Div<U>,
    U: Scalar,
    <T as Div<U>>::Output: Scalar,
{
    type Output = MatrixMxN<<T as Div<U>>::Output, R, C>;

    /// スカラー除算: `m / s`。逆数 `1 / s` を各要素に乗じる。
    #[inline]
    fn div(self, s: U) -> Self::Output {
        let inv = 1.0 / s.magnitude();
        self.map(|x| <<T as Div<U>>::Output as Scalar>::from_magnitude(x.magnitude() * inv))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<MatrixMxN<T, R, C>> for f64 {
    type Output = MatrixMxN<T, R, C>;

    /// スカラー倍（左）: `s * m`。`m * s` に委譲する。
    #[inline]
    fn mul(self, m: MatrixMxN<T, R, C>) -> MatrixMxN<T, R, C> {
        m * self
    }
}

impl<D: Dimension, const R: usize, const C: usize> Mul<MatrixMxN<f64, R, C>> for Quantity<D> {
    type Output = MatrixMxN<Quantity<D>, R, C>;

    #[inline]
    fn mul(self, m: MatrixMxN<f64, R, C>) -> MatrixMxN<Quantity<D>, R, C> {
        m * self
    }
}

impl<D1, D2, const R: usize, const C: usize> Mul<MatrixMxN<Quantity<D2>, R, C>> for Quantity<D1>
where
    D1: Compose<D2>,
    D2: Dimension,
{
    type Output = MatrixMxN<Quantity<Product<D1, D2>>, R, C>;

    /// 量によるスカラー倍（左）: `q * m`。要素の次元は `Compose` で決まる。
    #[inline]
    fn mul(self, m: MatrixMxN<Quantity<D2>, R, C>) -> Self::Output {
        m.map(|x| self * x)
    }
}
