/// 量同士・量とスカラーの算術演算を提供する。
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Quantity;
use crate::dimension::{Compose, Dimension, Divide, Inverse, Product, Quotient, dims};

// ===== 同次元 =====

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_base(self.value + rhs.value)
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_base(self.value - rhs.value)
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_base(-self.value)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// ===== 無次元スカラー =====

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;

    /// スカラー倍（右）: `q * s`。次元は変わらない。
    #[inline]
    fn mul(self, s: f64) -> Self {
        Self::from_base(self.value * s)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;

    /// スカラー倍（左）: `s * q`。`q * s` に委譲する。
    #[inline]
    fn mul(self, q: Quantity<D>) -> Quantity<D> {
        q * self
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;

    #[inline]
    fn div(self, s: f64) -> Self {
        Self::from_base(self.value / s)
    }
}

impl<D> Div<Quantity<D>> for f64
where
    D: Dimension,
    dims::Dimensionless: Divide<D>,
{
    type Output = Quantity<Inverse<D>>;

    /// 逆数: `s / q`。結果の次元は `q` の逆次元。
    #[inline]
    fn div(self, q: Quantity<D>) -> Quantity<Inverse<D>> {
        Quantity::from_base(self / q.value)
    }
}

impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        *self = *self * s;
    }
}

impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        *self = *self / s;
    }
}

// ===== 異次元の積・商 =====

impl<D1, D2> Mul<Quantity<D2>> for Quantity<D1>
where
    D1: Compose<D2>,
    D2: Dimension,
{
    type Output = Quantity<Product<D1, D2>>;

    /// 積: 結果の次元は `Compose` で決まる（角度除去規則を含む）。
    #[inline]
    fn mul(self, rhs: Quantity<D2>) -> Self::Output {
        Quantity::from_base(self.value * rhs.value)
    }
}

impl<D1, D2> Div<Quantity<D2>> for Quantity<D1>
where
    D1: Divide<D2>,
    D2: Dimension,
{
    type Output = Quantity<Quotient<D1, D2>>;

    #[inline]
    fn div(self, rhs: Quantity<D2>) -> Self::Output {
        Quantity::from_base(self.value / rhs.value)
    }
}
