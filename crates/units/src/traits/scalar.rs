use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::dimension::{Dimension, dims};
use crate::quantity::Quantity;

/// ベクトル・行列の要素として使用可能な型の共通インターフェース。
///
/// スーパートレイトバウンドとして同型の加減算・符号反転と `f64` によるスカラー倍を要求し、
/// 零元と SI 一貫単位での大きさ（magnitude）を定義する。
/// `f64` は無次元量として扱われる。
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + AddAssign
    + SubAssign
{
    /// 要素の物理次元。
    type Dimension: Dimension;

    /// 加法単位元を返す。`Self::zero() + x == x` をすべての `x` について保証する。
    fn zero() -> Self;

    /// SI 一貫単位での大きさから構築する。
    fn from_magnitude(magnitude: f64) -> Self;

    /// SI 一貫単位での大きさ。
    fn magnitude(self) -> f64;

    /// 全成分が NaN の無効値。
    fn nan() -> Self {
        Self::from_magnitude(f64::NAN)
    }

    /// 大きさが有限（NaN・無限大でない）か。
    fn is_finite(self) -> bool {
        self.magnitude().is_finite()
    }
}

// ===== f64 =====

impl Scalar for f64 {
    type Dimension = dims::Dimensionless;

    #[inline]
    fn zero() -> Self {
        0.0_f64
    }

    #[inline]
    fn from_magnitude(magnitude: f64) -> Self {
        magnitude
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self
    }
}

// ===== Quantity =====

impl<D: Dimension> Scalar for Quantity<D> {
    type Dimension = D;

    #[inline]
    fn zero() -> Self {
        Quantity::zero()
    }

    #[inline]
    fn from_magnitude(magnitude: f64) -> Self {
        Quantity::from_base(magnitude)
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self.value()
    }
}
