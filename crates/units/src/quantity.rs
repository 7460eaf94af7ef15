//! 次元タグ付きスカラー量。
mod ops;

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;

use approx::{AbsDiffEq, RelativeEq};

use crate::dimension::{Dimension, dims};
use crate::unit::Unit;

/// SI 一貫単位の大きさ `f64` と物理次元 `D` の組。
///
/// 演算ごとに新しい値を返す値型で、次元の整合性はすべてコンパイル時に検査される。
/// 異なる次元同士の加算はコンパイルエラーになる:
///
/// ```compile_fail
/// use metra_units::{Length, Velocity};
/// let x = Length::from_base(1.0);
/// let v = Velocity::from_base(2.0);
/// let _ = x + v;
/// ```
///
/// 積・商の結果型は [`Compose`](crate::dimension::Compose) /
/// [`Divide`](crate::dimension::Divide) で決まる:
///
/// ```
/// use metra_units::{AngularMomentum, AngularVelocity, MomentOfInertia};
/// let inertia = MomentOfInertia::from_base(3.0);
/// let omega = AngularVelocity::from_base(2.0);
/// let h: AngularMomentum = inertia * omega;
/// assert_eq!(h.value(), 6.0);
/// ```
pub struct Quantity<D> {
    value: f64,
    dimension: PhantomData<D>,
}

impl<D: Dimension> Quantity<D> {
    /// SI 一貫単位の値から直接構築する。
    #[inline]
    pub const fn from_base(value: f64) -> Self {
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// 単位 `U` で表した値から構築する。
    ///
    /// ```
    /// use metra_units::Length;
    /// use metra_units::unit::{Foot, Meter};
    /// let x = Length::new::<Foot>(10.0);
    /// assert!((x.get::<Meter>() - 3.048).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn new<U: Unit<Dimension = D>>(value: f64) -> Self {
        Self::from_base(value * U::TO_BASE)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::from_base(0.0)
    }

    /// SI 一貫単位での大きさ。
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// 単位 `U` で表した大きさ。
    #[inline]
    pub fn get<U: Unit<Dimension = D>>(self) -> f64 {
        self.value / U::TO_BASE
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_base(self.value.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.value.is_nan()
    }

    /// 大きい方を返す。NaN の扱いは [`f64::max`] に従う。
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_base(self.value.max(other.value))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_base(self.value.min(other.value))
    }
}

impl<D> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Quantity<D> {}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({} {})", self.value, D::symbol())
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    /// `"{value} {SI 記号}"`。無次元量は値のみ。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        let exponents = D::exponents();
        if !exponents.is_dimensionless() {
            write!(f, " {exponents}")?;
        }
        Ok(())
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<D: Dimension> AbsDiffEq for Quantity<D> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl<D: Dimension> RelativeEq for Quantity<D> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

// ===== 無次元量・角度との変換 =====

impl From<f64> for Quantity<dims::Dimensionless> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_base(value)
    }
}

impl From<Quantity<dims::Dimensionless>> for f64 {
    #[inline]
    fn from(q: Quantity<dims::Dimensionless>) -> f64 {
        q.value
    }
}

/// ラジアンは長さの比であり、無次元量とは相互に変換できる。
impl From<Quantity<dims::Dimensionless>> for Quantity<dims::Angle> {
    #[inline]
    fn from(q: Quantity<dims::Dimensionless>) -> Self {
        Self::from_base(q.value)
    }
}

impl From<Quantity<dims::Angle>> for Quantity<dims::Dimensionless> {
    #[inline]
    fn from(q: Quantity<dims::Angle>) -> Self {
        Self::from_base(q.value)
    }
}

#[cfg(feature = "serde")]
impl<D: Dimension> serde::Serialize for Quantity<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> serde::Deserialize<'de> for Quantity<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        <f64 as serde::Deserialize>::deserialize(deserializer).map(Self::from_base)
    }
}

// ===== 量の型エイリアス =====

pub type Ratio = Quantity<dims::Dimensionless>;
pub type Length = Quantity<dims::Length>;
pub type Mass = Quantity<dims::Mass>;
pub type Time = Quantity<dims::Time>;
pub type Temperature = Quantity<dims::Temperature>;
pub type Angle = Quantity<dims::Angle>;
pub type Area = Quantity<dims::Area>;
pub type Volume = Quantity<dims::Volume>;
pub type Velocity = Quantity<dims::Velocity>;
pub type Acceleration = Quantity<dims::Acceleration>;
pub type Frequency = Quantity<dims::Frequency>;
pub type FrequencyRate = Quantity<dims::FrequencyRate>;
pub type AngularVelocity = Quantity<dims::AngularVelocity>;
pub type AngularAcceleration = Quantity<dims::AngularAcceleration>;
pub type Momentum = Quantity<dims::Momentum>;
pub type Force = Quantity<dims::Force>;
pub type Torque = Quantity<dims::Torque>;
pub type Energy = Quantity<dims::Energy>;
pub type Power = Quantity<dims::Power>;
pub type MomentOfInertia = Quantity<dims::MomentOfInertia>;
pub type AngularMomentum = Quantity<dims::AngularMomentum>;
pub type Density = Quantity<dims::Density>;
pub type Pressure = Quantity<dims::Pressure>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{Degree, Foot, Knot, Meter, MeterPerSecond, NauticalMile, Radian};

    #[test]
    fn test_unit_conversion_round_trip() {
        let x = Length::new::<NauticalMile>(2.0);
        assert_eq!(x.value(), 3704.0);
        let ft = x.get::<Foot>();
        let back = Length::new::<Foot>(ft);
        let rel_err = (back.value() - x.value()).abs() / x.value();
        assert!(rel_err < 1e-14, "relative error {rel_err} >= 1e-14");
    }

    #[test]
    fn test_knot_to_meter_per_second() {
        let v = Velocity::new::<Knot>(3600.0);
        assert!((v.get::<MeterPerSecond>() - 1852.0).abs() < 1e-9);
    }

    #[test]
    fn test_degree_to_radian() {
        let a = Angle::new::<Degree>(180.0);
        assert!((a.get::<Radian>() - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Length::default(), Length::zero());
        assert_eq!(Length::default().get::<Meter>(), 0.0);
    }

    #[test]
    fn test_display_appends_symbol() {
        assert_eq!(Velocity::from_base(2.5).to_string(), "2.5 m·s^-1");
        assert_eq!(Ratio::from_base(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_debug_includes_symbol() {
        assert_eq!(format!("{:?}", Length::from_base(1.0)), "Quantity(1 m)");
    }

    #[test]
    fn test_angle_dimensionless_conversion() {
        let ratio = Ratio::from(0.5);
        let angle: Angle = ratio.into();
        assert_eq!(angle.value(), 0.5);
        let back: Ratio = angle.into();
        assert_eq!(f64::from(back), 0.5);
    }

    #[test]
    fn test_ordering_and_min_max() {
        let a = Length::from_base(1.0);
        let b = Length::from_base(2.0);
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_eq!(a.min(b), a);
        assert_eq!((-b).abs(), b);
    }

    #[test]
    fn test_sum() {
        let total: Length = [1.0, 2.0, 3.5].into_iter().map(Length::from_base).sum();
        assert_eq!(total.value(), 6.5);
    }

    #[test]
    fn test_nan_is_not_finite() {
        let q = Length::from_base(f64::NAN);
        assert!(q.is_nan());
        assert!(!q.is_finite());
        assert!(!Length::from_base(f64::INFINITY).is_finite());
    }

    #[test]
    fn test_relative_eq() {
        let a = Length::from_base(1.0);
        let b = Length::from_base(1.0 + 1e-12);
        approx::assert_relative_eq!(a, b, max_relative = 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_is_bare_magnitude() {
        let v = Velocity::from_base(12.5);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "12.5");
        let back: Velocity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
