//! 表示単位と SI 基本単位との換算係数。
//!
//! [`Quantity`](crate::Quantity) は常に SI 一貫単位で値を保持する。
//! 同じ次元に属する単位（m / ft / NM など）は同一の型を共有し、
//! 単位の違いは構築時と読み出し時の係数だけで表現される。
use std::f64::consts::PI;

use crate::dimension::{Dimension, dims};

/// 単位の共通インターフェース。
///
/// `value_si = value_unit * TO_BASE`
pub trait Unit {
    type Dimension: Dimension;
    const TO_BASE: f64;
    const SYMBOL: &'static str;
}

macro_rules! units {
    ($($(#[$meta:meta])* $name:ident: $dim:ty = $factor:expr, $symbol:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $name {}

            impl Unit for $name {
                type Dimension = $dim;
                const TO_BASE: f64 = $factor;
                const SYMBOL: &'static str = $symbol;
            }
        )*
    };
}

units! {
    /// 無次元量の単位（1）。
    Unity: dims::Dimensionless = 1.0, "";

    Meter: dims::Length = 1.0, "m";
    Kilometer: dims::Length = 1000.0, "km";
    /// 国際フィート
    Foot: dims::Length = 0.3048, "ft";
    NauticalMile: dims::Length = 1852.0, "NM";

    Second: dims::Time = 1.0, "s";
    Minute: dims::Time = 60.0, "min";
    Hour: dims::Time = 3600.0, "h";

    Kilogram: dims::Mass = 1.0, "kg";
    /// 常用ポンド（質量）
    Pound: dims::Mass = 0.453_592_37, "lb";

    Kelvin: dims::Temperature = 1.0, "K";

    Radian: dims::Angle = 1.0, "rad";
    Degree: dims::Angle = PI / 180.0, "deg";

    SquareMeter: dims::Area = 1.0, "m^2";
    CubicMeter: dims::Volume = 1.0, "m^3";

    MeterPerSecond: dims::Velocity = 1.0, "m/s";
    FootPerSecond: dims::Velocity = 0.3048, "ft/s";
    Knot: dims::Velocity = 1852.0 / 3600.0, "kn";
    MeterPerSecondSquared: dims::Acceleration = 1.0, "m/s^2";

    /// s⁻¹（角度を含まない毎秒）
    PerSecond: dims::Frequency = 1.0, "1/s";
    PerSecondSquared: dims::FrequencyRate = 1.0, "1/s^2";
    RadianPerSecond: dims::AngularVelocity = 1.0, "rad/s";
    DegreePerSecond: dims::AngularVelocity = PI / 180.0, "deg/s";
    RadianPerSecondSquared: dims::AngularAcceleration = 1.0, "rad/s^2";

    Newton: dims::Force = 1.0, "N";
    NewtonMeter: dims::Torque = 1.0, "N·m";
    Joule: dims::Energy = 1.0, "J";
    Watt: dims::Power = 1.0, "W";
    KilogramSquareMeter: dims::MomentOfInertia = 1.0, "kg·m^2";
    KilogramSquareMeterPerSecond: dims::AngularMomentum = 1.0, "kg·m^2/s";
    KilogramPerCubicMeter: dims::Density = 1.0, "kg/m^3";
    Pascal: dims::Pressure = 1.0, "Pa";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knot_factor() {
        // 1 kn = 1852 m / 3600 s
        let expected = 0.514_444_444_444_444_4_f64;
        let rel_err = (Knot::TO_BASE - expected).abs() / expected;
        assert!(rel_err < 1e-14, "relative error {rel_err} >= 1e-14");
    }

    #[test]
    fn test_degree_factor() {
        assert!((Degree::TO_BASE * 180.0 - PI).abs() < 1e-15);
        assert_eq!(Degree::TO_BASE, DegreePerSecond::TO_BASE);
    }
}
