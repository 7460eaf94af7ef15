//! よく使う次元の型エイリアス。
//!
//! 並びは `Dim<長さ, 質量, 時間, 温度, 角度>`。
use typenum::{N1, N2, N3, P1, P2, P3, Z0};

use super::Dim;

pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0>;

// ===== 基本次元 =====

pub type Length = Dim<P1, Z0, Z0, Z0, Z0>;
pub type Mass = Dim<Z0, P1, Z0, Z0, Z0>;
pub type Time = Dim<Z0, Z0, P1, Z0, Z0>;
pub type Temperature = Dim<Z0, Z0, Z0, P1, Z0>;
pub type Angle = Dim<Z0, Z0, Z0, Z0, P1>;

// ===== 幾何・運動学 =====

pub type Area = Dim<P2, Z0, Z0, Z0, Z0>;
pub type Volume = Dim<P3, Z0, Z0, Z0, Z0>;
pub type Velocity = Dim<P1, Z0, N1, Z0, Z0>;
pub type Acceleration = Dim<P1, Z0, N2, Z0, Z0>;
/// s⁻¹
pub type Frequency = Dim<Z0, Z0, N1, Z0, Z0>;
/// s⁻²
pub type FrequencyRate = Dim<Z0, Z0, N2, Z0, Z0>;
pub type AngularVelocity = Dim<Z0, Z0, N1, Z0, P1>;
pub type AngularAcceleration = Dim<Z0, Z0, N2, Z0, P1>;

// ===== 動力学 =====

pub type Momentum = Dim<P1, P1, N1, Z0, Z0>;
pub type Force = Dim<P1, P1, N2, Z0, Z0>;
/// トルクとエネルギーは SI では同じ次元（N·m = J）になる。
pub type Torque = Dim<P2, P1, N2, Z0, Z0>;
pub type Energy = Torque;
pub type Power = Dim<P2, P1, N3, Z0, Z0>;
pub type MomentOfInertia = Dim<P2, P1, Z0, Z0, Z0>;
pub type AngularMomentum = Dim<P2, P1, N1, Z0, Z0>;
pub type Density = Dim<N3, P1, Z0, Z0, Z0>;
pub type Pressure = Dim<N1, P1, N2, Z0, Z0>;
