//! 物理次元の型レベル表現。
//!
//! - [`Dim`][]: 長さ・質量・時間・温度・角度の指数を `typenum` 整数で持つ零サイズ型
//! - [`Dimension`][]: 指数とカテゴリをコンパイル時に公開する trait
//! - [`Compose`][] / [`Divide`][]: 積・商の結果次元をコンパイル時に決定する trait

pub mod category;
mod compose;
pub mod dims;
mod exponent;

use std::fmt;
use std::marker::PhantomData;

use typenum::Integer;

pub use category::CategoryKind;
pub use compose::{Compose, Divide, Inverse, Product, Quotient};
pub use exponent::Exponent;

use category::{AllSet, Select};

/// 次元 `m^L · kg^M · s^T · K^K · rad^A`。値を持たない型タグとしてのみ使う。
pub struct Dim<L, M, T, K, A>(PhantomData<(L, M, T, K, A)>);

/// 実行時に参照する指数の組。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exponents {
    pub length: i32,
    pub mass: i32,
    pub time: i32,
    pub temperature: i32,
    pub angle: i32,
}

impl Exponents {
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Exponents {
    /// SI 記号で表記する。無次元は `1`。
    ///
    /// `m^2·kg·s^-1` のように、指数 1 は省略し、基本次元は m, kg, s, K, rad の順に並べる。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = [
            ("m", self.length),
            ("kg", self.mass),
            ("s", self.time),
            ("K", self.temperature),
            ("rad", self.angle),
        ];
        let mut first = true;
        for (symbol, exp) in terms {
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            if exp == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{exp}")?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}

/// 物理次元として使用可能な型の共通インターフェース。
///
/// 関連型はすべてコンパイル時に決まり、実行時のディスパッチは発生しない。
/// `Category` は指数から自動的に導かれ、積・商での角度除去規則の選択に使われる。
pub trait Dimension: 'static {
    type Length: Exponent;
    type Mass: Exponent;
    type Time: Exponent;
    type Temperature: Exponent;
    type Angle: Exponent;
    type Category: category::Category;

    fn exponents() -> Exponents {
        Exponents {
            length: Self::Length::to_i32(),
            mass: Self::Mass::to_i32(),
            time: Self::Time::to_i32(),
            temperature: Self::Temperature::to_i32(),
            angle: Self::Angle::to_i32(),
        }
    }

    fn category() -> CategoryKind {
        <Self::Category as category::Category>::KIND
    }

    /// SI 記号（例: `m·s^-1`）。
    fn symbol() -> String {
        Self::exponents().to_string()
    }
}

type RestZero<L, M, K> = (
    <L as Exponent>::IsZero,
    <M as Exponent>::IsZero,
    <K as Exponent>::IsZero,
);

type Classifier<L, M, T, K, A> = (
    <RestZero<L, M, K> as AllSet>::Output,
    <T as Exponent>::IsZero,
    <A as Exponent>::IsZero,
    <A as Exponent>::IsPlusOne,
    <T as Exponent>::IsMinusOne,
    <T as Exponent>::IsMinusTwo,
);

impl<L, M, T, K, A> Dimension for Dim<L, M, T, K, A>
where
    L: Exponent + 'static,
    M: Exponent + 'static,
    T: Exponent + 'static,
    K: Exponent + 'static,
    A: Exponent + 'static,
    RestZero<L, M, K>: AllSet,
    Classifier<L, M, T, K, A>: Select,
{
    type Length = L;
    type Mass = M;
    type Time = T;
    type Temperature = K;
    type Angle = A;
    type Category = <Classifier<L, M, T, K, A> as Select>::Output;
}

#[cfg(test)]
mod tests {
    use super::dims::*;
    use super::*;

    #[test]
    fn test_dimensionless_symbol() {
        assert_eq!(Dimensionless::symbol(), "1");
        assert!(Dimensionless::exponents().is_dimensionless());
    }

    #[test]
    fn test_compound_symbol() {
        assert_eq!(Velocity::symbol(), "m·s^-1");
        assert_eq!(AngularMomentum::symbol(), "m^2·kg·s^-1");
        assert_eq!(AngularVelocity::symbol(), "s^-1·rad");
    }

    #[test]
    fn test_categories() {
        assert_eq!(Dimensionless::category(), CategoryKind::Dimensionless);
        assert_eq!(Length::category(), CategoryKind::Linear);
        assert_eq!(Frequency::category(), CategoryKind::Linear);
        assert_eq!(MomentOfInertia::category(), CategoryKind::Linear);
        assert_eq!(Angle::category(), CategoryKind::Angular);
        assert_eq!(AngularVelocity::category(), CategoryKind::AngularVelocity);
        assert_eq!(
            AngularAcceleration::category(),
            CategoryKind::AngularAcceleration
        );
    }

    #[test]
    fn test_angle_with_other_base_is_angular() {
        // rad·m·s⁻¹ は角速度ではない
        type ArcRate = Dim<typenum::P1, typenum::Z0, typenum::N1, typenum::Z0, typenum::P1>;
        assert_eq!(ArcRate::category(), CategoryKind::Angular);
    }
}
