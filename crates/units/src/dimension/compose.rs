use std::ops::{Add, Sub};

use typenum::{Diff, Sum};

use super::category::StripRule;
use super::dims;
use super::{Dim, Dimension};

type ProductAdjust<A, B> =
    <(<A as Dimension>::Category, <B as Dimension>::Category) as StripRule>::Product;

type QuotientAdjust<A, B> =
    <(<A as Dimension>::Category, <B as Dimension>::Category) as StripRule>::Quotient;

/// 積 `A * B` の結果次元をコンパイル時に決定する trait。
///
/// 指数は基本次元ごとに加算される。ただし角速度・角加速度が角度を含まない有次元量と
/// 組み合わさる場合は、先に角度指数を取り除く（[`StripRule`] を参照）。
///
/// | lhs                   | rhs                  | `Output`              |
/// |-----------------------|----------------------|-----------------------|
/// | `MomentOfInertia`     | `AngularVelocity`    | `AngularMomentum`     |
/// | `MomentOfInertia`     | `Frequency`          | `AngularMomentum`     |
/// | `AngularVelocity`     | `Dimensionless`      | `AngularVelocity`     |
/// | `Length`              | `Length`             | `Area`                |
pub trait Compose<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

/// 商 `A / B` の結果次元をコンパイル時に決定する trait。
///
/// 角度除去規則は積と同じオペランド対で適用されるため、`(a * b) / b` は `a` の次元に戻る。
pub trait Divide<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

pub type Product<A, B> = <A as Compose<B>>::Output;
pub type Quotient<A, B> = <A as Divide<B>>::Output;
pub type Inverse<D> = <dims::Dimensionless as Divide<D>>::Output;

impl<A, B> Compose<B> for A
where
    A: Dimension,
    B: Dimension,
    (A::Category, B::Category): StripRule,
    A::Length: Add<B::Length>,
    A::Mass: Add<B::Mass>,
    A::Time: Add<B::Time>,
    A::Temperature: Add<B::Temperature>,
    A::Angle: Add<B::Angle>,
    Sum<A::Angle, B::Angle>: Add<ProductAdjust<A, B>>,
    Dim<
        Sum<A::Length, B::Length>,
        Sum<A::Mass, B::Mass>,
        Sum<A::Time, B::Time>,
        Sum<A::Temperature, B::Temperature>,
        Sum<Sum<A::Angle, B::Angle>, ProductAdjust<A, B>>,
    >: Dimension,
{
    type Output = Dim<
        Sum<A::Length, B::Length>,
        Sum<A::Mass, B::Mass>,
        Sum<A::Time, B::Time>,
        Sum<A::Temperature, B::Temperature>,
        Sum<Sum<A::Angle, B::Angle>, ProductAdjust<A, B>>,
    >;
}

impl<A, B> Divide<B> for A
where
    A: Dimension,
    B: Dimension,
    (A::Category, B::Category): StripRule,
    A::Length: Sub<B::Length>,
    A::Mass: Sub<B::Mass>,
    A::Time: Sub<B::Time>,
    A::Temperature: Sub<B::Temperature>,
    A::Angle: Sub<B::Angle>,
    Diff<A::Angle, B::Angle>: Add<QuotientAdjust<A, B>>,
    Dim<
        Diff<A::Length, B::Length>,
        Diff<A::Mass, B::Mass>,
        Diff<A::Time, B::Time>,
        Diff<A::Temperature, B::Temperature>,
        Sum<Diff<A::Angle, B::Angle>, QuotientAdjust<A, B>>,
    >: Dimension,
{
    type Output = Dim<
        Diff<A::Length, B::Length>,
        Diff<A::Mass, B::Mass>,
        Diff<A::Time, B::Time>,
        Diff<A::Temperature, B::Temperature>,
        Sum<Diff<A::Angle, B::Angle>, QuotientAdjust<A, B>>,
    >;
}
