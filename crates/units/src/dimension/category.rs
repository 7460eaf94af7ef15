//! 次元カテゴリと角度除去規則。
//!
//! 次元はコンパイル時に 5 つのカテゴリのいずれかへ分類される。
//! 積・商の結果次元は、オペランドのカテゴリ対に対する表引き（[`StripRule`]）で
//! 角度指数の補正量を決めてから指数の加減算を行う。
use typenum::{B0, B1, Bit, Integer, N1, P1, Z0};

/// 実行時に参照できるカテゴリ識別子。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Dimensionless,
    Linear,
    Angular,
    AngularVelocity,
    AngularAcceleration,
}

/// 次元カテゴリを表す型レベルタグ。
pub trait Category: 'static {
    const KIND: CategoryKind;
}

/// 全指数が 0。
pub enum Dimensionless {}
/// 角度を含まない非無次元量（m, kg·m², s⁻¹ など）。
pub enum Linear {}
/// 角度を含むが角速度・角加速度ではない量（rad, rad²·s⁻² など）。
pub enum Angular {}
/// rad·s⁻¹
pub enum AngularVelocity {}
/// rad·s⁻²
pub enum AngularAcceleration {}

impl Category for Dimensionless {
    const KIND: CategoryKind = CategoryKind::Dimensionless;
}

impl Category for Linear {
    const KIND: CategoryKind = CategoryKind::Linear;
}

impl Category for Angular {
    const KIND: CategoryKind = CategoryKind::Angular;
}

impl Category for AngularVelocity {
    const KIND: CategoryKind = CategoryKind::AngularVelocity;
}

impl Category for AngularAcceleration {
    const KIND: CategoryKind = CategoryKind::AngularAcceleration;
}

/// 3 ビットの論理積。長さ・質量・温度の指数がすべて 0 かを判定するのに使う。
pub trait AllSet {
    type Output: Bit;
}

impl AllSet for (B1, B1, B1) {
    type Output = B1;
}

impl<Y, Z> AllSet for (B0, Y, Z) {
    type Output = B0;
}

impl<Z> AllSet for (B1, B0, Z) {
    type Output = B0;
}

impl AllSet for (B1, B1, B0) {
    type Output = B0;
}

/// 判定ビット列からカテゴリを選択する。
///
/// タプルの並びは `(rest, t_zero, a_zero, a_plus_one, t_minus_one, t_minus_two)`。
/// `rest` は長さ・質量・温度の指数がすべて 0 であることを表す。
/// 各 impl は互いに重ならず、全 64 通りを網羅する。
pub trait Select {
    type Output: Category;
}

// 角度指数 0
impl<P, Q, R> Select for (B1, B1, B1, P, Q, R) {
    type Output = Dimensionless;
}

impl<P, Q, R> Select for (B1, B0, B1, P, Q, R) {
    type Output = Linear;
}

impl<T, P, Q, R> Select for (B0, T, B1, P, Q, R) {
    type Output = Linear;
}

// 角度指数 +1、他の基本次元なし
impl<T, R> Select for (B1, T, B0, B1, B1, R) {
    type Output = AngularVelocity;
}

impl<T> Select for (B1, T, B0, B1, B0, B1) {
    type Output = AngularAcceleration;
}

impl<T> Select for (B1, T, B0, B1, B0, B0) {
    type Output = Angular;
}

// その他の角度を含む次元
impl<T, Q, R> Select for (B1, T, B0, B0, Q, R) {
    type Output = Angular;
}

impl<T, P, Q, R> Select for (B0, T, B0, P, Q, R) {
    type Output = Angular;
}

/// カテゴリ対 `(lhs, rhs)` に対する角度指数の補正量。
///
/// 角速度・角加速度が角度を含まない有次元量と出会ったとき、ラジアンを無次元比として
/// 扱い、角速度側の角度指数を取り除いてから合成する。
///
/// | lhs                    | rhs                    | `Product` | `Quotient` |
/// |------------------------|------------------------|-----------|------------|
/// | 角速度 / 角加速度       | `Linear`               | `N1`      | `N1`       |
/// | `Linear`               | 角速度 / 角加速度       | `N1`      | `P1`       |
/// | それ以外                |                        | `Z0`      | `Z0`       |
///
/// 商の補正は「除去後の lhs − 除去後の rhs」になるよう符号を選んでいるため、
/// `(x * ω) / ω` は常に `x` と同じ次元へ戻る。
pub trait StripRule {
    type Product: Integer;
    type Quotient: Integer;
}

macro_rules! strip_rule {
    ($($lhs:ident, $rhs:ident => $prod:ty, $quot:ty;)*) => {
        $(
            impl StripRule for ($lhs, $rhs) {
                type Product = $prod;
                type Quotient = $quot;
            }
        )*
    };
}

strip_rule! {
    Dimensionless, Dimensionless => Z0, Z0;
    Dimensionless, Linear => Z0, Z0;
    Dimensionless, Angular => Z0, Z0;
    Dimensionless, AngularVelocity => Z0, Z0;
    Dimensionless, AngularAcceleration => Z0, Z0;

    Linear, Dimensionless => Z0, Z0;
    Linear, Linear => Z0, Z0;
    Linear, Angular => Z0, Z0;
    Linear, AngularVelocity => N1, P1;
    Linear, AngularAcceleration => N1, P1;

    Angular, Dimensionless => Z0, Z0;
    Angular, Linear => Z0, Z0;
    Angular, Angular => Z0, Z0;
    Angular, AngularVelocity => Z0, Z0;
    Angular, AngularAcceleration => Z0, Z0;

    AngularVelocity, Dimensionless => Z0, Z0;
    AngularVelocity, Linear => N1, N1;
    AngularVelocity, Angular => Z0, Z0;
    AngularVelocity, AngularVelocity => Z0, Z0;
    AngularVelocity, AngularAcceleration => Z0, Z0;

    AngularAcceleration, Dimensionless => Z0, Z0;
    AngularAcceleration, Linear => N1, N1;
    AngularAcceleration, Angular => Z0, Z0;
    AngularAcceleration, AngularVelocity => Z0, Z0;
    AngularAcceleration, AngularAcceleration => Z0, Z0;
}
