use typenum::{B0, B1, Bit, Integer, IsEqual, NInt, NonZero, PInt, U1, U2, Unsigned, Z0};

/// 次元の指数として使用可能な `typenum` 整数。
///
/// 次元カテゴリの判定に必要な述語をコンパイル時のビット（`B0` / `B1`）として公開する。
/// 判定対象は「0 か」「+1 か」「-1 か」「-2 か」の 4 種類のみで、
/// 角速度（rad·s⁻¹）と角加速度（rad·s⁻²）の識別にはこれで十分である。
pub trait Exponent: Integer {
    type IsZero: Bit;
    type IsPlusOne: Bit;
    type IsMinusOne: Bit;
    type IsMinusTwo: Bit;
}

impl Exponent for Z0 {
    type IsZero = B1;
    type IsPlusOne = B0;
    type IsMinusOne = B0;
    type IsMinusTwo = B0;
}

impl<U> Exponent for PInt<U>
where
    U: Unsigned + NonZero + IsEqual<U1>,
    <U as IsEqual<U1>>::Output: Bit,
{
    type IsZero = B0;
    type IsPlusOne = <U as IsEqual<U1>>::Output;
    type IsMinusOne = B0;
    type IsMinusTwo = B0;
}

impl<U> Exponent for NInt<U>
where
    U: Unsigned + NonZero + IsEqual<U1> + IsEqual<U2>,
    <U as IsEqual<U1>>::Output: Bit,
    <U as IsEqual<U2>>::Output: Bit,
{
    type IsZero = B0;
    type IsPlusOne = B0;
    type IsMinusOne = <U as IsEqual<U1>>::Output;
    type IsMinusTwo = <U as IsEqual<U2>>::Output;
}
