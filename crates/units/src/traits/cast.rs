use crate::dimension::{Dimension, dims};
use crate::quantity::Quantity;

use super::Scalar;

/// 要素型 `T` から `Self` への明示的な変換。
///
/// 許可される組は次の表のとおりで、それ以外はコンパイルエラーになる。
///
/// | 変換元                       | 変換先                       | 意味               |
/// |-----------------------------|-----------------------------|--------------------|
/// | `T`                         | `T`                         | 恒等                |
/// | `Quantity<D>`               | `f64`                       | 次元を剥がす         |
/// | `f64`                       | `Quantity<D>`               | 次元を付与する       |
/// | `Quantity<Angle>`           | `Quantity<Dimensionless>`   | ラジアンは無次元比    |
/// | `Quantity<Dimensionless>`   | `Quantity<Angle>`           | 同上               |
///
/// ```compile_fail
/// use metra_units::{CastFrom, Length, Velocity};
/// let _ = Velocity::cast_from(Length::from_base(1.0));
/// ```
pub trait CastFrom<T>: Scalar {
    fn cast_from(value: T) -> Self;
}

impl<T: Scalar> CastFrom<T> for T {
    #[inline]
    fn cast_from(value: T) -> T {
        value
    }
}

impl<D: Dimension> CastFrom<Quantity<D>> for f64 {
    #[inline]
    fn cast_from(value: Quantity<D>) -> f64 {
        value.value()
    }
}

impl<D: Dimension> CastFrom<f64> for Quantity<D> {
    #[inline]
    fn cast_from(value: f64) -> Self {
        Quantity::from_base(value)
    }
}

impl CastFrom<Quantity<dims::Dimensionless>> for Quantity<dims::Angle> {
    #[inline]
    fn cast_from(value: Quantity<dims::Dimensionless>) -> Self {
        value.into()
    }
}

impl CastFrom<Quantity<dims::Angle>> for Quantity<dims::Dimensionless> {
    #[inline]
    fn cast_from(value: Quantity<dims::Angle>) -> Self {
        value.into()
    }
}
