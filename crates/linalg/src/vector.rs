//! 固定長ベクトル `VectorN<T, N>`。
mod ops;
mod vector3;

use std::fmt;
use std::ops::{Index, IndexMut, Mul};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};
use metra_units::{CastFrom, Dimension, Quantity, Scalar, Unit};

use crate::error::{LinalgError, ParseError};
use crate::text;

pub use vector3::Vector3;

/// 要素型 `T` の固定長 `N` ベクトル。
///
/// 要素は値として保持され、コピーは要素配列の複製になる。
/// 要素の次元は型で固定され、異なる次元のベクトル同士の加算はコンパイルエラーになる:
///
/// ```compile_fail
/// use metra_linalg::Vector3;
/// use metra_units::{Length, Velocity};
/// let x = Vector3::new(Length::zero(), Length::zero(), Length::zero());
/// let v = Vector3::new(Velocity::zero(), Velocity::zero(), Velocity::zero());
/// let _ = x + v;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorN<T, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> VectorN<T, N> {
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// 全成分が零のベクトル。
    #[inline]
    pub fn zeros() -> Self {
        Self::from_array([T::zero(); N])
    }

    #[inline]
    pub fn filled(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// SI 一貫単位での大きさの配列から構築する。
    pub fn from_magnitudes(magnitudes: [f64; N]) -> Self {
        Self::from_array(magnitudes.map(T::from_magnitude))
    }

    pub fn magnitudes(&self) -> [f64; N] {
        self.data.map(Scalar::magnitude)
    }

    /// 成分 `i` を返す。
    ///
    /// # Panics
    ///
    /// `i >= N` の場合。
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[i]
    }

    /// # Panics
    ///
    /// `i >= N` の場合。
    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        self.data[i] = value;
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// 長さ `N` のスライスから構築する。
    pub fn from_slice(values: &[T]) -> Result<Self, LinalgError> {
        let mut v = Self::zeros();
        v.set_from_slice(values)?;
        Ok(v)
    }

    /// 長さ `N` のスライスの内容で全成分を置き換える。
    ///
    /// 長さが一致しない場合は何も変更せずに `LengthMismatch` を返す。
    pub fn set_from_slice(&mut self, values: &[T]) -> Result<(), LinalgError> {
        if values.len() != N {
            tracing::debug!(expected = N, got = values.len(), "rejected vector slice");
            return Err(LinalgError::LengthMismatch {
                expected: N,
                got: values.len(),
            });
        }
        self.data.copy_from_slice(values);
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.data = [value; N];
    }

    pub fn zeroize(&mut self) {
        self.fill(T::zero());
    }

    /// 全成分の大きさが有限（NaN・無限大でない）か。
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    /// 長さの 2 乗 `Σ x_i²`。次元は要素の次元の 2 乗になる。
    pub fn length2(&self) -> <T as Mul<T>>::Output
    where
        T: Mul<T>,
        <T as Mul<T>>::Output: Scalar,
    {
        self.dot(self)
    }

    /// ユークリッド長。次元は要素と同じ。
    pub fn length(&self) -> T {
        let sum: f64 = self.data.iter().map(|x| x.magnitude() * x.magnitude()).sum();
        T::from_magnitude(sum.sqrt())
    }

    /// 各成分を長さで割った無次元ベクトル。
    ///
    /// 長さが 0 の場合は NaN を出さずに零ベクトルを返す。
    pub fn normalized(&self) -> VectorN<f64, N> {
        let length = self.length().magnitude();
        if length == 0.0 {
            return VectorN::zeros();
        }
        VectorN::from_array(self.data.map(|x| x.magnitude() / length))
    }

    /// 内積 `Σ a_i * b_i`。結果の次元は要素同士の積の次元（角度除去規則を含む）。
    pub fn dot<U>(&self, rhs: &VectorN<U, N>) -> <T as Mul<U>>::Output
    where
        T: Mul<U>,
        U: Scalar,
        <T as Mul<U>>::Output: Scalar,
    {
        let mut acc = <<T as Mul<U>>::Output as Scalar>::zero();
        for i in 0..N {
            acc += self.data[i] * rhs.data[i];
        }
        acc
    }

    /// 要素型を変換する。許可される組は [`CastFrom`] を参照。
    pub fn cast<U: CastFrom<T>>(self) -> VectorN<U, N> {
        VectorN::from_array(self.data.map(U::cast_from))
    }

    pub fn map<U: Scalar, F: FnMut(T) -> U>(self, f: F) -> VectorN<U, N> {
        VectorN::from_array(self.data.map(f))
    }

    /// タブ区切りテキストから全成分を読み込む。
    ///
    /// 先頭から `N` 個のトークンがすべて有限な数値なら成分を置き換える（残りのトークンは無視する）。
    /// トークンの不足や不正な値があれば全成分を NaN にする（[`is_valid`](Self::is_valid) が `false` になる）。
    pub fn set_from_string(&mut self, s: &str) {
        match s.parse::<Self>() {
            Ok(v) => *self = v,
            Err(err) => {
                tracing::debug!(%err, "rejected vector text, components set to NaN");
                self.data = [T::nan(); N];
            }
        }
    }
}

impl<D: Dimension, const N: usize> VectorN<Quantity<D>, N> {
    /// 単位 `U` で表した値の配列から構築する。
    pub fn from_units<U: Unit<Dimension = D>>(values: [f64; N]) -> Self {
        Self::from_array(values.map(|v| Quantity::new::<U>(v)))
    }

    /// 単位 `U` で表した値の配列。
    pub fn to_units<U: Unit<Dimension = D>>(&self) -> [f64; N] {
        self.data.map(|q| q.get::<U>())
    }
}

impl<T: Scalar, const N: usize> Default for VectorN<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for VectorN<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Scalar, const N: usize> From<VectorN<T, N>> for [T; N] {
    fn from(v: VectorN<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> Index<usize> for VectorN<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for VectorN<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a VectorN<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for VectorN<T, N> {
    /// `N` 個の大きさをタブで区切って書き出す（末尾改行なし）。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_row(f, &self.data)
    }
}

impl<T: Scalar, const N: usize> FromStr for VectorN<T, N> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let magnitudes = text::parse_magnitudes(s, N)?;
        let mut data = [T::zero(); N];
        for (x, m) in data.iter_mut().zip(magnitudes) {
            *x = T::from_magnitude(m);
        }
        Ok(Self::from_array(data))
    }
}

impl<T, const N: usize> AbsDiffEq for VectorN<T, N>
where
    T: Scalar + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for VectorN<T, N>
where
    T: Scalar + RelativeEq<Epsilon = f64>,
{
    fn default_max_relative() -> f64 {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "serde")]
impl<T, const N: usize> serde::Serialize for VectorN<T, N>
where
    T: Scalar + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for VectorN<T, N>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let values = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_slice(&values).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use metra_units::unit::{Foot, Meter};
    use metra_units::{Area, Length};

    #[test]
    fn test_default_is_zero() {
        let v = VectorN::<Length, 4>::default();
        assert_eq!(v.magnitudes(), [0.0; 4]);
        assert!(v.is_valid());
    }

    #[test]
    fn test_get_set_index() {
        let mut v = VectorN::<f64, 3>::zeros();
        v.set(1, 2.0);
        v[2] = 3.0;
        assert_eq!(v.get(1), 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.as_slice(), &[0.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let v = VectorN::<f64, 3>::zeros();
        let _ = v.get(3);
    }

    #[test]
    fn test_is_valid_detects_nan_and_inf() {
        let mut v = VectorN::from_array([1.0, 2.0, 3.0]);
        assert!(v.is_valid());
        v[1] = f64::NAN;
        assert!(!v.is_valid());
        v[1] = f64::INFINITY;
        assert!(!v.is_valid());
    }

    #[test]
    fn test_length_and_length2() {
        let v = VectorN::from_array([3.0, 4.0, 12.0].map(Length::from_base));
        let l2: Area = v.length2();
        assert_eq!(l2.value(), 169.0);
        let l: Length = v.length();
        assert_eq!(l.value(), 13.0);
    }

    #[test]
    fn test_normalized_known_value() {
        let v = VectorN::from_array([1.0, 2.0, 3.0]);
        let n = v.normalized();
        assert_relative_eq!(n[0], 0.267261, epsilon = 1e-5);
        assert_relative_eq!(n[1], 0.534522, epsilon = 1e-5);
        assert_relative_eq!(n[2], 0.801784, epsilon = 1e-5);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_zero_vector_stays_zero() {
        let v = VectorN::<Length, 3>::zeros();
        let n = v.normalized();
        assert_eq!(n, VectorN::zeros());
        assert!(n.is_valid());
    }

    #[test]
    fn test_slice_round_trip() {
        let v = VectorN::from_array([1.0, -2.0, 0.5, 8.0]);
        let flat = v.to_vec();
        assert_eq!(VectorN::<f64, 4>::from_slice(&flat).unwrap(), v);
    }

    #[test]
    fn test_set_from_slice_rejects_wrong_length() {
        let mut v = VectorN::from_array([1.0, 2.0, 3.0]);
        let err = v.set_from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::LengthMismatch {
                expected: 3,
                got: 2
            }
        );
        // 失敗時は元の値を保持する
        assert_eq!(v, VectorN::from_array([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_fill_and_zeroize() {
        let mut v = VectorN::<f64, 3>::zeros();
        v.fill(2.5);
        assert_eq!(v.magnitudes(), [2.5; 3]);
        v.zeroize();
        assert_eq!(v.magnitudes(), [0.0; 3]);
    }

    #[test]
    fn test_to_string_is_tab_separated() {
        let v = VectorN::from_array([1.0, -2.5, 3e-7]);
        assert_eq!(v.to_string(), "1\t-2.5\t0.0000003");
    }

    #[test]
    fn test_set_from_string_round_trip() {
        let v = VectorN::from_array([0.1, -1.0 / 3.0, 6.02214076e23].map(Length::from_base));
        let mut w = VectorN::<Length, 3>::zeros();
        w.set_from_string(&v.to_string());
        assert_eq!(w, v);
    }

    #[test]
    fn test_set_from_string_malformed_is_all_nan() {
        let mut v = VectorN::from_array([1.0, 2.0, 3.0]);
        v.set_from_string("lorem ipsum");
        assert!(!v.is_valid());
        assert!(v.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_set_from_string_partial_failure_is_all_nan() {
        let mut v = VectorN::from_array([1.0, 2.0, 3.0]);
        v.set_from_string("1.0 2.0 nan");
        assert!(v.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_set_from_string_ignores_trailing_tokens() {
        let mut v = VectorN::<f64, 3>::zeros();
        v.set_from_string("1 2 3 4");
        assert!(v.is_valid());
        assert_eq!(v, VectorN::from_array([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_parse_reports_failing_token() {
        let err = "1 2 oops".parse::<VectorN<f64, 3>>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                index: 2,
                token: "oops".to_string()
            }
        );
    }

    #[test]
    fn test_cast_strip_and_attach() {
        let v = VectorN::from_array([1.0, 2.0].map(Length::from_base));
        let raw: VectorN<f64, 2> = v.cast();
        assert_eq!(raw, VectorN::from_array([1.0, 2.0]));
        let back: VectorN<Length, 2> = raw.cast();
        assert_eq!(back, v);
    }

    #[test]
    fn test_units_round_trip() {
        let v = VectorN::<Length, 2>::from_units::<Foot>([10.0, 20.0]);
        let m = v.to_units::<Meter>();
        assert_relative_eq!(m[0], 3.048, epsilon = 1e-12);
        assert_relative_eq!(m[1], 6.096, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_equality_has_no_tolerance() {
        let a = VectorN::from_array([1.0, 2.0]);
        let b = VectorN::from_array([1.0, 2.0 + 1e-15]);
        assert_ne!(a, b);
        assert_relative_eq!(a, b, max_relative = 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_sequence() {
        let v = VectorN::from_array([1.5, -2.0].map(Length::from_base));
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
        let back: VectorN<Length, 2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert!(serde_json::from_str::<VectorN<Length, 2>>("[1.0,2.0,3.0]").is_err());
    }
}
