//! 固定サイズ行列 `MatrixMxN<T, R, C>`。
mod cross_ops;
mod ops;
mod square;

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};
use metra_units::{CastFrom, Dimension, Quantity, Scalar, Unit};

use crate::error::{LinalgError, ParseError};
use crate::text;
use crate::vector::VectorN;

pub use square::{Matrix3x3, MatrixNxN};

/// 要素型 `T` の `R` 行 `C` 列の行列（行優先）。
///
/// 平坦化した添字 `i` は `(i / C, i % C)` に対応する。
/// 行列積は内側の次元が一致する場合のみ型検査を通る:
///
/// ```compile_fail
/// use metra_linalg::MatrixMxN;
/// let a = MatrixMxN::<f64, 2, 3>::zeros();
/// let b = MatrixMxN::<f64, 2, 3>::zeros();
/// let _ = a * b;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixMxN<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T: Scalar, const R: usize, const C: usize> MatrixMxN<T, R, C> {
    #[inline]
    pub const fn from_rows(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    /// 全要素が零の行列。
    #[inline]
    pub fn zeros() -> Self {
        Self::from_rows([[T::zero(); C]; R])
    }

    #[inline]
    pub fn filled(value: T) -> Self {
        Self::from_rows([[value; C]; R])
    }

    /// SI 一貫単位での大きさの 2 次元配列から構築する。
    pub fn from_magnitudes(magnitudes: [[f64; C]; R]) -> Self {
        Self::from_rows(magnitudes.map(|row| row.map(T::from_magnitude)))
    }

    pub fn magnitudes(&self) -> [[f64; C]; R] {
        self.data.map(|row| row.map(Scalar::magnitude))
    }

    /// 要素 `(row, col)` を返す。
    ///
    /// # Panics
    ///
    /// `row >= R` または `col >= C` の場合。
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row][col]
    }

    /// # Panics
    ///
    /// `row >= R` または `col >= C` の場合。
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row][col] = value;
    }

    #[inline]
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }

    /// 第 `row` 行を行ベクトルとして返す。
    pub fn row(&self, row: usize) -> VectorN<T, C> {
        VectorN::from_array(self.data[row])
    }

    /// 第 `col` 列を列ベクトルとして返す。
    pub fn column(&self, col: usize) -> VectorN<T, R> {
        VectorN::from_array(self.data.map(|row| row[col]))
    }

    pub fn set_row(&mut self, row: usize, values: VectorN<T, C>) {
        self.data[row] = values.into_array();
    }

    pub fn set_column(&mut self, col: usize, values: VectorN<T, R>) {
        for (row, value) in self.data.iter_mut().zip(values.into_array()) {
            row[col] = value;
        }
    }

    /// 転置行列。
    pub fn transposed(&self) -> MatrixMxN<T, C, R> {
        let mut out = MatrixMxN::<T, C, R>::zeros();
        for r in 0..R {
            for c in 0..C {
                out.data[c][r] = self.data[r][c];
            }
        }
        out
    }

    /// 2 つの行を入れ替える。どちらかの添字が範囲外なら何もしない。
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 >= R || r2 >= R {
            return;
        }
        self.data.swap(r1, r2);
    }

    pub fn fill(&mut self, value: T) {
        self.data = [[value; C]; R];
    }

    pub fn zeroize(&mut self) {
        self.fill(T::zero());
    }

    /// 全要素の大きさが有限（NaN・無限大でない）か。
    pub fn is_valid(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_finite())
    }

    /// 要素型を変換する。許可される組は [`CastFrom`] を参照。
    pub fn cast<U: CastFrom<T>>(self) -> MatrixMxN<U, R, C> {
        MatrixMxN::from_rows(self.data.map(|row| row.map(U::cast_from)))
    }

    pub fn map<U: Scalar, F: FnMut(T) -> U>(self, mut f: F) -> MatrixMxN<U, R, C> {
        MatrixMxN::from_rows(self.data.map(|row| row.map(&mut f)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().flatten()
    }

    /// 行優先で平坦化した要素列。
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    /// 行優先で並んだ長さ `R * C` のスライスから構築する。
    pub fn from_slice(values: &[T]) -> Result<Self, LinalgError> {
        let mut m = Self::zeros();
        m.set_from_slice(values)?;
        Ok(m)
    }

    /// 行優先で並んだ長さ `R * C` のスライスの内容で全要素を置き換える。
    ///
    /// 長さが一致しない場合は何も変更せずに `LengthMismatch` を返す。
    pub fn set_from_slice(&mut self, values: &[T]) -> Result<(), LinalgError> {
        if values.len() != R * C {
            tracing::debug!(expected = R * C, got = values.len(), "rejected matrix slice");
            return Err(LinalgError::LengthMismatch {
                expected: R * C,
                got: values.len(),
            });
        }
        for (i, value) in values.iter().enumerate() {
            self.data[i / C][i % C] = *value;
        }
        Ok(())
    }

    /// 空白区切りテキストから行優先で全要素を読み込む。
    ///
    /// 先頭から `R * C` 個のトークンがすべて有限な数値なら要素を置き換え、残りは無視する。
    /// トークンの不足や不正な値があれば全要素を NaN にする。
    pub fn set_from_string(&mut self, s: &str) {
        match s.parse::<Self>() {
            Ok(m) => *self = m,
            Err(err) => {
                tracing::debug!(%err, "rejected matrix text, elements set to NaN");
                self.fill(T::nan());
            }
        }
    }
}

impl<D: Dimension, const R: usize, const C: usize> MatrixMxN<Quantity<D>, R, C> {
    /// 単位 `U` で表した値の 2 次元配列から構築する。
    pub fn from_units<U: Unit<Dimension = D>>(values: [[f64; C]; R]) -> Self {
        Self::from_rows(values.map(|row| row.map(|v| Quantity::new::<U>(v))))
    }

    pub fn to_units<U: Unit<Dimension = D>>(&self) -> [[f64; C]; R] {
        self.data.map(|row| row.map(|q| q.get::<U>()))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for MatrixMxN<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for MatrixMxN<T, R, C> {
    fn from(data: [[T; C]; R]) -> Self {
        Self::from_rows(data)
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for MatrixMxN<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for MatrixMxN<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

/// 行優先の平坦化添字によるアクセス。
impl<T, const R: usize, const C: usize> Index<usize> for MatrixMxN<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i / C][i % C]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for MatrixMxN<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i / C][i % C]
    }
}

impl<T: Scalar, const R: usize, const C: usize> fmt::Display for MatrixMxN<T, R, C> {
    /// 行内はタブ、行間は改行で区切る（末尾改行なし）。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            text::write_row(f, row)?;
        }
        Ok(())
    }
}

impl<T: Scalar, const R: usize, const C: usize> FromStr for MatrixMxN<T, R, C> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let magnitudes = text::parse_magnitudes(s, R * C)?;
        let mut m = Self::zeros();
        for (i, value) in magnitudes.into_iter().enumerate() {
            m.data[i / C][i % C] = T::from_magnitude(value);
        }
        Ok(m)
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for MatrixMxN<T, R, C>
where
    T: Scalar + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for MatrixMxN<T, R, C>
where
    T: Scalar + RelativeEq<Epsilon = f64>,
{
    fn default_max_relative() -> f64 {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "serde")]
impl<T, const R: usize, const C: usize> serde::Serialize for MatrixMxN<T, R, C>
where
    T: Scalar + serde::Serialize,
{
    /// 行の列（`[[a, b], [c, d]]`）として書き出す。
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter().map(|row| row.as_slice()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const R: usize, const C: usize> serde::Deserialize<'de> for MatrixMxN<T, R, C>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        use serde::de::Error;

        let rows = <Vec<Vec<T>> as serde::Deserialize>::deserialize(deserializer)?;
        if rows.len() != R {
            return Err(De::Error::custom(LinalgError::LengthMismatch {
                expected: R,
                got: rows.len(),
            }));
        }
        let mut m = Self::zeros();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != C {
                return Err(De::Error::custom(LinalgError::RowLengthMismatch {
                    row: r,
                    expected: C,
                    got: row.len(),
                }));
            }
            m.data[r].copy_from_slice(row);
        }
        Ok(m)
    }
}
