/// 行列と行列・行列とベクトルの積を提供する。
///
/// 内側の次元は const ジェネリクスで一致が要求され、結果の要素型は
/// 要素同士の積 `T * U` の型になる。
use std::ops::Mul;

use metra_units::Scalar;

use super::MatrixMxN;
use crate::vector::VectorN;

// ===== 行列 × 行列 =====

impl<T, U, const R: usize, const K: usize, const C: usize> Mul<MatrixMxN<U, K, C>>
    for MatrixMxN<T, R, K>
where
    T: Scalar + Mul<U>,
    U: Scalar,
    <T as Mul<U>>::Output: Scalar,
{
    type Output = MatrixMxN<<T as Mul<U>>::Output, R, C>;

    /// `M<T, R, K> * M<U, K, C> → M<T*U, R, C>`。
    ///
    /// `out_rc = Σ_k a_rk * b_kc`（零から累積）。
    fn mul(self, rhs: MatrixMxN<U, K, C>) -> Self::Output {
        let mut out = MatrixMxN::<<T as Mul<U>>::Output, R, C>::zeros();
        for r in 0..R {
            for c in 0..C {
                let mut acc = <<T as Mul<U>>::Output as Scalar>::zero();
                for k in 0..K {
                    acc += self.data[r][k] * rhs.data[k][c];
                }
                out.data[r][c] = acc;
            }
        }
        out
    }
}

// ===== 行列 × ベクトル =====

impl<T, U, const R: usize, const C: usize> Mul<VectorN<U, C>> for MatrixMxN<T, R, C>
where
    T: Scalar + Mul<U>,
    U: Scalar,
    <T as Mul<U>>::Output: Scalar,
{
    type Output = VectorN<<T as Mul<U>>::Output, R>;

    /// `M<T, R, C> * v<U, C> → v<T*U, R>`（`v` は列ベクトル）。
    fn mul(self, v: VectorN<U, C>) -> Self::Output {
        let mut out = VectorN::<<T as Mul<U>>::Output, R>::zeros();
        for r in 0..R {
            out[r] = self.row(r).dot(&v);
        }
        out
    }
}

impl<T: Scalar, const N: usize> VectorN<T, N> {
    /// テンソル積: `a ⊗ b`（`m_ij = a_i * b_j`）。
    pub fn outer<U, const M: usize>(
        &self,
        other: &VectorN<U, M>,
    ) -> MatrixMxN<<T as Mul<U>>::Output, N, M>
    where
        T: Mul<U>,
        U: Scalar,
        <T as Mul<U>>::Output: Scalar,
    {
        let b = other.as_array();
        MatrixMxN::from_rows(self.as_array().map(|a| b.map(|x| a * x)))
    }
}
