#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinalgError {
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("row length mismatch: row {row}, expected {expected}, got {got}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// テキスト表現の読み込みに失敗した理由。
///
/// `set_from_string` は失敗時に全成分を NaN にするだけで理由を返さない。
/// 理由が必要な場合は `str::parse` 経由でこの型を受け取る。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("too few tokens: expected {expected}, got {got}")]
    TokenCount { expected: usize, got: usize },
    #[error("invalid token at position {index}: {token:?}")]
    InvalidToken { index: usize, token: String },
    #[error("non-finite token at position {index}: {token:?}")]
    NonFinite { index: usize, token: String },
}
