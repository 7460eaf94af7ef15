/// タブ区切りテキスト表現の読み書き。
///
/// 書き出しは `f64` の最短往復表現を使うため、有限値のみからなるデータは
/// 読み戻しで完全に一致する。
use std::fmt;

use metra_units::Scalar;

use crate::error::ParseError;

/// 空白区切りのトークンを先頭から `expected` 個読み取る。
///
/// 前後の空白は無視し、`expected` 個を超えるトークンは読まずに残す。
/// トークンの不足、数値として解釈できないトークン、NaN・無限大のトークンは
/// いずれもエラーになる。
pub(crate) fn parse_magnitudes(s: &str, expected: usize) -> Result<Vec<f64>, ParseError> {
    let mut values = Vec::with_capacity(expected);
    for (index, token) in s.split_whitespace().take(expected).enumerate() {
        let value: f64 = token.parse().map_err(|_| ParseError::InvalidToken {
            index,
            token: token.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ParseError::NonFinite {
                index,
                token: token.to_string(),
            });
        }
        values.push(value);
    }

    if values.len() < expected {
        return Err(ParseError::TokenCount {
            expected,
            got: values.len(),
        });
    }
    Ok(values)
}

/// 大きさをタブ区切りで書き出す。末尾に区切り文字は付けない。
pub(crate) fn write_row<T: Scalar>(f: &mut fmt::Formatter<'_>, row: &[T]) -> fmt::Result {
    for (i, x) in row.iter().enumerate() {
        if i > 0 {
            f.write_str("\t")?;
        }
        write!(f, "{}", x.magnitude())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_splits_any_whitespace() {
        let got = parse_magnitudes("  1\t2.5 \n -3e2  ", 3).unwrap();
        assert_eq!(got, vec![1.0, 2.5, -300.0]);
    }

    #[test]
    fn test_parse_too_few_tokens() {
        assert_eq!(
            parse_magnitudes("1 2", 3),
            Err(ParseError::TokenCount {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            parse_magnitudes("", 1),
            Err(ParseError::TokenCount {
                expected: 1,
                got: 0
            })
        );
    }

    #[test]
    fn test_parse_ignores_extra_tokens() {
        assert_eq!(parse_magnitudes("1 2 3 4", 3), Ok(vec![1.0, 2.0, 3.0]));
        // 読まれない位置のトークンは検査しない
        assert_eq!(parse_magnitudes("1 2 3 oops nan", 3), Ok(vec![1.0, 2.0, 3.0]));
        assert_eq!(parse_magnitudes("5 6", 0), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_invalid_token() {
        assert_eq!(
            parse_magnitudes("1 x 3", 3),
            Err(ParseError::InvalidToken {
                index: 1,
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_nan_and_inf() {
        assert!(matches!(
            parse_magnitudes("NaN 1", 2),
            Err(ParseError::NonFinite { index: 0, .. })
        ));
        assert!(matches!(
            parse_magnitudes("1 inf", 2),
            Err(ParseError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_empty_for_zero_tokens() {
        assert_eq!(parse_magnitudes("   ", 0).unwrap(), Vec::<f64>::new());
    }
}
