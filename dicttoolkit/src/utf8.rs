//! UTF-8文字列とコードポイント列の相互変換

use crate::code_point::{CodePoint, CodePointArrayView};
use crate::errors::{DictError, Result};

/// 文字列をコードポイント列に変換します。
///
/// `&str` は常に正しいUTF-8であるため、この変換は失敗しません。
/// 冗長な符号化を含むバイト列は [`std::str::from_utf8`] の時点で拒否されます。
///
/// # 例
///
/// ```
/// let cps = dicttoolkit::utf8::code_points("a\u{3042}");
/// assert_eq!(cps, vec![0x61, 0x3042]);
/// ```
pub fn code_points(s: &str) -> Vec<CodePoint> {
    s.chars().map(CodePoint::from).collect()
}

/// コードポイント列をUTF-8文字列に変換します。
///
/// # エラー
///
/// サロゲート領域の値や `U+10FFFF` を超える値が含まれる場合、
/// [`DictError::InvalidCodePoint`] を返します。
pub fn to_string<'a, V>(code_points: V) -> Result<String>
where
    V: Into<CodePointArrayView<'a>>,
{
    code_points
        .into()
        .iter()
        .map(|&cp| char::from_u32(cp).ok_or(DictError::InvalidCodePoint(cp)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_points() {
        assert!(code_points("").is_empty());
        assert_eq!(code_points("test"), vec![0x74, 0x65, 0x73, 0x74]);
        assert_eq!(
            code_points("\u{3042}a\u{03C2}\u{0410}"),
            vec![0x3042, 0x61, 0x03C2, 0x0410]
        );
        assert_eq!(
            code_points("\u{1F36A}?\u{1F752}"),
            vec![0x1F36A, 0x3F, 0x1F752]
        );
    }

    #[test]
    fn test_redundant_sequences_are_rejected() {
        assert!(std::str::from_utf8(b"\xC0\xAF").is_err());
        assert!(std::str::from_utf8(b"\xE0\x80\xAF").is_err());
        assert!(std::str::from_utf8(b"\xF0\x80\x80\xAF").is_err());
    }

    #[test]
    fn test_to_string() {
        let cps: Vec<CodePoint> = vec![0x74, 0x65, 0x73, 0x74];
        assert_eq!(to_string(&cps).unwrap(), "test");

        let cps: Vec<CodePoint> = vec![0x00E0, 0x03C2, 0x0430, 0x3042, 0x1F36A, 0x1F752];
        assert_eq!(
            to_string(&cps).unwrap(),
            "\u{00E0}\u{03C2}\u{0430}\u{3042}\u{1F36A}\u{1F752}"
        );
    }

    #[test]
    fn test_to_string_invalid() {
        let cps: Vec<CodePoint> = vec![0x61, 0xD800];
        assert!(matches!(
            to_string(&cps),
            Err(DictError::InvalidCodePoint(0xD800))
        ));
        let cps: Vec<CodePoint> = vec![0x110000];
        assert!(to_string(&cps).is_err());
    }
}
