//! コードポイント列のビュー
//!
//! このモジュールは、辞書のキーとなるUnicodeスカラー値の列を
//! コピーなしで参照・切り出すための軽量なビューを提供します。

use std::ops::Index;
use std::slice;

/// Unicodeスカラー値
pub type CodePoint = u32;

/// 所有権を持たないコードポイント列のビュー
///
/// 外部が所有するバッファの一部を指します。[`skip()`](Self::skip) と
/// [`limit()`](Self::limit) はいずれもメモリ確保を行いません。
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq, Hash)]
pub struct CodePointArrayView<'a> {
    data: &'a [CodePoint],
}

impl<'a> CodePointArrayView<'a> {
    /// スライスから新しいビューを作成します。
    #[inline(always)]
    pub const fn new(data: &'a [CodePoint]) -> Self {
        Self { data }
    }

    /// 要素数を返します。
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// 空のビューかどうかを返します。
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `i` 番目の要素を返します。範囲外の場合は `None` を返します。
    #[inline(always)]
    pub fn get(&self, i: usize) -> Option<CodePoint> {
        self.data.get(i).copied()
    }

    /// 先頭の `n` 要素を読み飛ばしたビューを返します。
    ///
    /// # パニック
    ///
    /// `n` が [`len()`](Self::len) より大きい場合にパニックします。
    #[inline(always)]
    pub fn skip(&self, n: usize) -> Self {
        assert!(
            n <= self.data.len(),
            "skip({n}) is out of range for a view of size {}",
            self.data.len()
        );
        Self {
            data: &self.data[n..],
        }
    }

    /// 先頭の `n` 要素に切り詰めたビューを返します。
    ///
    /// # パニック
    ///
    /// `n` が [`len()`](Self::len) より大きい場合にパニックします。
    #[inline(always)]
    pub fn limit(&self, n: usize) -> Self {
        assert!(
            n <= self.data.len(),
            "limit({n}) is out of range for a view of size {}",
            self.data.len()
        );
        Self {
            data: &self.data[..n],
        }
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'a, CodePoint> {
        self.data.iter()
    }

    #[inline(always)]
    pub const fn as_slice(&self) -> &'a [CodePoint] {
        self.data
    }

    /// 参照先をコピーした `Vec` を返します。
    #[inline(always)]
    pub fn to_vec(&self) -> Vec<CodePoint> {
        self.data.to_vec()
    }

    /// `other` との共通接頭辞の長さを返します。
    pub fn common_prefix_len(&self, other: CodePointArrayView) -> usize {
        self.data
            .iter()
            .zip(other.data)
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl Index<usize> for CodePointArrayView<'_> {
    type Output = CodePoint;

    #[inline(always)]
    fn index(&self, i: usize) -> &CodePoint {
        &self.data[i]
    }
}

impl<'a> From<&'a [CodePoint]> for CodePointArrayView<'a> {
    #[inline(always)]
    fn from(data: &'a [CodePoint]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a Vec<CodePoint>> for CodePointArrayView<'a> {
    #[inline(always)]
    fn from(data: &'a Vec<CodePoint>) -> Self {
        Self::new(data.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [CodePoint; N]> for CodePointArrayView<'a> {
    #[inline(always)]
    fn from(data: &'a [CodePoint; N]) -> Self {
        Self::new(data.as_slice())
    }
}

impl<'a> IntoIterator for CodePointArrayView<'a> {
    type Item = &'a CodePoint;
    type IntoIter = slice::Iter<'a, CodePoint>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
