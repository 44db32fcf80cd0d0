//! エラー型の定義
//!
//! このモジュールは、dicttoolkitライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

use crate::code_point::CodePoint;

/// dicttoolkit専用のResult型
///
/// エラー型としてデフォルトで[`DictError`]を使用します。
pub type Result<T, E = DictError> = std::result::Result<T, E>;

/// dicttoolkitのエラー型
///
/// 単語の追加に失敗した理由と、テキスト形式の辞書を読み書きする際に
/// 発生するエラーを表現します。
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// 単語の長さが不正
    ///
    /// 空の単語、または[`MAX_WORD_LENGTH`](crate::MAX_WORD_LENGTH)を超える単語が
    /// 追加されようとした場合に発生します。
    #[error("Invalid word length: {len} (must be 1..={max})")]
    InvalidWordLength {
        /// 単語のコードポイント数
        len: usize,
        /// 許容される最大長
        max: usize,
    },

    /// 単語の重複
    ///
    /// 同じコードポイント列の単語がすでに登録されている場合に発生します。
    #[error("The word has already been added.")]
    DuplicateWord,

    /// Unicodeスカラー値として不正なコードポイント
    #[error("Invalid code point: {0:#x}")]
    InvalidCodePoint(CodePoint),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 整数パースエラー
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    /// UTF-8エンコーディングエラー
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// 標準I/Oエラー
    #[error(transparent)]
    StdIo(#[from] std::io::Error),
}

impl DictError {
    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}
