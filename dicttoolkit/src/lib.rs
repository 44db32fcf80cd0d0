//! # dicttoolkit
//!
//! 入力メソッド用の辞書を構築・検査するためのライブラリです。
//!
//! ## 概要
//!
//! このライブラリの中心は、バイナリ辞書へシリアライズする前の単語と言語情報を
//! メモリ上に蓄積する中間辞書です。中間辞書はパトリシアトライとして実装され、
//! 単語を一つずつ追加しながら共通の接頭辞を分割していきます。
//!
//! ## 主な機能
//!
//! - **中間辞書**: 単語の追加と検索を行うパトリシアトライ
//! - **単語プロパティ**: ユニグラム確率、ショートカット、n-gram情報
//! - **combined形式**: 人が読めるテキスト形式の辞書の読み書き
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use dicttoolkit::{combined, utf8};
//!
//! let source = "dictionary=main:en_us,locale=en_US\n \
//!               word=hello,f=120\n \
//!               word=help,f=90\n \
//!               word=he,f=60\n";
//!
//! let dict = combined::read(source.as_bytes())?;
//! assert_eq!(dict.word_count(), 3);
//!
//! let hello = dict.get_word_property(&utf8::code_points("hello")).unwrap();
//! assert_eq!(hello.probability(), 120);
//! assert!(dict.get_word_property(&utf8::code_points("hel")).is_none());
//!
//! let mut output = vec![];
//! combined::write(&dict, &mut output)?;
//! assert!(String::from_utf8(output)?.starts_with("dictionary=main:en_us,locale=en_US\n"));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// コードポイントとその列のビュー
pub mod code_point;

/// combined形式の辞書の読み書き
pub mod combined;

/// 中間辞書のデータ構造
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// UTF-8とコードポイント列の相互変換
pub mod utf8;

/// 内部ユーティリティ関数
pub mod utils;

/// 単語プロパティ
pub mod word_property;

#[cfg(test)]
mod tests;

// Re-exports
pub use code_point::{CodePoint, CodePointArrayView};
pub use dictionary::{IntermediateDict, IntermediateDictHeader, MAX_WORD_LENGTH};
pub use word_property::{
    HistoricalInfo, NgramProperty, PrevWord, ProbabilityInfo, ShortcutProperty, UnigramProperty,
    WordProperty,
};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
