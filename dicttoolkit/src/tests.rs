//! dicttoolkitのテストモジュール群
//!
//! 中間辞書の構築と検索、combined形式の読み書きを検証するテストを含みます。

mod intermediate_dict;
