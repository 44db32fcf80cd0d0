//! コマンド名とコマンド種別の対応

use std::fmt;
use std::str::FromStr;

/// 利用可能なコマンドの種別
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandType {
    /// 辞書の情報を表示します
    Info,
    /// 二つの辞書の差分を表示します
    Diff,
    /// 辞書ソースから辞書を作成します
    Makedict,
    /// 辞書のヘッダーを表示します
    Header,
    /// コマンドの一覧を表示します
    Help,
}

impl CommandType {
    /// コマンドラインで指定する名前を返します。
    pub const fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Diff => "diff",
            Self::Makedict => "makedict",
            Self::Header => "header",
            Self::Help => "help",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 未知のコマンド名
#[derive(Debug, thiserror::Error)]
#[error("Command '{0}' is unknown.")]
pub struct UnknownCommandError(pub String);

impl FromStr for CommandType {
    type Err = UnknownCommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "info" => Ok(Self::Info),
            "diff" => Ok(Self::Diff),
            "makedict" => Ok(Self::Makedict),
            "header" => Ok(Self::Header),
            "help" => Ok(Self::Help),
            _ => Err(UnknownCommandError(name.to_string())),
        }
    }
}
