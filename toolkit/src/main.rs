//! 入力メソッド用辞書ツールキットのメインエントリーポイント
//!
//! 最初の引数でコマンドを選び、残りの引数をそのコマンドに渡します。
//! 各コマンドは自身の引数を解析し、終了コードを返します。
//!
//! ログの出力は `RUST_LOG` 環境変数で制御できます。

mod command;
mod diff;
mod header;
mod help;
mod info;
mod makedict;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use crate::{command::CommandType, makedict::MakedictError};

/// プログラム名とコマンド名を合わせた最小の引数の数
const MIN_ARG_COUNT: usize = 2;

/// コマンドの実行中に発生する可能性のあるエラー
///
/// 各コマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// 辞書作成中のエラー
    #[error(transparent)]
    Makedict(#[from] MakedictError),

    /// 出力中のエラー
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// コマンドの引数を解析して実行する
///
/// 引数の誤りはclapのメッセージを表示して `1` を、`--help` は `0` を返します。
fn execute<A, F>(args: &[String], run: F) -> u8
where
    A: Parser,
    F: FnOnce(A) -> Result<(), ToolkitError>,
{
    let args = match A::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => {
            // Printing can only fail when the terminal is gone.
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };
    match run(args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// コマンドライン引数全体を受け取り、終了コードを返す
fn dispatch(argv: &[String]) -> u8 {
    let program = argv.first().map_or("dicttoolkit", String::as_str);
    if argv.len() < MIN_ARG_COUNT {
        eprintln!("Usage: {program} <command> [arguments]");
        return 1;
    }
    let command_type = match argv[1].parse::<CommandType>() {
        Ok(command_type) => command_type,
        Err(e) => {
            eprintln!(
                "{e} Try '{program} {}' for more information.",
                CommandType::Help
            );
            return 1;
        }
    };
    tracing::debug!(command = %command_type, "dispatch");

    let args = &argv[1..];
    match command_type {
        CommandType::Info => execute(args, |args: info::Args| {
            info::run(args);
            Ok(())
        }),
        CommandType::Diff => execute(args, |args: diff::Args| {
            diff::run(args);
            Ok(())
        }),
        CommandType::Header => execute(args, |args: header::Args| {
            header::run(args);
            Ok(())
        }),
        CommandType::Makedict => {
            execute(args, |args: makedict::Args| Ok(makedict::run(args)?))
        }
        CommandType::Help => execute(args, |args: help::Args| Ok(help::run(args)?)),
    }
}

fn main() -> ExitCode {
    // Default: warn globally, info for this tool and the library.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,dicttoolkit=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().collect();
    ExitCode::from(dispatch(&argv))
}
