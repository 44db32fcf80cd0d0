//! 辞書ソースから辞書を作成するコマンド
//!
//! combined形式の辞書ソースを中間辞書に読み込み、指定された形式で書き出します。
//! 出力は書き出し先と同じディレクトリの一時ファイルに書き込んだ後、
//! 置き換えられます。

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use dicttoolkit::combined;
use dicttoolkit::errors::DictError;
use dicttoolkit::IntermediateDict;

/// 出力形式
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// バイナリ形式のバージョン2
    Version2,
    /// バイナリ形式のバージョン4
    Version4,
    /// combined形式
    Combined,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "2" => Ok(Self::Version2),
            "4" => Ok(Self::Version4),
            "combined" => Ok(Self::Combined),
            _ => Err("Could not parse a format (2/4/combined)"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Version2 => "2",
            Self::Version4 => "4",
            Self::Combined => "combined",
        })
    }
}

/// コードポイントテーブルの切り替え
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CodePointTableMode {
    On,
    Off,
    Auto,
}

impl FromStr for CodePointTableMode {
    type Err = &'static str;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "auto" => Ok(Self::Auto),
            _ => Err("Could not parse a mode (on/off/auto)"),
        }
    }
}

/// makedictコマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "makedict",
    about = "Converts a source dictionary file to one or several outputs.\n\
             Source is a combined format file.\n\
             Binary version 2 (Jelly Bean), 4, and combined format outputs are accepted."
)]
pub struct Args {
    /// output format version: 2/4/combined
    #[clap(short = 'o', long, value_name = "FORMAT", default_value = "2")]
    format: OutputFormat,

    /// code point table switch: on/off/auto
    #[clap(short = 't', long, value_name = "MODE", default_value = "off")]
    mode: CodePointTableMode,

    /// source dictionary file
    #[clap(value_name = "SRC_DICT")]
    src_dict: PathBuf,

    /// output dictionary file
    #[clap(value_name = "DEST_DICT")]
    dest_dict: PathBuf,
}

/// 辞書の作成中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum MakedictError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 辞書の読み書きのエラー
    #[error("Dictionary processing failed: {0}")]
    Dict(#[from] DictError),

    /// 対応していない出力形式
    #[error("Output format '{0}' is not supported yet. Use '-o combined'.")]
    UnsupportedFormat(OutputFormat),

    /// 一時ファイルの置き換えに失敗
    #[error(transparent)]
    PathPersist(#[from] tempfile::PersistError),
}

pub fn run(args: Args) -> Result<(), MakedictError> {
    if args.format != OutputFormat::Combined {
        return Err(MakedictError::UnsupportedFormat(args.format));
    }
    tracing::debug!(mode = ?args.mode, "code point table");

    eprintln!("Reading the source dictionary...");
    let dict = read_source(&args.src_dict)?;

    eprintln!("Writing the dictionary...");
    write_combined(&dict, &args.dest_dict)?;

    eprintln!(
        "Successfully wrote the dictionary to {}",
        args.dest_dict.display()
    );
    Ok(())
}

/// combined形式の辞書ソースを読み込む
fn read_source(path: &Path) -> Result<IntermediateDict, MakedictError> {
    let file = File::open(path)?;
    let (dict, stats) = combined::read_with_stats(BufReader::new(file))?;
    tracing::info!(
        added = stats.added,
        duplicates = stats.duplicates,
        invalid_length = stats.invalid_length,
        attributes = dict.header().attribute_map().len(),
        "read {}",
        path.display()
    );
    Ok(dict)
}

/// 辞書をcombined形式で書き出す
///
/// 書き出しが完了するまで `path` は変更されません。
fn write_combined(dict: &IntermediateDict, path: &Path) -> Result<(), MakedictError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut wtr = BufWriter::new(temp_file.as_file_mut());
        combined::write(dict, &mut wtr)?;
        wtr.flush()?;
    }
    temp_file.persist(path)?;
    Ok(())
}
