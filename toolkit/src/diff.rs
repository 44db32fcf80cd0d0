//! 二つの辞書の差分を表示するコマンド

use std::path::PathBuf;

use clap::Parser;

use crate::command::CommandType;

/// diffコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "diff", about = "Shows differences between two dictionaries.")]
pub struct Args {
    /// (plumbing) produce output suitable for a script
    #[clap(short = 'p', long)]
    plumbing: bool,

    /// dictionary file
    #[clap(value_name = "DICT1")]
    dict1: PathBuf,

    /// dictionary file
    #[clap(value_name = "DICT2")]
    dict2: PathBuf,
}

pub fn run(args: Args) {
    tracing::debug!(
        dict1 = %args.dict1.display(),
        dict2 = %args.dict2.display(),
        plumbing = args.plumbing,
        "diff"
    );
    eprintln!(
        "Command '{}' has not been implemented yet.",
        CommandType::Diff
    );
}
