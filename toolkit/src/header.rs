//! 辞書のヘッダーを表示するコマンド

use std::path::PathBuf;

use clap::Parser;

use crate::command::CommandType;

/// headerコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "header", about = "Prints the header contents of a dictionary file.")]
pub struct Args {
    /// (plumbing) produce output suitable for a script
    #[clap(short = 'p', long)]
    plumbing: bool,

    /// dictionary file
    #[clap(value_name = "DICT")]
    dict: PathBuf,
}

pub fn run(args: Args) {
    tracing::debug!(
        dict = %args.dict.display(),
        plumbing = args.plumbing,
        "header"
    );
    eprintln!(
        "Command '{}' has not been implemented yet.",
        CommandType::Header
    );
}
