//! 辞書の情報を表示するコマンド

use std::path::PathBuf;

use clap::Parser;

use crate::command::CommandType;

/// infoコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "info", about = "Prints various information about a dictionary file.")]
pub struct Args {
    /// (plumbing) produce output suitable for a script
    #[clap(short = 'p', long)]
    plumbing: bool,

    /// dictionary file name
    #[clap(value_name = "DICT")]
    dict: PathBuf,

    /// word to show information
    #[clap(value_name = "WORD")]
    words: Vec<String>,
}

pub fn run(args: Args) {
    tracing::debug!(
        dict = %args.dict.display(),
        words = args.words.len(),
        plumbing = args.plumbing,
        "info"
    );
    eprintln!(
        "Command '{}' has not been implemented yet.",
        CommandType::Info
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse() {
        let args = Args::try_parse_from(["info", "-p", "main.dict", "hello", "world"]).unwrap();
        assert!(args.plumbing);
        assert_eq!(args.dict, PathBuf::from("main.dict"));
        assert_eq!(args.words, ["hello", "world"]);

        let args = Args::try_parse_from(["info", "main.dict"]).unwrap();
        assert!(!args.plumbing);
        assert!(args.words.is_empty());

        assert!(Args::try_parse_from(["info"]).is_err());
    }
}
