//! コマンドの一覧を表示するコマンド

use std::io::{self, Write};

use clap::{CommandFactory, Parser};

use crate::{diff, header, info, makedict};

/// helpコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "help", about = "Show this help list.")]
pub struct Args {}

/// 一つのコマンドの使い方を書き出す
fn write_usage<A, W>(wtr: &mut W) -> io::Result<()>
where
    A: CommandFactory,
    W: Write,
{
    let mut command = A::command();
    writeln!(wtr, "*** {}", command.get_name())?;
    writeln!(wtr, "{}", command.render_usage())?;
    if let Some(about) = command.get_about() {
        writeln!(wtr, "{about}")?;
    }
    writeln!(wtr)?;
    Ok(())
}

/// すべてのコマンドの使い方を書き出す
pub fn write_help<W>(mut wtr: W) -> io::Result<()>
where
    W: Write,
{
    writeln!(wtr, "Available commands:")?;
    writeln!(wtr)?;
    write_usage::<diff::Args, _>(&mut wtr)?;
    write_usage::<header::Args, _>(&mut wtr)?;
    write_usage::<info::Args, _>(&mut wtr)?;
    write_usage::<makedict::Args, _>(&mut wtr)?;
    write_usage::<Args, _>(&mut wtr)?;
    Ok(())
}

pub fn run(_args: Args) -> io::Result<()> {
    write_help(io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_write_help() {
        let mut buf = vec![];
        write_help(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Available commands:\n\n"));

        let positions: Vec<usize> = ["diff", "header", "info", "makedict", "help"]
            .iter()
            .map(|name| text.find(&format!("*** {name}\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Show this help list."));
        assert!(text.contains("<SRC_DICT> <DEST_DICT>"));
    }
}
