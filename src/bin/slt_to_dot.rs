// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints the suffix link tree of a text file to stdout in Graphviz `.dot` format.
//!
//! ```text
//! slt_to_dot -f inputfile [--fasta] [--debug]
//! ```
//!
//! With `--fasta`, the input is read as multi-record FASTA and concatenated with `$` separators
//! between (and after) records, and dollar-labeled edges are suppressed. With `--debug`, nodes
//! are named by their substrings rather than by numeric id.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use bd_bwt_index::data_structures::bd_bwt_index::BdBwtIndex;
use bd_bwt_index::data_structures::suffix_link_tree::SuffixLinkTreeIterator;
use bd_bwt_index::errors::ArgumentError;
use bd_bwt_index::io::fasta::read_fasta_concatenated;

const FASTA_SEPARATOR: u8 = b'$';

/// Print the suffix link tree of a text file in Graphviz `.dot` format.
#[derive(Parser, Debug)]
#[command(name = "slt_to_dot")]
struct Args {
    /// Input file to index.
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Interpret the input file as FASTA, concatenating records with `$` separators.
    #[arg(long)]
    fasta: bool,

    /// Label nodes with their substrings instead of numeric ids.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap exits with status 2 by default; the driver this crate imitates always exits
            // with 1 on any usage error, so the error is printed and mapped by hand.
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let file = args.file.ok_or(ArgumentError::MissingFile)?;

    let text = if args.fasta {
        let mut bytes = read_fasta_concatenated(&file, FASTA_SEPARATOR)?;
        bytes.push(FASTA_SEPARATOR);
        bytes
    } else {
        std::fs::read(&file).with_context(|| format!("failed to read file {}", file.display()))?
    };

    let index = BdBwtIndex::build(&text)?;
    let mut it = SuffixLinkTreeIterator::new(&index);
    it.stop_at_dollars = args.fasta;
    it.debug_mode = args.debug;
    while it.next() {}

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_dot(&mut out, &it)?;
    Ok(())
}

fn write_dot(out: &mut impl Write, it: &SuffixLinkTreeIterator) -> io::Result<()> {
    writeln!(out, "digraph slt {{")?;
    for edge in &it.edges {
        match (&edge.parent_substring, &edge.child_substring) {
            (Some(parent), Some(child)) => {
                writeln!(
                    out,
                    "\"{}\" -> \"{}\" [label=\"{}\"];",
                    escape_dot(parent),
                    escape_dot(child),
                    escape_dot(&[edge.label]),
                )?;
            }
            _ => {
                writeln!(
                    out,
                    "{} -> {} [label=\"{}\"];",
                    edge.parent_id,
                    edge.child_id,
                    escape_dot(&[edge.label]),
                )?;
            }
        }
    }
    writeln!(out, "}}")
}

/// Escapes `"` and `\` for embedding `bytes` inside a Graphviz quoted string; every other byte is
/// passed through as its Latin-1 codepoint.
fn escape_dot(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'"' => s.push_str("\\\""),
            b'\\' => s.push_str("\\\\"),
            _ => s.push(b as char),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_dot(b"a\"b\\c"), "a\\\"b\\\\c");
    }

    #[test]
    fn passes_through_plain_bytes() {
        assert_eq!(escape_dot(b"abc"), "abc");
    }
}
