use std::path::PathBuf;

use clap::Parser;
use marco::Getter;

/// Spell phone numbers with dictionary words.
#[derive(Parser, Debug, Getter)]
#[command(author, version, about, long_about = None)]
pub struct Arg {
    /// Word list, one word per line
    #[clap(short, long, default_value = "newWords.txt")]
    dict: PathBuf,

    /// Spell the leading country-code group too instead of printing it as is
    #[clap(long)]
    spell_country_code: bool,

    /// Worker threads used when several numbers are given
    #[clap(short, long, default_value = "4")]
    workers: usize,

    /// Print at most this many spellings per number
    #[clap(short, long)]
    limit: Option<usize>,

    /// Numbers in 1-###-###-#### form; prompts on stdin when none are given
    numbers: Vec<String>,
}

impl Arg {
    pub fn parse() -> Self {
        Arg::parse_from(std::env::args())
    }
}
