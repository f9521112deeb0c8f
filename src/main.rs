mod app;
mod logging;
mod render;
mod settings;

use crate::app::App;
use crate::settings::AppSettings;
use cfb_api::client::EspnApi;
use chrono::Local;
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let Some(words) = handle_cli_args() else {
        return Ok(());
    };

    better_panic::install();

    let settings = AppSettings::load();
    logging::init(&settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "\n🏈 College Football Team Checker 🏈\n")?;

    let team_name = if words.is_empty() {
        prompt_team_name(&mut out, &mut io::stdin().lock())?
    } else {
        words.join(" ")
    };

    App::new(EspnApi::new()).run(&team_name, &mut out, &Local)
}

/// Team name words from the command line, or `None` when a flag was
/// handled and there's nothing left to do.
fn handle_cli_args() -> Option<Vec<String>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{}", usage_text());
            None
        }
        [flag] if flag == "-V" || flag == "--version" => {
            println!("cfb-checker {}", env!("CARGO_PKG_VERSION"));
            None
        }
        _ => Some(args),
    }
}

fn usage_text() -> &'static str {
    "cfb-checker - college football team record, results and next game

Usage:
  cfb-checker [TEAM NAME...]
  cfb-checker --help
  cfb-checker --version

With no team name, you'll be prompted for one.

Environment:
  CFB_CHECKER_LOG   Log filter for stderr diagnostics (default: error)"
}

fn prompt_team_name<W: Write, R: BufRead>(out: &mut W, input: &mut R) -> io::Result<String> {
    write!(out, "Enter your college football team: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
