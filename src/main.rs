use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ini::Ini;

#[derive(Parser)]
#[command(name = "ini")]
#[command(about = "Read a sectioned key/value file and print it in canonical form", long_about = None)]
struct Cli {
    /// File to read
    path: PathBuf,

    /// Print only this section
    #[arg(short, long, value_name = "NAME")]
    section: Option<String>,

    /// Print only the first value of this key (requires --section)
    #[arg(short, long, value_name = "KEY", requires = "section")]
    key: Option<String>,

    /// Fail on lines that are neither headers nor entries
    #[arg(long, conflicts_with = "check")]
    strict: bool,

    /// Warn about every line that was dropped
    #[arg(long)]
    check: bool,
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read `{}`", cli.path.display()))?;

    let ini = if cli.strict {
        Ini::parse_strict(&text).with_context(|| format!("`{}`", cli.path.display()))?
    } else if cli.check {
        let (ini, diagnostics) = Ini::parse_with_diagnostics(&text);
        for diagnostic in &diagnostics {
            eprintln!("warning: {}: {diagnostic}", cli.path.display());
        }
        ini
    } else {
        Ini::parse(&text)
    };

    let Some(name) = cli.section else {
        print!("{}", ini.build());
        return Ok(());
    };

    let Some(section) = ini.find_section(&name) else {
        bail!("section `{name}` not found");
    };

    match cli.key {
        Some(key) => match section.get(&key) {
            Some(value) => println!("{value}"),
            None => bail!("key `{key}` not found in section `{name}`"),
        },
        None => print!("{}", section.build()),
    }

    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
    }
}
