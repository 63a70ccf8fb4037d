//! magpie CLI
//!
//! Convert project source code to and from a flat text file.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use simple_logger::SimpleLogger;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Exit status for a malformed invocation
const USAGE_EXIT_CODE: i32 = 2;

const NOTES: &str = "\
Note: only plain text is supported. Files containing null bytes are skipped,
but it is best to make sure the folder you pack only contains plain text.

To pack a project's source code, go to the directory above the project root
and run:

    magpie --pack PROJECT_FOLDER > OUTPUT_FILE.txt

To unpack a project's source code, go to the desired destination and run:

    magpie --unpack INPUT_FILE.txt";

#[derive(Parser, Debug)]
#[command(name = "magpie")]
#[command(version)]
#[command(about = "Convert project source code to and from a flat text file")]
#[command(after_help = NOTES)]
#[command(group(ArgGroup::new("mode").required(true).args(["pack", "unpack"])))]
struct Cli {
    /// Pack a project folder and print the archive to stdout
    #[arg(long, value_name = "PROJECT_FOLDER", allow_hyphen_values = true)]
    pack: Option<PathBuf>,

    /// Unpack an archive into the current directory
    #[arg(long, value_name = "INPUT_FILE", allow_hyphen_values = true)]
    unpack: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Pack(PathBuf),
    Unpack(PathBuf),
}

impl Cli {
    fn into_mode(self) -> Option<Mode> {
        match (self.pack, self.unpack) {
            (Some(dir), None) => Some(Mode::Pack(dir)),
            (None, Some(file)) => Some(Mode::Unpack(file)),
            _ => None,
        }
    }
}

/// Parse arguments into a mode.
///
/// `Ok(None)` means the invocation was malformed and usage should be shown.
/// Explicit `--help` and `--version` requests come back as `Err` so clap can
/// print them.
fn parse_mode<I, T>(args: I) -> std::result::Result<Option<Mode>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli.into_mode()),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(e)
        }
        Err(_) => Ok(None),
    }
}

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .without_timestamps()
        .init()?;

    let mode = match parse_mode(std::env::args_os()) {
        Ok(Some(mode)) => mode,
        Ok(None) => {
            Cli::command().print_help()?;
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(e) => e.exit(),
    };

    match mode {
        Mode::Pack(dir) => pack(&dir),
        Mode::Unpack(file) => unpack(&file),
    }
}

fn pack(dir: &Path) -> Result<()> {
    let archive = magpie::pack(dir)
        .with_context(|| format!("Failed to pack: {}", dir.display()))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(archive.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn unpack(file: &Path) -> Result<()> {
    magpie::unpack(file, Path::new("."))
        .with_context(|| format!("Failed to unpack: {}", file.display()))?;
    Ok(())
}
