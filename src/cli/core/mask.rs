use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

use super::quiz::show;
use super::MaskingArgs;
use crate::core::quiz::prepare_quiz;
use crate::core::services::FoundLyrics;
use crate::error::LyricsError;
use crate::services::SimpleServices;
use crate::ui::OutputFormat;

#[derive(Args)]
pub struct MaskArgs {
    /// Lyrics file to read (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Skip boilerplate cleanup and mask the text as-is
    #[arg(long)]
    raw: bool,

    #[command(flatten)]
    masking: MaskingArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not print the answer key
    #[arg(long)]
    hide_answers: bool,

    /// Guess each blank interactively before the answers are shown
    #[arg(long, conflicts_with = "format", requires = "file")]
    play: bool,
}

pub async fn execute(args: MaskArgs, services: &SimpleServices) -> Result<()> {
    check_play_input(args.file.as_ref(), args.play)?;
    let (title, text) = read_input(args.file.as_ref())?;
    if text.trim().is_empty() {
        return Err(LyricsError::EmptyInput.into());
    }

    let lyrics = FoundLyrics {
        title,
        artist: String::new(),
        url: String::new(),
        text,
    };

    let options = args.masking.options(services);
    let mut rng = args.masking.rng();
    let quiz = prepare_quiz(lyrics, &options, !args.raw, &mut rng);

    show(&quiz, args.format, args.hide_answers, args.play)
}

fn reads_stdin(file: Option<&PathBuf>) -> bool {
    file.map_or(true, |path| path.as_os_str() == "-")
}

/// Guesses are read from stdin, so the lyrics must come from a file.
fn check_play_input(file: Option<&PathBuf>, play: bool) -> Result<()> {
    if play && reads_stdin(file) {
        bail!("--play needs a lyrics file; stdin is used for guesses");
    }
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<(String, String)> {
    match file {
        Some(path) if !reads_stdin(Some(path)) => {
            info!("📁 Reading lyrics from: {}", path.display());
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read lyrics file: {}", path.display()))?;
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok((title, text))
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok((String::new(), text))
        }
    }
}
