use anyhow::Result;
use clap::Args;
use indicatif::ProgressBar;
use std::io;
use tracing::debug;

use super::MaskingArgs;
use crate::core::quiz::{build_quiz, Quiz, QuizOutcome, QuizRequest};
use crate::error::LyricsError;
use crate::services::SimpleServices;
use crate::ui::{self, OutputFormat};
use crate::utils::progress::{ProgressMessages, ProgressUtils};

#[derive(Args)]
pub struct QuizArgs {
    /// Song name to look up
    #[arg(value_name = "SONG")]
    song: String,

    /// Artist name (optional, improves matching)
    #[arg(short, long)]
    artist: Option<String>,

    #[command(flatten)]
    masking: MaskingArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not print the answer key
    #[arg(long)]
    hide_answers: bool,

    /// Guess each blank interactively before the answers are shown
    #[arg(long, conflicts_with = "format")]
    play: bool,
}

pub async fn execute(args: QuizArgs, services: &SimpleServices, quiet: bool) -> Result<()> {
    let options = args.masking.options(services);
    let request = QuizRequest::new(&args.song, args.artist.as_deref(), options)?;
    let source = services.create_lyrics_source()?;

    let spinner = lookup_spinner(&request, args.format, quiet);

    let mut rng = args.masking.rng();
    let outcome = build_quiz(source.as_ref(), &request, &mut rng).await;
    spinner.finish_and_clear();

    match outcome {
        QuizOutcome::Ready(quiz) => {
            debug!("Quiz ready with {} blank(s)", quiz.reveal_list.len());
            present(&quiz, &args)
        }
        QuizOutcome::NotFound => Err(LyricsError::NotFound.into()),
        QuizOutcome::Failed(reason) => Err(LyricsError::LookupFailed { reason }.into()),
    }
}

fn lookup_spinner(request: &QuizRequest, format: OutputFormat, quiet: bool) -> ProgressBar {
    if quiet || format == OutputFormat::Json {
        return ProgressUtils::create_hidden();
    }

    ProgressUtils::create_lookup_spinner(ProgressMessages::searching_for(
        &request.lookup.song,
        request.lookup.artist.as_deref(),
    ))
}

/// Print a finished quiz according to the output flags.
pub fn present(quiz: &Quiz, args: &QuizArgs) -> Result<()> {
    show(quiz, args.format, args.hide_answers, args.play)
}

pub fn show(quiz: &Quiz, format: OutputFormat, hide_answers: bool, play: bool) -> Result<()> {
    if play {
        print!("{}", ui::render_text(quiz, false));
        println!();

        let stdin = io::stdin();
        ui::play::play(quiz, stdin.lock(), io::stdout().lock())?;

        if !hide_answers {
            println!("\nReplaced Words:");
            println!("{}", ui::render_answer_key(&quiz.reveal_list));
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", ui::render_json(quiz, !hide_answers)?),
        OutputFormat::Text => print!("{}", ui::render_text(quiz, !hide_answers)),
    }

    Ok(())
}
