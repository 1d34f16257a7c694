use std::io::{self, BufRead, Write};

use crate::core::quiz::Quiz;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayScore {
    pub correct: usize,
    pub total: usize,
}

/// Guesses are compared trimmed and case-insensitively.
pub fn is_correct(guess: &str, answer: &str) -> bool {
    guess.trim().to_lowercase() == answer.to_lowercase()
}

/// Prompt for every blank in order and report a verdict for each.
///
/// Running out of input counts the remaining blanks as missed.
pub fn play<R, W>(quiz: &Quiz, mut input: R, mut output: W) -> io::Result<PlayScore>
where
    R: BufRead,
    W: Write,
{
    let mut correct = 0;
    let mut line = String::new();

    for (i, answer) in quiz.reveal_list.iter().enumerate() {
        write!(output, "[{}] > ", i + 1)?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            writeln!(output)?;
            break;
        }

        if is_correct(&line, answer) {
            correct += 1;
            writeln!(output, "  correct")?;
        } else {
            writeln!(output, "  missed, it was: {}", answer)?;
        }
    }

    let score = PlayScore {
        correct,
        total: quiz.reveal_list.len(),
    };
    writeln!(output, "\nScore: {}/{}", score.correct, score.total)?;
    Ok(score)
}
