//! Rendering quizzes for the terminal
//!
//! - plain text sections (`Lyrics:` / `Replaced Words:`)
//! - JSON for scripting
//! - `play`: an interactive guessing round over stdin/stdout

use clap::ValueEnum;
use serde::Serialize;

use crate::core::quiz::Quiz;

pub mod play;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Header line naming the song, when the source provided one.
pub fn render_heading(quiz: &Quiz) -> Option<String> {
    match (quiz.title.is_empty(), quiz.artist.is_empty()) {
        (true, _) => None,
        (false, true) => Some(quiz.title.clone()),
        (false, false) => Some(format!("{} - {}", quiz.artist, quiz.title)),
    }
}

pub fn render_answer_key(reveal_list: &[String]) -> String {
    reveal_list
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{} : {}", i + 1, word))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_text(quiz: &Quiz, show_answers: bool) -> String {
    let mut out = String::new();

    if let Some(heading) = render_heading(quiz) {
        out.push_str(&heading);
        out.push_str("\n\n");
    }

    out.push_str("Lyrics:\n");
    out.push_str(&quiz.masked_text);
    out.push('\n');

    if show_answers {
        out.push_str("\nReplaced Words:\n");
        if !quiz.reveal_list.is_empty() {
            out.push_str(&render_answer_key(&quiz.reveal_list));
            out.push('\n');
        }
    }

    out
}

#[derive(Serialize)]
struct JsonQuiz<'a> {
    title: &'a str,
    artist: &'a str,
    url: &'a str,
    masked_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reveal_list: Option<&'a [String]>,
}

pub fn render_json(quiz: &Quiz, show_answers: bool) -> serde_json::Result<String> {
    let view = JsonQuiz {
        title: &quiz.title,
        artist: &quiz.artist,
        url: &quiz.url,
        masked_text: &quiz.masked_text,
        reveal_list: show_answers.then_some(quiz.reveal_list.as_slice()),
    };
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        Quiz {
            title: "Die For You".to_string(),
            artist: "The Weeknd".to_string(),
            url: "https://genius.com/x".to_string(),
            masked_text: "I [1] you [2]".to_string(),
            reveal_list: vec!["love".to_string(), "always".to_string()],
        }
    }

    #[test]
    fn test_render_text_with_answers() {
        assert_eq!(
            render_text(&quiz(), true),
            "The Weeknd - Die For You\n\nLyrics:\nI [1] you [2]\n\nReplaced Words:\n1 : love\n2 : always\n"
        );
    }

    #[test]
    fn test_render_text_hides_answers() {
        let text = render_text(&quiz(), false);
        assert!(!text.contains("Replaced Words"));
        assert!(!text.contains("love"));
    }

    #[test]
    fn test_heading_without_metadata() {
        let mut quiz = quiz();
        quiz.title.clear();
        assert_eq!(render_heading(&quiz), None);
        assert!(render_text(&quiz, false).starts_with("Lyrics:\n"));
    }

    #[test]
    fn test_render_json() {
        let value: serde_json::Value = serde_json::from_str(&render_json(&quiz(), true).unwrap()).unwrap();
        assert_eq!(value["masked_text"], "I [1] you [2]");
        assert_eq!(value["reveal_list"][1], "always");

        let hidden: serde_json::Value = serde_json::from_str(&render_json(&quiz(), false).unwrap()).unwrap();
        assert!(hidden.get("reveal_list").is_none());
    }
}
