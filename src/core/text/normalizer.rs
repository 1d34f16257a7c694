use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SECTION_MARKER: Regex = Regex::new(r"\[.*?\]").expect("valid section marker regex");
    static ref CONTRIBUTORS_LINE: Regex =
        Regex::new(r"(?m)^\d+ Contributors.*\n").expect("valid contributors regex");
    static ref TRANSLATIONS_LINE: Regex =
        Regex::new(r"(?m)^Translations.*\n").expect("valid translations regex");
    static ref TITLE_ECHO_LINE: Regex =
        Regex::new(r"(?m)^.*? Lyrics.*\n").expect("valid title echo regex");
    static ref CONTRIBUTORS_TRANSLATIONS_HEADER: Regex =
        Regex::new(r"\A.*?ContributorsTranslations.*\n").expect("valid header regex");
}

/// Strip provider boilerplate from raw lyrics.
///
/// Each pattern runs against the output of the previous one, so the order
/// below matters. The result is trimmed; it may be empty.
pub fn normalize(raw: &str) -> String {
    let steps: [&Regex; 5] = [
        &*SECTION_MARKER,
        &*CONTRIBUTORS_LINE,
        &*TRANSLATIONS_LINE,
        &*TITLE_ECHO_LINE,
        &*CONTRIBUTORS_TRANSLATIONS_HEADER,
    ];

    let text = steps
        .iter()
        .fold(raw.to_string(), |text, pattern| pattern.replace_all(&text, "").into_owned());

    text.trim().to_string()
}
