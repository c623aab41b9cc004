use regex::Regex;
use std::sync::LazyLock;

pub const FILTERED: &str = "[FILTERED]";

/// Form values run up to the next `&`, whitespace or closing quote
static RULES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // Basic credential carries ws@Company.<company>:<password>
        Regex::new(r"(Authorization: Basic )[A-Za-z0-9+/=]+").expect("credential pattern"),
        Regex::new(r#"(card\.number=)[^&\s"]+"#).expect("card number pattern"),
        Regex::new(r#"(card\.cvc=)[^&\s"]+"#).expect("cvc pattern"),
    ]
});

/// Replace the card number, card verification value and Basic credential with
/// `[FILTERED]`. Nothing else in the transcript changes.
pub fn scrub(transcript: &str) -> String {
    let replacement = format!("${{1}}{}", FILTERED);
    RULES.iter().fold(transcript.to_string(), |text, rule| {
        rule.replace_all(&text, replacement.as_str()).into_owned()
    })
}
