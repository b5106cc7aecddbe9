//! # String-level cleaning
//!
//! Pure `&str -> String` normalizations applied before tokenization. None of them
//! can fail and none keep state between calls.
//!
//! | Operation            | Effect                                                   |
//! |----------------------|----------------------------------------------------------|
//! | `lower_casing`       | Unicode lowercase copy                                   |
//! | `remove_html`        | deletes every minimal `<...>` match                      |
//! | `remove_url`         | deletes `http(s)://…` and `www.…` up to the next space   |
//! | `remove_emoji`       | describes (`:thumbs_up:`) or deletes emoji graphemes     |
//! | `remove_punctuation` | deletes ASCII punctuation, nothing is re-inserted        |

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

static HTML_TAG: OnceLock<Regex> = OnceLock::new();
static URL: OnceLock<Regex> = OnceLock::new();

fn html_tag() -> &'static Regex {
    HTML_TAG.get_or_init(|| Regex::new(r"<.*?>").expect("valid html tag pattern"))
}

fn url() -> &'static Regex {
    URL.get_or_init(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid url pattern"))
}

/// What `remove_emoji` does with each emoji grapheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiMode {
    /// Replace the emoji with its name between colons, e.g. `👍` -> `:thumbs_up:`.
    #[default]
    Describe,
    /// Drop the emoji entirely.
    Remove,
}

impl From<bool> for EmojiMode {
    /// `true` keeps the meaning (describe), `false` strips the glyph.
    fn from(replace_with_meaning: bool) -> Self {
        if replace_with_meaning {
            EmojiMode::Describe
        } else {
            EmojiMode::Remove
        }
    }
}

pub fn lower_casing(text: &str) -> String {
    text.to_lowercase()
}

/// Removes every non-greedy `<...>` match within a line; a tag never spans a newline.
///
/// Nested or malformed markup may survive partially (`<a <b>>` leaves `>`).
pub fn remove_html(text: &str) -> String {
    html_tag().replace_all(text, "").into_owned()
}

pub fn remove_url(text: &str) -> String {
    url().replace_all(text, "").into_owned()
}

/// Handles emoji grapheme by grapheme so that skin tones, ZWJ sequences and
/// variation selectors are treated as a single emoji.
pub fn remove_emoji(text: &str, mode: EmojiMode) -> String {
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        match emojis::get(grapheme) {
            Some(emoji) if !is_plain_symbol(grapheme) => {
                if mode == EmojiMode::Describe {
                    out.push(':');
                    out.push_str(&describe(emoji.name()));
                    out.push(':');
                }
            }
            _ => out.push_str(grapheme),
        }
    }
    out
}

/// Keycap bases such as `#` or `1` and bare ASCII are text, not emoji.
fn is_plain_symbol(grapheme: &str) -> bool {
    grapheme.is_ascii()
}

fn describe(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ':' && *c != ',')
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Deletes every ASCII punctuation character (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
///
/// Neighbouring characters are left as they are: `"well,small"` becomes `"wellsmall"`.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_casing() {
        assert_eq!(lower_casing("The Smaller OBJECT"), "the smaller object");
        assert_eq!(lower_casing(""), "");
    }

    #[test]
    fn test_remove_html_example() {
        assert_eq!(remove_html("<h1>Hello</h1> World!"), "Hello World!");
    }

    #[test]
    fn test_remove_html_is_minimal_match() {
        assert_eq!(remove_html("a <b>bold</b> and <i>it</i>"), "a bold and it");
        // malformed markup is only partially stripped
        assert_eq!(remove_html("x <a <b>> y"), "x > y");
    }

    #[test]
    fn test_remove_html_stops_at_newline() {
        // a tag never spans lines, so prose with comparison signs survives
        assert_eq!(remove_html("if a < b\nthen c > d"), "if a < b\nthen c > d");
        assert_eq!(remove_html("<a\nhref='x'>link</a>"), "<a\nhref='x'>link");
        assert_eq!(remove_html("<p>one</p>\n<p>two</p>"), "one\ntwo");
    }

    #[test]
    fn test_remove_url() {
        assert_eq!(
            remove_url("see https://example.com/a?b=1 and www.rust-lang.org now"),
            "see  and  now"
        );
        assert_eq!(remove_url("http://x.y"), "");
        assert_eq!(remove_url("no links here"), "no links here");
    }

    #[test]
    fn test_remove_emoji_describe() {
        assert_eq!(remove_emoji("great 👍", EmojiMode::Describe), "great :thumbs_up:");
    }

    #[test]
    fn test_remove_emoji_remove() {
        assert_eq!(remove_emoji("great 👍!", EmojiMode::Remove), "great !");
    }

    #[test]
    fn test_remove_emoji_keeps_plain_text() {
        let text = "Cars #1 in 2024, ok? Württemberg";
        assert_eq!(remove_emoji(text, EmojiMode::Describe), text);
        assert_eq!(remove_emoji(text, EmojiMode::Remove), text);
    }

    #[test]
    fn test_emoji_mode_from_flag() {
        assert_eq!(EmojiMode::from(true), EmojiMode::Describe);
        assert_eq!(EmojiMode::from(false), EmojiMode::Remove);
    }

    #[test]
    fn test_remove_punctuation() {
        assert_eq!(remove_punctuation("well, small."), "well small");
        assert_eq!(remove_punctuation("don't-stop!"), "dontstop");
        assert_eq!(remove_punctuation("naïve — ok"), "naïve — ok");
    }
}
