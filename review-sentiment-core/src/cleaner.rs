use {
    once_cell::sync::Lazy,
    regex::Regex,
};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

// emoticons, misc symbols & pictographs, transport & map, regional indicators,
// box drawing through misc symbols & arrows, dingbats, plus the joiner,
// variation selectors and keycap mark that regex `\w` would otherwise keep
static EMOJI: Lazy<Regex> = Lazy::new(|| Regex::new(concat!(
    "[",
    r"\x{1F600}-\x{1F64F}",
    r"\x{1F300}-\x{1F5FF}",
    r"\x{1F680}-\x{1F6FF}",
    r"\x{1F1E0}-\x{1F1FF}",
    r"\x{2500}-\x{2BEF}",
    r"\x{2702}-\x{27B0}",
    r"\x{200D}\x{FE00}-\x{FE0F}\x{20E3}",
    "]+",
)).unwrap());

static SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strips digits, emoji and punctuation from a raw record and collapses whitespace.
pub fn clean(text: &str) -> String {
    let text = DIGITS.replace_all(text, "");
    let text = EMOJI.replace_all(&text, "");
    let text = SYMBOLS.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Great product!!! 😀123",
        "Bad quality...",
        "",
        "   \t\n  ",
        "🚀🇮🇳 ✂ ★ 42",
        "Battery lasts 2 days,  charger is ok-ish\t\tI guess",
        "बहुत अच्छा प्रोडक्ट है 👍",
        "snake_case stays, so does Ünïcödé",
        "١٢٣ arabic-indic digits ٤٥",
        "\u{2764}\u{FE0F}",
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}",
        "1\u{FE0F}\u{20E3}",
        "Love it \u{2764}\u{FE0F}",
    ];

    #[test]
    fn removes_digits_emoji_and_punctuation() {
        assert_eq!(clean("Great product!!! 😀123"), "Great product");
        assert_eq!(clean("Bad quality..."), "Bad quality");
        assert_eq!(clean("🚀🇮🇳 ✂ ★ 42"), "");
    }

    #[test]
    fn emoji_sequences_leave_nothing_behind() {
        assert_eq!(clean("\u{2764}\u{FE0F}"), "");
        assert_eq!(clean("\u{1F44D}\u{FE0F}"), "");
        assert_eq!(clean("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"), "");
        assert_eq!(clean("1\u{FE0F}\u{20E3}"), "");
        assert_eq!(clean("Love it \u{2764}\u{FE0F}"), "Love it");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            clean("Battery lasts 2 days,  charger is ok-ish\t\tI guess"),
            "Battery lasts days charger is okish I guess",
        );
        assert_eq!(clean("   \t\n  "), "");
    }

    #[test]
    fn keeps_non_latin_words() {
        assert_eq!(clean("बहुत अच्छा प्रोडक्ट है 👍"), "बहुत अच्छा प्रोडक्ट है");
        assert_eq!(clean("snake_case stays, so does Ünïcödé"), "snake_case stays so does Ünïcödé");
    }

    #[test]
    fn output_has_no_digits_emoji_or_whitespace_runs() {
        for sample in SAMPLES {
            let cleaned = clean(sample);

            assert!(!cleaned.chars().any(|c| c.is_numeric()), "digits left in {:?}", cleaned);
            assert!(!EMOJI.is_match(&cleaned), "emoji left in {:?}", cleaned);
            assert!(!cleaned.contains("  "), "whitespace run in {:?}", cleaned);
            assert_eq!(cleaned, cleaned.trim());
        }
    }

    #[test]
    fn cleaning_is_idempotent() {
        for sample in SAMPLES {
            let once = clean(sample);
            assert_eq!(clean(&once), once);
        }
    }
}
