//! Romanization of Brahmic scripts.
//!
//! The Unicode blocks of the Indic scripts share the layout of the Devanagari
//! block (a letter sits at the same offset in every 128 code point block), so a
//! single offset table covers every supported script.

use {
    std::fmt,
    crate::error::NormalizationError,
};

const VIRAMA: u32 = 0x4D;
const NUKTA: u32 = 0x3C;
const GURMUKHI_TIPPI: u32 = 0x70;
const GURMUKHI_ADDAK: u32 = 0x71;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Itrans,
}

pub trait Transliterator {
    fn transliterate(&self, text: &str, script: Script, scheme: Scheme) -> Result<String, NormalizationError>;
}

/// Table driven romanizer for the scripts listed in [`Script`].
#[derive(Debug, Default, Clone, Copy)]
pub struct IndicTransliterator;

impl Script {
    /// Native script of a transliteration-eligible language code.
    pub fn for_language(language: &str) -> Option<Self> {
        Some(match language {
            "hi" | "mr" => Self::Devanagari,
            "bn" => Self::Bengali,
            "gu" => Self::Gujarati,
            "ta" => Self::Tamil,
            "te" => Self::Telugu,
            "kn" => Self::Kannada,
            "ml" => Self::Malayalam,
            "pa" => Self::Gurmukhi,
            _ => return None,
        })
    }

    fn block_start(&self) -> u32 {
        match self {
            Self::Devanagari => 0x0900,
            Self::Bengali => 0x0980,
            Self::Gurmukhi => 0x0A00,
            Self::Gujarati => 0x0A80,
            Self::Tamil => 0x0B80,
            Self::Telugu => 0x0C00,
            Self::Kannada => 0x0C80,
            Self::Malayalam => 0x0D00,
        }
    }

    fn offset(&self, c: char) -> Option<u32> {
        let start = self.block_start();
        let code = c as u32;
        if (start..start + 0x80).contains(&code) {
            Some(code - start)
        } else {
            None
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Transliterator for IndicTransliterator {
    fn transliterate(&self, text: &str, script: Script, scheme: Scheme) -> Result<String, NormalizationError> {
        match scheme {
            Scheme::Itrans => Ok(romanize(text, script)),
        }
    }
}

fn romanize(text: &str, script: Script) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;

        let offset = match script.offset(c) {
            Some(v) => v,
            None => {
                out.push(c);
                continue;
            }
        };

        if let Some(consonant) = consonant(offset) {
            out.push_str(consonant);

            while i < chars.len() && script.offset(chars[i]) == Some(NUKTA) {
                i += 1;
            }

            // inherent vowel unless followed by a vowel sign or a virama
            match chars.get(i).and_then(|c| script.offset(*c)) {
                Some(VIRAMA) => i += 1,
                Some(next) => match vowel_sign(next) {
                    Some(sign) => {
                        out.push_str(sign);
                        i += 1;
                    },
                    None => out.push('a'),
                },
                None => out.push('a'),
            }
        } else if let Some(vowel) = vowel(offset) {
            out.push_str(vowel);
        } else if let Some(sign) = vowel_sign(offset) {
            out.push_str(sign);
        } else if script == Script::Gurmukhi && offset == GURMUKHI_TIPPI {
            out.push('M');
        } else if let Some(other) = other_sign(offset) {
            out.push_str(other);
        } else if offset == VIRAMA || offset == NUKTA || (script == Script::Gurmukhi && offset == GURMUKHI_ADDAK) {
            // no latin counterpart
        } else {
            out.push(c);
        }
    }

    out
}

fn consonant(offset: u32) -> Option<&'static str> {
    Some(match offset {
        0x15 => "k",
        0x16 => "kh",
        0x17 => "g",
        0x18 => "gh",
        0x19 => "~N",
        0x1A => "ch",
        0x1B => "Ch",
        0x1C => "j",
        0x1D => "jh",
        0x1E => "~n",
        0x1F => "T",
        0x20 => "Th",
        0x21 => "D",
        0x22 => "Dh",
        0x23 => "N",
        0x24 => "t",
        0x25 => "th",
        0x26 => "d",
        0x27 => "dh",
        0x28 => "n",
        0x29 => "n",
        0x2A => "p",
        0x2B => "ph",
        0x2C => "b",
        0x2D => "bh",
        0x2E => "m",
        0x2F => "y",
        0x30 => "r",
        0x31 => "R",
        0x32 => "l",
        0x33 => "L",
        0x34 => "zh",
        0x35 => "v",
        0x36 => "sh",
        0x37 => "Sh",
        0x38 => "s",
        0x39 => "h",
        0x58 => "q",
        0x59 => "K",
        0x5A => "G",
        0x5B => "z",
        0x5C => ".D",
        0x5D => ".Dh",
        0x5E => "f",
        0x5F => "Y",
        _ => return None,
    })
}

fn vowel(offset: u32) -> Option<&'static str> {
    Some(match offset {
        0x05 => "a",
        0x06 => "A",
        0x07 => "i",
        0x08 => "I",
        0x09 => "u",
        0x0A => "U",
        0x0B => "RRi",
        0x0C => "LLi",
        0x0D | 0x0E | 0x0F => "e",
        0x10 => "ai",
        0x11 | 0x12 | 0x13 => "o",
        0x14 => "au",
        0x60 => "RRI",
        0x61 => "LLI",
        _ => return None,
    })
}

fn vowel_sign(offset: u32) -> Option<&'static str> {
    Some(match offset {
        0x3E => "A",
        0x3F => "i",
        0x40 => "I",
        0x41 => "u",
        0x42 => "U",
        0x43 => "RRi",
        0x44 => "RRI",
        0x45 | 0x46 | 0x47 => "e",
        0x48 => "ai",
        0x49 | 0x4A | 0x4B => "o",
        0x4C => "au",
        0x62 => "LLi",
        0x63 => "LLI",
        _ => return None,
    })
}

fn other_sign(offset: u32) -> Option<&'static str> {
    Some(match offset {
        0x01 => ".N",
        0x02 => "M",
        0x03 => "H",
        0x3D => ".a",
        0x4E => "t",
        0x50 => "OM",
        0x64 => "|",
        0x65 => "||",
        0x66 => "0",
        0x67 => "1",
        0x68 => "2",
        0x69 => "3",
        0x6A => "4",
        0x6B => "5",
        0x6C => "6",
        0x6D => "7",
        0x6E => "8",
        0x6F => "9",
        _ => return None,
    })
}
