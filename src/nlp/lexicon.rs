use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info};

use super::types::{EntitySpan, ModelToken, PosTag};
use super::LanguageModel;
use crate::error::Result;

/// Words (with inner apostrophes), line-break whitespace runs, or single
/// non-word characters
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:['’]\w+)*|\n\s*|[^\w\s]").unwrap()
});

static PUNCT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{P}+$").unwrap()
});

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(?:[.,]\d+)*$").unwrap()
});

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(1[0-9]|20)\d{2}$").unwrap()
});

/// Words that mark a following bare year as a date ("in 1999")
const YEAR_PREPOSITIONS: [&str; 10] = [
    "in", "since", "by", "during", "from", "until", "till", "before", "after", "of",
];

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// On-disk layout of a lexicon file
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    pos: HashMap<String, PosTag>,
    #[serde(default)]
    entities: HashMap<String, String>,
}

/// A lexicon-backed language model.
///
/// Part-of-speech tags come from a word list with shape heuristics for
/// unknown words; entities come from a phrase gazetteer plus date rules.
pub struct LexiconModel {
    pos: HashMap<String, PosTag>,
    gazetteer: HashMap<String, String>,
    max_phrase_len: usize,
}

impl LexiconModel {
    /// Loads a lexicon from a JSON file
    pub fn load(path: &Path) -> std::result::Result<Self, Box<dyn Error + Send + Sync>> {
        info!("Loading lexicon from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read lexicon {}: {}", path.display(), e))?;
        Self::from_json(&raw)
    }

    /// Builds a model from the JSON text of a lexicon
    pub fn from_json(raw: &str) -> std::result::Result<Self, Box<dyn Error + Send + Sync>> {
        let file: LexiconFile = serde_json::from_str(raw)?;

        let pos = file
            .pos
            .into_iter()
            .map(|(word, tag)| (word.to_lowercase(), tag))
            .collect::<HashMap<_, _>>();

        let mut gazetteer = HashMap::new();
        let mut max_phrase_len = 0;
        for (phrase, label) in file.entities {
            let words = phrase_key(&phrase);
            if words.is_empty() {
                continue;
            }
            max_phrase_len = max_phrase_len.max(words.len());
            gazetteer.insert(words.join(" "), label);
        }

        debug!(
            "Lexicon has {} words and {} entity phrases",
            pos.len(),
            gazetteer.len()
        );

        Ok(Self {
            pos,
            gazetteer,
            max_phrase_len,
        })
    }

    fn tag(&self, text: &str, sentence_start: bool) -> PosTag {
        if let Some(tag) = self.pos.get(&text.to_lowercase()) {
            return *tag;
        }
        if NUMBER_PATTERN.is_match(text) {
            return PosTag::Num;
        }
        let first = match text.chars().next() {
            Some(c) => c,
            None => return PosTag::X,
        };
        if !first.is_alphanumeric() && first != '_' {
            return PosTag::Sym;
        }
        if first.is_uppercase() && !sentence_start {
            return PosTag::Propn;
        }
        let lower = text.to_lowercase();
        if lower.len() > 3 && lower.ends_with("ly") {
            PosTag::Adv
        } else if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            PosTag::Verb
        } else {
            PosTag::Noun
        }
    }

    /// Length of a date span starting at `words[i]`, if any
    fn date_len(words: &[&ModelToken], i: usize) -> usize {
        let is_year = |k: usize| words.get(k).is_some_and(|t| YEAR_PATTERN.is_match(&t.text));
        let is_day = |k: usize| {
            words.get(k).is_some_and(|t| {
                t.text.len() <= 2 && t.text.chars().all(|c| c.is_ascii_digit())
            })
        };
        let is_comma = |k: usize| words.get(k).is_some_and(|t| t.text == ",");
        let is_month = |k: usize| {
            words.get(k).is_some_and(|t| {
                t.text.chars().next().is_some_and(char::is_uppercase)
                    && MONTHS.contains(&t.text.to_lowercase().as_str())
            })
        };

        // "7 November", "November 7", optionally followed by a year
        let mut len = if is_day(i) && is_month(i + 1) {
            2
        } else if is_month(i) {
            if is_day(i + 1) {
                2
            } else {
                1
            }
        } else {
            0
        };

        if len > 0 {
            if is_year(i + len) {
                len += 1;
            } else if is_comma(i + len) && is_year(i + len + 1) {
                len += 2;
            }
            // A bare month name is too ambiguous ("May", "March")
            return if len > 1 { len } else { 0 };
        }

        let after_preposition = i > 0
            && YEAR_PREPOSITIONS.contains(&words[i - 1].text.to_lowercase().as_str());
        if is_year(i) && after_preposition {
            1
        } else {
            0
        }
    }
}

impl LanguageModel for LexiconModel {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<ModelToken>> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;

        for m in TOKEN_PATTERN.find_iter(text) {
            let surface = m.as_str();
            let is_space = surface.trim().is_empty();
            let is_punct = !is_space && PUNCT_PATTERN.is_match(surface);

            let pos = if is_space {
                PosTag::Space
            } else if is_punct {
                PosTag::Punct
            } else {
                self.tag(surface, sentence_start)
            };

            if !is_space {
                sentence_start = matches!(surface, "." | "!" | "?");
            }

            tokens.push(ModelToken {
                text: surface.to_string(),
                start: m.start(),
                end: m.end(),
                pos,
                is_punct,
                is_space,
            });
        }

        Ok(tokens)
    }

    fn entities(&self, text: &str, tokens: &[ModelToken]) -> Result<Vec<EntitySpan>> {
        let words: Vec<&ModelToken> = tokens.iter().filter(|t| !t.is_space).collect();
        let mut spans = Vec::new();
        let mut i = 0;

        while i < words.len() {
            let mut matched = None;
            let longest = self.max_phrase_len.min(words.len() - i);
            for n in (1..=longest).rev() {
                let key = words[i..i + n]
                    .iter()
                    .map(|t| t.text.to_lowercase())
                    .collect::<Vec<_>>()
                    .join(" ");
                if let Some(label) = self.gazetteer.get(&key) {
                    matched = Some((n, label.clone()));
                    break;
                }
            }

            let (len, label) = match matched {
                Some(found) => found,
                None => match Self::date_len(&words, i) {
                    0 => {
                        i += 1;
                        continue;
                    }
                    n => (n, "DATE".to_string()),
                },
            };

            let start = words[i].start;
            let end = words[i + len - 1].end;
            spans.push(EntitySpan {
                text: text[start..end].to_string(),
                label,
            });
            i += len;
        }

        Ok(spans)
    }
}

/// Splits a gazetteer phrase the same way the model splits text
fn phrase_key(phrase: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(phrase)
        .map(|m| m.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase)
        .collect()
}
