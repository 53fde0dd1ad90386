use serde::{Deserialize, Serialize};

/// Universal part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary verb
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Common noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Other
    X,
    /// Whitespace
    Space,
}

/// A token as segmented and tagged by a language model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelToken {
    /// Surface text of the token
    pub text: String,
    /// Byte offset of the token start in the source text
    pub start: usize,
    /// Byte offset one past the token end
    pub end: usize,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Token consists only of punctuation
    pub is_punct: bool,
    /// Token consists only of whitespace
    pub is_space: bool,
}

impl ModelToken {
    /// Whether the token counts as a word for frequency purposes
    pub fn is_word(&self) -> bool {
        !self.is_punct && !self.is_space
    }
}

/// A named entity found in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
}
