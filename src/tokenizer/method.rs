/// Tokenization strategies a request can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizationMethod {
    /// Pattern-based word splitting
    Word,
    /// Pattern-based sentence splitting
    Sentence,
    /// Tokens as produced by the language model
    Model,
    /// Any name we do not recognise, kept for error reporting
    Unrecognized(String),
}

impl TokenizationMethod {
    /// Maps a wire name onto a method. Names are matched exactly; anything
    /// else becomes `Unrecognized`.
    pub fn parse(name: &str) -> Self {
        match name {
            "regex_word" | "nltk_word" | "speech" => TokenizationMethod::Word,
            "regex_sentence" | "nltk_sentence" => TokenizationMethod::Sentence,
            "spacy" | "model" => TokenizationMethod::Model,
            _ => TokenizationMethod::Unrecognized(name.to_string()),
        }
    }
}
