use std::fmt;

/// Part-of-speech major classification, mapped bit-exact from IPADIC's
/// Japanese-language column (see the loader's `PartOfSpeech::from_major`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Adj,
    Verb,
    AuxVerb,
    Particle,
    Punc,
    Unknown,
}

impl PartOfSpeech {
    /// Map an IPADIC `part_of_speech_major` field to its closed-set tag.
    /// Anything not in the table falls back to `Unknown`.
    pub fn from_major(major: &str) -> Self {
        match major {
            "名詞" => PartOfSpeech::Noun,
            "形容詞" => PartOfSpeech::Adj,
            "動詞" => PartOfSpeech::Verb,
            "助動詞" => PartOfSpeech::AuxVerb,
            "助詞" => PartOfSpeech::Particle,
            "記号" => PartOfSpeech::Punc,
            _ => PartOfSpeech::Unknown,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::AuxVerb => "AUX_VERB",
            PartOfSpeech::Particle => "PARTICLE",
            PartOfSpeech::Punc => "PUNC",
            PartOfSpeech::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Grammatical features attached to a term entry: the closed-set POS tag
/// plus IPADIC's free-form subdivision string (columns past the major tag).
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    pub part_of_speech: PartOfSpeech,
    pub subdivision: String,
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.part_of_speech, self.subdivision)
    }
}

/// A single dictionary term: one row of an IPADIC-style CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct TermEntry {
    pub surface_form: String,
    pub left_context_id: u16,
    pub right_context_id: u16,
    pub emission_cost: i32,
    pub features: Features,
}

impl TermEntry {
    /// Codepoint length of the surface form, used for lattice span arithmetic.
    pub fn surface_len(&self) -> usize {
        self.surface_form.chars().count()
    }
}
