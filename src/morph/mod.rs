use std::fmt;

use anyhow::Result;
use lindera::tokenizer::Tokenizer;

// `Token.detail` structure (ipadic)
// [pos, pos detail 1, pos detail 2, pos detail 3, conjugated type, conjugated form, basic form, reading, pronunciation]
// unknown words only carry ["UNK"]

// 形容詞: adjective
// 動詞: verb
// 助動詞: auxiliary verb
// 助詞: particle
// 名詞: noun
//   固有名詞: proper noun
//   一般: universal
//   代名詞: pronoun
//   サ変接続: suru verb stem
//   接尾: suffix
// 副詞: adverb
// 連体詞: adnominal, e.g. 大きな
// 一段: ichidan
// 五段: godan

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PartOfSpeech {
    Adjective,
    Verb,
    AuxiliaryVerb,
    Particle,
    Noun,
    Adverb,
    Adnominal,
    Other,
}

impl PartOfSpeech {
    fn from_ipadic(pos: &str) -> Self {
        match pos {
            "形容詞" => PartOfSpeech::Adjective,
            "動詞" => PartOfSpeech::Verb,
            "助動詞" => PartOfSpeech::AuxiliaryVerb,
            "助詞" => PartOfSpeech::Particle,
            "名詞" => PartOfSpeech::Noun,
            "副詞" => PartOfSpeech::Adverb,
            "連体詞" => PartOfSpeech::Adnominal,
            _ => PartOfSpeech::Other,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

/// First refinement of the part of speech. Only the noun subtypes the negation
/// rules look at are told apart.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PosDetail {
    ProperNoun,
    General,
    Pronoun,
    SuruConnection,
    Suffix,
    Other,
}

impl PosDetail {
    fn from_ipadic(detail: &str) -> Self {
        match detail {
            "固有名詞" => PosDetail::ProperNoun,
            "一般" => PosDetail::General,
            "代名詞" => PosDetail::Pronoun,
            "サ変接続" => PosDetail::SuruConnection,
            "接尾" => PosDetail::Suffix,
            _ => PosDetail::Other,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ConjugationType {
    Ichidan,
    Godan,
    Other,
}

impl ConjugationType {
    fn from_ipadic(conjugated_type: &str) -> Self {
        // 一段・クレル and friends are irregular, only the plain class counts
        if conjugated_type == "一段" {
            ConjugationType::Ichidan
        } else if conjugated_type.starts_with("五段") {
            ConjugationType::Godan
        } else {
            ConjugationType::Other
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Morpheme {
    surface_form: String,
    pos: PartOfSpeech,
    pos_detail_1: PosDetail,
    conjugated_type: ConjugationType,
    basic_form: String,
}

impl Morpheme {
    pub fn new(
        surface_form: impl Into<String>,
        pos: PartOfSpeech,
        pos_detail_1: PosDetail,
        conjugated_type: ConjugationType,
        basic_form: impl Into<String>,
    ) -> Self {
        Self {
            surface_form: surface_form.into(),
            pos,
            pos_detail_1,
            conjugated_type,
            basic_form: basic_form.into(),
        }
    }

    /// Builds a morpheme from its surface and an ipadic feature row.
    pub fn from_ipadic<S: AsRef<str>>(surface_form: &str, detail: &[S]) -> Self {
        let detail: Vec<&str> = detail.iter().map(AsRef::as_ref).collect();
        match detail.as_slice() {
            [pos, pos_detail_1, _, _, conjugated_type, _, basic_form, ..] => Self::new(
                surface_form,
                PartOfSpeech::from_ipadic(pos),
                PosDetail::from_ipadic(pos_detail_1),
                ConjugationType::from_ipadic(conjugated_type),
                match *basic_form {
                    "*" | "" => surface_form,
                    basic_form => basic_form,
                },
            ),
            _ => Self::new(
                surface_form,
                PartOfSpeech::Other,
                PosDetail::Other,
                ConjugationType::Other,
                surface_form,
            ),
        }
    }

    pub fn surface_form(&self) -> &str {
        &self.surface_form
    }
    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }
    pub fn pos_detail_1(&self) -> PosDetail {
        self.pos_detail_1
    }
    pub fn conjugated_type(&self) -> ConjugationType {
        self.conjugated_type
    }
    pub fn basic_form(&self) -> &str {
        &self.basic_form
    }
}

/// Splits a phrase into morphemes, in text order.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>>;
}

/// Tokenizer backed by lindera and its embedded ipadic dictionary.
pub struct LinderaTokenizer {
    tokenizer: Tokenizer,
}

impl LinderaTokenizer {
    pub fn new() -> Result<Self> {
        let tokenizer = Tokenizer::new()
            .map_err(|e| anyhow::anyhow!("failed to build the lindera tokenizer: {}", e))?;
        Ok(Self { tokenizer })
    }
}

impl Tokenize for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>> {
        Ok(self
            .tokenizer
            .tokenize(text)
            .map_err(|e| anyhow::anyhow!("failed to tokenize \"{}\": {}", text, e))?
            .iter()
            .map(|token| Morpheme::from_ipadic(token.text, &token.detail))
            .collect())
    }
}
