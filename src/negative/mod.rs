//! Negation engine: rewrites the tail of a tokenized phrase into its negative form.
//!
//! Only the last morpheme is inspected, plus the one before it for a few
//! auxiliary verb and particle cases. Everything else is copied verbatim.

use log::debug;

use crate::morph::{ConjugationType, Morpheme, PartOfSpeech, PosDetail};

/// Overrides the surface text of the morpheme at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub index: usize,
    pub text: String,
}

/// Godan dictionary endings and their negative stem.
/// ぐ and ぶ are not handled and stay as they are.
const GODAN_NEGATIVE_STEMS: [(char, char); 9] = [
    ('う', 'わ'),
    ('く', 'か'),
    ('す', 'さ'),
    ('つ', 'た'),
    ('ぬ', 'な'),
    ('ふ', 'は'),
    ('む', 'ま'),
    ('ゆ', 'や'),
    ('る', 'ら'),
];

/// Converts the phrase to its negative form. Returns the plain concatenation
/// when no rule applies.
pub fn parse_negative(morphemes: &[Morpheme]) -> String {
    apply(morphemes, &replacements(morphemes))
}

/// Concatenates the surface forms, substituting the replaced positions.
pub fn apply(morphemes: &[Morpheme], replacements: &[Replacement]) -> String {
    morphemes
        .iter()
        .enumerate()
        .map(|(index, morpheme)| {
            replacements
                .iter()
                .find(|replacement| replacement.index == index)
                .map_or(morpheme.surface_form(), |replacement| replacement.text.as_str())
        })
        .collect()
}

/// Picks the rewrite for the tail of the phrase. Empty when no rule applies,
/// otherwise a single entry for the last or the second to last morpheme.
pub fn replacements(morphemes: &[Morpheme]) -> Vec<Replacement> {
    let (last, rest) = match morphemes.split_last() {
        Some(split) => split,
        None => return Vec::new(),
    };
    let last_index = rest.len();
    let previous = rest.last();

    let replacement = match last.pos() {
        PartOfSpeech::Adjective => negate_adjective(last),
        PartOfSpeech::Verb => negate_verb(last),
        PartOfSpeech::AuxiliaryVerb => match (last.surface_form(), previous) {
            ("た", Some(previous)) => {
                return negate_past(previous, last_index - 1, last_index)
                    .into_iter()
                    .collect()
            }
            ("だ" | "な", Some(previous)) if is_nominal(previous) => Some("じゃない".to_owned()),
            ("たい", _) => Some("たくない".to_owned()),
            ("ない", _) => Some("なくない".to_owned()),
            ("ます", _) => Some("ません".to_owned()),
            _ => None,
        },
        PartOfSpeech::Particle => match (last.surface_form(), previous) {
            ("て", _) => Some("ない".to_owned()),
            ("な", Some(previous)) if is_nominal(previous) => Some("じゃない".to_owned()),
            _ => None,
        },
        PartOfSpeech::Noun => match last.pos_detail_1() {
            PosDetail::ProperNoun | PosDetail::General | PosDetail::Pronoun => {
                Some(format!("{}じゃない", last.surface_form()))
            }
            PosDetail::SuruConnection | PosDetail::Suffix => {
                Some(format!("{}しない", last.surface_form()))
            }
            PosDetail::Other => None,
        },
        PartOfSpeech::Adverb => Some(format!("{}じゃない", last.surface_form())),
        // e.g. 大きな
        PartOfSpeech::Adnominal if last.surface_form().ends_with('な') => {
            Some(format!("{}わけない", last.surface_form()))
        }
        PartOfSpeech::Adnominal | PartOfSpeech::Other => None,
    };

    replacement
        .map(|text| Replacement {
            index: last_index,
            text,
        })
        .into_iter()
        .inspect(|replacement| debug!("{:?} -> {:?}", last.surface_form(), replacement.text))
        .collect()
}

fn is_nominal(morpheme: &Morpheme) -> bool {
    matches!(morpheme.pos(), PartOfSpeech::Adverb | PartOfSpeech::Noun)
}

fn negate_adjective(adjective: &Morpheme) -> Option<String> {
    replace_suffix(adjective.surface_form(), "い", "くない")
}

fn negate_verb(verb: &Morpheme) -> Option<String> {
    let surface = verb.surface_form();
    if let Some(stem) = strip_suffixes(surface, &["する", "すれ"]) {
        Some(format!("{}すない", stem))
    } else if let Some(stem) = strip_suffixes(surface, &["ずる", "ずれ"]) {
        Some(format!("{}じない", stem))
    } else {
        match verb.conjugated_type() {
            ConjugationType::Ichidan => Some(replace_suffix_or_keep(surface, "る", "ない")),
            ConjugationType::Godan => Some(format!("{}ない", godan_negative_stem(surface))),
            ConjugationType::Other => None,
        }
    }
}

/// Past tense `た`: looks back at the morpheme it attaches to.
/// Returns at most one replacement, either for `た` itself or for the previous morpheme.
fn negate_past(
    previous: &Morpheme,
    previous_index: usize,
    last_index: usize,
) -> Option<Replacement> {
    let surface = previous.surface_form();
    let (index, text) = if previous.pos() == PartOfSpeech::Verb && matches!(surface, "て" | "い")
    {
        (last_index, "なかった".to_owned())
    } else if surface == "来" {
        (last_index, "ない".to_owned())
    } else if surface.ends_with('い') {
        (last_index, "てない".to_owned())
    } else {
        // rebuild from the basic form, the trailing た is reused as is
        let basic_form = previous.basic_form();
        let text = match previous.pos() {
            PartOfSpeech::Adjective => replace_suffix(basic_form, "い", "くなかっ"),
            PartOfSpeech::Verb => match previous.conjugated_type() {
                ConjugationType::Ichidan => {
                    Some(replace_suffix_or_keep(basic_form, "る", "なかっ"))
                }
                ConjugationType::Godan => {
                    Some(format!("{}なかっ", godan_negative_stem(basic_form)))
                }
                ConjugationType::Other => None,
            },
            _ => None,
        }?;
        (previous_index, text)
    };
    debug!("{:?}た -> index {}: {:?}", surface, index, text);
    Some(Replacement { index, text })
}

/// Swaps the trailing dictionary ending for its negative stem, leaving unknown endings alone.
fn godan_negative_stem(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next_back().and_then(|ending| {
        GODAN_NEGATIVE_STEMS
            .iter()
            .find(|(dictionary, _)| *dictionary == ending)
    }) {
        Some((_, stem)) => {
            let mut negative = chars.as_str().to_owned();
            negative.push(*stem);
            negative
        }
        None => word.to_owned(),
    }
}

fn strip_suffixes<'a>(word: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
}

fn replace_suffix(word: &str, suffix: &str, replacement: &str) -> Option<String> {
    word.strip_suffix(suffix)
        .map(|stem| format!("{}{}", stem, replacement))
}

fn replace_suffix_or_keep(word: &str, suffix: &str, replacement: &str) -> String {
    replace_suffix(word, suffix, replacement).unwrap_or_else(|| word.to_owned())
}
