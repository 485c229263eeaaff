use log::debug;
use rand::{
    rngs::{StdRng, ThreadRng},
    Rng,
};

use crate::{
    error::{GachaError, GachaResult},
    morph::Tokenize,
    negative::parse_negative,
};

/// Trailing keywords that invoke the gacha.
pub const GACHA_KEYWORDS: [&str; 3] = ["ガチャ", "ｶﾞﾁｬ", "がちゃ"];

/// Draws at or above this value return the negative form.
pub const NEGATE_THRESHOLD: f64 = 0.5;

const KEYWORD_ONLY_SUFFIX: &str = "じゃない";

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_f64(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.gen()
    }
}

/// Removes one trailing gacha keyword, if any.
pub fn remove_gacha(input: &str) -> &str {
    GACHA_KEYWORDS
        .iter()
        .find_map(|keyword| input.strip_suffix(keyword))
        .unwrap_or(input)
}

/// Randomly returns the negative form of `input` or `input` itself, minus the
/// trailing gacha keyword. With `force_negative` the negative form is always returned.
///
/// Failure is detected by comparison: when the negative form is identical to the
/// trimmed input, [`GachaError::ConversionFailed`] is returned. A rewrite that happens
/// to reproduce its input is therefore reported as a failure too.
pub fn exec(
    input: &str,
    tokenizer: Option<&dyn Tokenize>,
    force_negative: bool,
) -> GachaResult<String> {
    exec_with_rng(input, tokenizer, force_negative, &mut rand::thread_rng())
}

/// Same as [`exec`], drawing from `rng` instead of the thread rng.
///
/// The negative form is returned when the draw is at or above [`NEGATE_THRESHOLD`].
/// Output identical to the trimmed input is reported as
/// [`GachaError::ConversionFailed`], including the rare rewrite that reproduces its input.
pub fn exec_with_rng(
    input: &str,
    tokenizer: Option<&dyn Tokenize>,
    force_negative: bool,
    rng: &mut dyn RandomSource,
) -> GachaResult<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GachaError::invalid_input("input is empty"));
    }
    let tokenizer = tokenizer.ok_or_else(|| GachaError::invalid_input("tokenizer is missing"))?;

    let removed = remove_gacha(input);
    if removed.is_empty() {
        return Ok(format!("{}{}", input, KEYWORD_ONLY_SUFFIX));
    }

    let morphemes = tokenizer
        .tokenize(removed)
        .map_err(|e| GachaError::runtime("tokenizer failed", e))?;
    if morphemes.is_empty() {
        return Err(GachaError::runtime(
            "tokenizer returned no morphemes",
            format!("no morphemes for \"{}\"", removed),
        ));
    }
    debug!("{:?}", morphemes);

    // identical output means no rule matched
    let negative = parse_negative(&morphemes);
    if negative == removed {
        return Err(GachaError::ConversionFailed);
    }

    if force_negative {
        return Ok(negative);
    }

    let draw = rng.next_f64();
    debug!("draw {} (negate at >= {})", draw, NEGATE_THRESHOLD);
    if draw >= NEGATE_THRESHOLD {
        Ok(negative)
    } else {
        Ok(removed.to_owned())
    }
}
