//! Turns a Japanese phrase into its negative form, or not, at random.
//!
//! ```no_run
//! use nemui_gacha::{exec, LinderaTokenizer};
//!
//! let tokenizer = LinderaTokenizer::new()?;
//! println!("{}", exec("ねむいガチャ", Some(&tokenizer), false)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod gacha;
pub mod morph;
pub mod negative;

pub use error::{ErrorKind, GachaError, GachaResult};
pub use gacha::{exec, exec_with_rng, remove_gacha, RandomSource};
pub use morph::{LinderaTokenizer, Morpheme, Tokenize};
pub use negative::parse_negative;
