use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use nemui_gacha::{
    config::{load_config, load_config_from},
    exec_with_rng, LinderaTokenizer,
};

#[derive(Parser)]
#[command(name = "nemui-gacha", version)]
#[command(about = "Negates a Japanese phrase, or not")]
struct Opts {
    /// Always answer with the negative form.
    #[arg(long)]
    force: bool,
    /// Seed the draw for a reproducible answer.
    #[arg(long)]
    seed: Option<u64>,
    /// Read the config from this file instead of the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// The phrase, words are joined with a space.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}


fn main() -> Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let input = opts.text.join(" ").trim().to_owned();
    if input.is_empty() {
        anyhow::bail!("Please input text.");
    }

    let mut config = match &opts.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    config.force_negative |= opts.force;
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    debug!("{:?}", config);

    let tokenizer = LinderaTokenizer::new()?;
    let mut rng = config.random_source();
    let result = exec_with_rng(&input, Some(&tokenizer), config.force_negative, rng.as_mut())
        .context("Failed to exec")?;
    println!("{}", result);

    Ok(())
}
