use std::path::Path;

use anyhow::Context;

use expkit::constants::{STIMULI_INPUT_PATH, STIMULI_OUTPUT_PATH};
use expkit::env_config;
use expkit::sampler;

fn main() -> anyhow::Result<()> {
    env_config::init_tracing();
    env_config::init_base_path().context("failed to enter EXPKIT_BASE_PATH")?;
    let n = env_config::sample_size();

    let mut rng = rand::rng();
    let written = sampler::run(
        Path::new(STIMULI_INPUT_PATH),
        Path::new(STIMULI_OUTPUT_PATH),
        n,
        &mut rng,
    )?;

    tracing::info!(written, output = STIMULI_OUTPUT_PATH, "sampling complete");
    Ok(())
}
