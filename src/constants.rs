//! Fixed labels, paths and messages.
//!
//! Paths are relative to the working directory, which both binaries set from
//! `EXPKIT_BASE_PATH` before touching the filesystem.

/// Default sample size N: output length and label pool size.
pub const DEFAULT_SAMPLE_SIZE: usize = 30;

/// Number of condition labels; the pool holds `N / CONDITION_COUNT` of each.
pub const CONDITION_COUNT: usize = 3;

/// Field set on every sampled stimulus.
pub const CONDITION_FIELD: &str = "condition";

/// Sampler input: JSON array of stimulus objects.
pub const STIMULI_INPUT_PATH: &str = "stimuli.json";

/// Sampler output, overwritten on every run.
pub const STIMULI_OUTPUT_PATH: &str = "./test_stimuli_0.json";

/// Directory receiving session files. Must exist before the server starts.
pub const SESSION_DIR: &str = "data/experiment2";

/// Filename prefix for saved sessions: `session-<uuid>.json`.
pub const SESSION_FILE_PREFIX: &str = "session-";

/// Extension of saved session files.
pub const SESSION_FILE_EXTENSION: &str = "json";

/// Indent unit for pretty-printed session files.
pub const SESSION_INDENT: &[u8] = b"    ";

/// `message` of a 200 response from `/save-json`.
pub const SAVE_SUCCESS_MESSAGE: &str = "JSON file saved successfully";

/// Bind address when `EXPKIT_HOST` is unset.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Bind port when `EXPKIT_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;
