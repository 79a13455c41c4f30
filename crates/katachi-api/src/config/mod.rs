//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_PRESET_DICT, MAX_WORD_LENGTH};
pub use env::{Config, parse_log_level, parse_preset};
