//! Widget implementations for Tickmark.

mod config;
mod error;
pub mod toggle_input;

pub use config::ToggleInputConfig;
pub use error::ConfigError;
pub use toggle_input::{
    ToggleInput, ToggleInputProps, ToggleProp, ToggleState, TOGGLE_INPUT_TEST_ID,
};
