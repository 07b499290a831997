//! Utility modules

pub mod text;

pub use text::{char_len, split_at_char};
