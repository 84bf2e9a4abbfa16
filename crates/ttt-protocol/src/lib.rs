//! ttt-protocol
//!
//! Wire-level encoding/decoding for the tic-tac-toe lobby server.
//!
//! This crate is responsible for turning logical messages
//! (`ttt_core::InputMessage` / `OutputMessage`) into text lines and
//! back again.
//!
//! - [`wire_types`] : verbs, separators and limits
//! - [`text_codec`] : the pipe-delimited line codec

pub mod wire_types;
pub mod text_codec;

pub use text_codec::{
    format_input,
    format_output,
    parse_input_line,
    parse_output_line,
};
