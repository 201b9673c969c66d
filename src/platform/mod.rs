//! Platform abstraction layer
//!
//! Turns host events into simulation input. Hosts call `key_down`/`key_up`
//! from their event loop and `take_tick` once per frame.

pub mod input;

pub use input::{InputState, Key};
