//! Core Elm Architecture implementation
//!
//! - Messages (`msg`) describe what happened
//! - State (`state`) is the whole application model
//! - `update` is the only place state changes
//! - Commands (`cmd`) are the side effects the host must perform
//! - The translator turns terminal events into messages

pub mod cmd;
pub mod msg;
pub mod state;
pub mod translator;
pub mod update;
