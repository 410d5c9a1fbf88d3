//! # Prompt Templates
//!
//! This module contains the fixed prompt used to scope the language model to the
//! PowerCast platform, and the builder that places a user's question into it.

pub mod powercast;

pub use powercast::{build_prompt, POWERCAST_PROMPT_TEMPLATE, PROBLEM_CONTEXT, REFUSAL_MESSAGE};
