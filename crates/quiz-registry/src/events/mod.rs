//! # Events Module
//!
//! Append-only domain events published by the Quiz Registry.

pub mod payloads;

pub use payloads::QuizCreatedPayload;
