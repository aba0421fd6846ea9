//! # Shared Types Crate
//!
//! This crate contains the domain primitives shared by the quiz platform's
//! subsystems: actor identifiers, quiz identifiers, logical timestamps, and
//! the authored `Question` entity.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Trusted Identity**: `Address` values flow in from the host environment;
//!   payloads MUST NOT self-assert the invoking actor.

pub mod entities;

pub use entities::*;
