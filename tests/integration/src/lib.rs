//! Integration test utilities for the Prompt Gallery API
//!
//! In-memory repositories, request fixtures, and helpers for driving the
//! router directly or through a real listener.

pub mod fixtures;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::{InMemoryPromptRepository, InMemoryRequestRepository, InMemoryUserRepository};
