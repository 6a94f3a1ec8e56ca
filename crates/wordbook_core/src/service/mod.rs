//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the interactive session decoupled from storage details.

pub mod dictionary_service;
