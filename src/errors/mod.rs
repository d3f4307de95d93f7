//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used by every pipeline stage:
//!
//! - Error structures carrying the source line they are attributed to
//! - Specific error variants for lexing, parsing and execution
//! - The coarse `ErrorKind` taxonomy reported to callers
//! - Optional suggestions used by the verbose renderer

pub mod errors;
