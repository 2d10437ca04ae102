//! Testing utilities for code that uses postmarks.
//!
//! This module provides:
//! - `CallRecorder`, a shareable sink whose callbacks record every invocation

mod recorder;

pub use recorder::CallRecorder;
