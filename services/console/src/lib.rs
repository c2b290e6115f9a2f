//! Disc AI Console
//!
//! A terminal front end for the session controller: configuration, the
//! file-backed narration sink, stand-in voice-capture capabilities, and the
//! interactive read/submit loop. The `discai` binary is a thin wrapper around
//! this library.

pub mod app;
pub mod config;
pub mod material;
pub mod playback;
pub mod voice;
