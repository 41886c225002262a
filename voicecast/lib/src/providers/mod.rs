//! TTS provider implementations.
//!
//! Only cloud (HTTP API) providers are supported.

pub mod cloud;
