//! javierad - persona chat daemon
//!
//! A single-purpose conversational front-end: a static privacy filter in
//! front of a templated prompt to a local Ollama model, served through a
//! small web widget.

pub mod chatbot;
pub mod config;
pub mod ollama;
pub mod privacy;
pub mod prompt;
pub mod routes;
pub mod server;
