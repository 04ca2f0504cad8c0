//! Upstream generative service clients.

pub mod gemini;
