//! Wire formats for the upstream generative API.

pub mod gemini;
