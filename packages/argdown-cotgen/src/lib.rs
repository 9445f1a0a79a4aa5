//! A reconstruction-trace generator for the *Argdown* argumentation notation: given a parsed
//! argument map or premise-conclusion argument, emits an ordered sequence of versioned Argdown
//! snippets with interleaved natural-language explanations, simulating how a reasoner might build
//! the final snippet up incrementally.
//!
//! The pipeline is strictly left-to-right: a line classifier ([`lexer`], internal) feeds a parser
//! ([`parser`], internal) that assembles a typed [`tree::Tree`]; a family of reconstruction
//! strategies ([`strategy`]) reads that tree and emits [`strategy::Step`]s without ever mutating
//! it; a formatter ([`cot`], internal) stitches those steps into the final trace. [`dispatcher`]
//! is the one entry point a caller needs: configure a [`config::PipeType`] and [`config::Config`],
//! hand it an Argdown string, get a trace back.

pub mod config;
pub mod dispatcher;
pub mod error;
mod lexer;
mod parser;
mod serializer;
pub mod strategy;
pub mod tree;
pub mod view;
mod yaml;
mod cot;

#[cfg(test)]
mod tests;

pub use config::{Config, PipeType};
pub use dispatcher::CotGenerator;
pub use error::GenerationError;
pub use strategy::Step;
pub use tree::Tree;
