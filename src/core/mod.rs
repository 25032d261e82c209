//! Core scanning primitives
//!
//! The fundamental building blocks for tag extraction:
//! - Scanner: SIMD-accelerated delimiter detection using memchr, with
//!   byte-to-character offset tracking
//! - Tokenizer: pull-style iterators over opening and closing tag matches

pub mod scanner;
pub mod tokenizer;
