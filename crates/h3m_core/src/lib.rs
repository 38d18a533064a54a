//! Decoder and semantic view for the Heroes of Might and Magic III map
//! container (`.h3m`).
//!
//! The input is the already-decompressed map stream; decompressing the
//! on-disk gzip container is the caller's concern. `MapDocument::decode`
//! runs one strictly sequential pass over the stream and either yields the
//! full document or fails on the first structural or semantic violation.
//! `map_api::Map` wraps a finished document with typed accessors.

pub mod codes;
pub mod document;
pub mod error;
pub mod map_api;
pub mod reader;
