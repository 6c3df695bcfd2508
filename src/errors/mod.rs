//! Error types for scanning, parsing and literal decoding.
//!
//! - `Error`/`ErrorImpl`: structural failures with a source position
//! - `ErrorTip`: a human-readable hint attached to each error kind
//! - `DecodeError`: failures surfaced only when a literal value is decoded

pub mod errors;
