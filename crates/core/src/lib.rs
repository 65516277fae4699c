//! Conversion engine between the wire and native audio models
//!
//! The wire model ([`domain::wire`]) is the IPC-facing form of the audio
//! objects: index-numbered enumerators, explicitly tagged unions, counted
//! sequences. The native model ([`domain::native`]) is the process-local
//! form: flag-style bitmasks, implicit-discriminant structs, fixed string
//! buffers. The [`convert`] module holds the generic primitives and the
//! per-object converter pairs that carry values across that boundary in
//! both directions.

pub mod convert;
pub mod domain;
