//! Platform collaborators of the conversion engine
//!
//! The conversion core is pure; everything that owns an operating-system
//! resource lives here. Today that is the shared-memory region support:
//! the wire-facing region descriptor and the live mapping it converts to.

pub mod shm;
