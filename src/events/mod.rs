//! Event types exchanged across systems.
//!
//! Events provide a decoupled way for systems to communicate: the input
//! system emits them, observers react to them.
//!
//! Submodules:
//! - [`input`] – press/release edges of the four direction keys

pub mod input;
