//! Syspaths - OS-dependent filesystem path resolution.
//!
//! This crate resolves paths that depend on the host operating system and the
//! current user: the user's home directory, files relative to it, and files
//! relative to the filesystem root. Resolution is a pure lookup over a
//! snapshot of host properties; nothing is validated against the actual
//! filesystem.

pub mod os;
pub mod paths;
