//! Host operating-system queries.
//!
//! [`Os`](kind::Os) classifies the host OS family and [`Env`](env::Env)
//! snapshots the environment variables the path resolver consumes.

pub mod env;
pub mod kind;
