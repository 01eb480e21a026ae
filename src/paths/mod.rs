//! OS-dependent path resolution.
//!
//! Provides [`Resolver`], which turns a snapshot of host properties (OS
//! family, username, home directory) into user-relative and root-relative
//! paths, plus [`host`] for the process-wide cached instance.
//!
//! ```rust
//! # use syspaths::paths::{Resolver, host};
//! # use syspaths::os::kind::Os;
//! let resolver = Resolver::new(Os::Linux, "joe", "");
//! assert_eq!(resolver.user_dir_path(), "/home/joe/");
//!
//! // Or resolve against the actual host, detected once per process:
//! let _home = host().user_dir();
//! ```

pub mod resolver;

pub use resolver::{Resolver, host};
