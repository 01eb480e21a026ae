use std::fmt;

/// Operating-system family the process runs on.
///
/// Only the three families with distinct path conventions are distinguished;
/// everything else is folded into [`Os::Linux`] by [`Os::classify`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Windows,
}

impl Os {
    /// Classify a host-reported OS name.
    ///
    /// The name is lowercased and matched by substring, in this priority
    /// order: `"mac"`, then `"linux"`, then `"windows"`. Anything else falls
    /// back to [`Os::Linux`], since other Unix variants follow Linux path
    /// conventions. Total: never fails.
    ///
    /// # Examples
    /// ```rust
    /// use syspaths::os::kind::Os;
    ///
    /// assert_eq!(Os::classify("Mac OS X"), Os::MacOs);
    /// assert_eq!(Os::classify("Windows 10"), Os::Windows);
    /// assert_eq!(Os::classify("openbsd"), Os::Linux);
    /// ```
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("mac") {
            Os::MacOs
        } else if name.contains("linux") {
            Os::Linux
        } else if name.contains("windows") {
            Os::Windows
        } else {
            Os::Linux
        }
    }

    /// Classify the OS the process is currently running on, as reported by
    /// [`std::env::consts::OS`].
    pub fn current() -> Self {
        Self::classify(std::env::consts::OS)
    }

    /// Whether paths on this family use a bare `/` as the filesystem root.
    pub const fn is_unix_like(&self) -> bool {
        matches!(self, Os::MacOs | Os::Linux)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Os::MacOs => "macos",
            Os::Linux => "linux",
            Os::Windows => "windows",
        };
        f.write_str(name)
    }
}
