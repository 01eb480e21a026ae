use std::path::PathBuf;
use std::sync::OnceLock;

use crate::os::env::Env;
use crate::os::kind::Os;

/// Resolves OS-dependent filesystem paths from a snapshot of host properties.
///
/// The snapshot is taken once at construction: a resolver never observes a
/// mid-process user or OS change. Missing host properties are stored as empty
/// strings and surface as empty path segments (e.g. `/home//`), never as
/// errors; whether such a path is usable is decided by whoever performs I/O
/// with it, not here.
///
/// Construct with [`Resolver::from_host`] (or the cached [`host`]) to query
/// the real host, or with [`Resolver::new`] to inject arbitrary values.
///
/// ```rust
/// use syspaths::os::kind::Os;
/// use syspaths::paths::Resolver;
///
/// let resolver = Resolver::new(Os::MacOs, "joe", "");
/// assert_eq!(resolver.user_dir_path(), "/Users/joe/");
/// assert_eq!(resolver.user_file("notes.txt").as_os_str(), "/Users/joe/notes.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    os: Os,
    user: String,
    home: String,
}

impl Resolver {
    /// Create a resolver from explicit values.
    ///
    /// `home` is only consulted for [`Os::Windows`], where the host-reported
    /// home directory is used verbatim instead of a constructed
    /// `/Users/...`-style prefix.
    pub fn new(os: Os, user: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            os,
            user: user.into(),
            home: home.into(),
        }
    }

    /// Create a resolver from an environment snapshot, with the OS family
    /// taken from [`Os::current`].
    ///
    /// The username comes from [`Env::username`]; on Unix, processes running
    /// without `$USER` fall back to the passwd database. Properties that
    /// cannot be resolved become empty strings.
    pub fn from_env(env: &Env) -> Self {
        let user = env.username().map(str::to_owned);
        #[cfg(unix)]
        let user = user.or_else(crate::os::env::passwd_username);
        Self::new(
            Os::current(),
            user.unwrap_or_default(),
            env.home().unwrap_or_default(),
        )
    }

    /// Create a resolver from the current process environment.
    pub fn from_host() -> Self {
        Self::from_env(&Env::new())
    }

    /// OS family this resolver was built for.
    pub fn os(&self) -> Os {
        self.os
    }

    /// Username this resolver was built for. Possibly empty.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Absolute path of the current user's home directory, always with a
    /// trailing `/`.
    ///
    /// | OS | result |
    /// |---|---|
    /// | macOS | `/Users/<user>/` |
    /// | Linux | `/home/<user>/` |
    /// | Windows | host-reported home, verbatim, plus `/` |
    pub fn user_dir_path(&self) -> String {
        match self.os {
            Os::MacOs => format!("/Users/{}/", self.user),
            Os::Linux => format!("/home/{}/", self.user),
            Os::Windows => format!("{}/", self.home),
        }
    }

    /// [`Resolver::user_dir_path`] as a [`PathBuf`]. No existence check.
    pub fn user_dir(&self) -> PathBuf {
        PathBuf::from(self.user_dir_path())
    }

    /// The file at `relative` inside the current user's home directory.
    ///
    /// Plain string concatenation onto [`Resolver::user_dir_path`]: no
    /// normalization, so `relative` must not start with a separator.
    pub fn user_file(&self, relative: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.user_dir_path(), relative))
    }

    /// The file at `relative` under the filesystem root: `/` on macOS and
    /// Linux, `C:/` on Windows.
    ///
    /// ```rust
    /// # use syspaths::os::kind::Os;
    /// # use syspaths::paths::Resolver;
    /// let resolver = Resolver::new(Os::Linux, "joe", "");
    /// assert_eq!(resolver.system_file("usr/share").as_os_str(), "/usr/share");
    /// ```
    pub fn system_file(&self, relative: &str) -> PathBuf {
        if self.os.is_unix_like() {
            PathBuf::from(format!("/{relative}"))
        } else {
            PathBuf::from(format!("C:/{relative}"))
        }
    }
}

/// Resolver for the actual host, built on first use and cached for the
/// process lifetime.
pub fn host() -> &'static Resolver {
    static HOST: OnceLock<Resolver> = OnceLock::new();
    HOST.get_or_init(Resolver::from_host)
}
