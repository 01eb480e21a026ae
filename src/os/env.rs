use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Immutable snapshot of the host environment variables, taken once at
/// construction and never refreshed. On Windows lookups additionally fall
/// back to a case-insensitive match, since its variable names are
/// case-insensitive.
///
/// This is the host-property layer for the path resolver: it answers "who is
/// the current user" and "where is their home directory" without touching the
/// filesystem.
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,
}

/// Errors encountered when getting an environmental variable as UTF-8.
#[derive(Debug, Clone, Error)]
pub enum EnvStrError {
    /// This variant indicates, that variable `Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Snapshot [`std::env::vars_os`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create an [`Env`] from `env` instead of the process environment.
    ///
    /// This is the injection seam: tests build resolvers against arbitrary
    /// user/home values without mutating the process environment.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            normalised_keys: Env::normalize_map(&env),
            keys: env,
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn normalize_map(keys: &HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.iter()
            .map(|(key, value)| (Env::normalize_key(key), value.clone()))
            .collect()
    }

    /// Get the variable pointed to by `key`.
    ///
    /// # Returns
    /// `None` indicates a missing key, `Some` an existing one.
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Get the variable pointed to by `key` and convert it to UTF-8.
    ///
    /// # Examples
    /// ```rust
    /// use syspaths::os::env::Env;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env = Env::new();
    /// let _path = env.get("PATH")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }

    /// Current username, as reported by `$USER`, falling back to `$USERNAME`.
    ///
    /// `None` when neither variable is set; callers must tolerate the
    /// absence. See [`passwd_username`] for the Unix fallback past the
    /// environment.
    pub fn username(&self) -> Option<&str> {
        self.get("USER").or_else(|_| self.get("USERNAME")).ok()
    }

    /// Home directory of the current user, as reported by `$HOME`, falling
    /// back to `$USERPROFILE`. The value is returned verbatim, with no
    /// validation against the filesystem.
    pub fn home(&self) -> Option<&str> {
        self.get("HOME").or_else(|_| self.get("USERPROFILE")).ok()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

/// Username from the passwd database, for processes running without `$USER`.
#[cfg(unix)]
pub fn passwd_username() -> Option<String> {
    use std::ffi::CStr;

    // SAFETY: `getuid` has no preconditions. `getpwuid` returns null or a
    // pointer into static libc storage, valid until the next passwd call.
    let passwd = unsafe { libc::getpwuid(libc::getuid()) };
    if passwd.is_null() {
        return None;
    }
    // SAFETY: Non-null `passwd` has a valid NUL-terminated `pw_name`.
    let name = unsafe { CStr::from_ptr((*passwd).pw_name) };
    name.to_str().ok().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok, assert_some};

    fn env_of(pairs: &[(&str, &str)]) -> Env {
        Env::new_from(
            pairs
                .iter()
                .map(|(k, v)| (OsString::from(k), OsString::from(v)))
                .collect(),
        )
    }

    #[test]
    fn get_existing_key() {
        let env = env_of(&[("FOO", "bar")]);
        assert_eq!(assert_ok!(env.get("FOO")), "bar");
    }

    #[test]
    fn get_missing_key_errors() {
        let env = env_of(&[]);
        let result = env.get("FOO");
        assert_err!(&result);
        assert!(matches!(result.unwrap_err(), EnvStrError::Missing(_)));
    }

    #[test]
    #[cfg(not(windows))]
    fn lookup_is_case_sensitive_outside_windows() {
        let env = env_of(&[("FOO", "bar")]);
        assert!(env.get_os("foo").is_none());
    }

    #[test]
    #[cfg(windows)]
    fn lookup_is_case_insensitive_on_windows() {
        let env = env_of(&[("FOO", "bar")]);
        assert_eq!(env.get_os("foo"), Some(OsStr::new("bar")));
    }

    #[test]
    fn username_prefers_user_over_username() {
        let env = env_of(&[("USER", "joe"), ("USERNAME", "jane")]);
        assert_eq!(env.username(), Some("joe"));

        let env = env_of(&[("USERNAME", "jane")]);
        assert_eq!(env.username(), Some("jane"));

        let env = env_of(&[]);
        assert_eq!(env.username(), None);
    }

    #[test]
    fn home_prefers_home_over_userprofile() {
        let env = env_of(&[("HOME", "/home/joe"), ("USERPROFILE", "C:/Users/joe")]);
        assert_eq!(env.home(), Some("/home/joe"));

        let env = env_of(&[("USERPROFILE", "C:/Users/joe")]);
        assert_eq!(env.home(), Some("C:/Users/joe"));
    }

    #[test]
    #[cfg(unix)]
    fn passwd_username_resolves() {
        // Every test process has a uid with a passwd entry.
        let name = assert_some!(passwd_username());
        assert!(!name.is_empty());
    }
}
