//! Build information embedded at compile time.

use std::fmt;

/// Version identifier supplied through `ECHO_VERSION` when the binary was
/// built. Empty when the variable was not set.
pub const VERSION_ID: &str = match option_env!("ECHO_VERSION") {
    Some(v) => v,
    None => "",
};

/// Metadata describing the build, logged at startup.
///
/// Everything except `version_id` and `package_version` comes from the
/// `VERGEN_*` variables emitted by `build.rs`; a value vergen could not
/// determine is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version_id: &'static str,
    pub package_version: &'static str,
    pub build_timestamp: Option<&'static str>,
    pub git_sha: Option<&'static str>,
    pub git_dirty: bool,
    pub rustc_semver: Option<&'static str>,
    pub target: Option<&'static str>,
}

impl BuildInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            version_id: VERSION_ID,
            package_version: env!("CARGO_PKG_VERSION"),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP"),
            git_sha: option_env!("VERGEN_GIT_SHA"),
            git_dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
            rustc_semver: option_env!("VERGEN_RUSTC_SEMVER"),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE"),
        }
    }

    /// First seven characters of the commit, with `-dirty` appended for a
    /// modified work tree.
    #[must_use]
    pub fn short_sha(&self) -> Option<String> {
        self.git_sha.map(|sha| {
            let short = sha.get(..7).unwrap_or(sha);
            if self.git_dirty {
                format!("{short}-dirty")
            } else {
                short.to_string()
            }
        })
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "echo {}", self.package_version)?;
        if !self.version_id.is_empty() {
            write!(f, " [{}]", self.version_id)?;
        }
        if let Some(sha) = self.short_sha() {
            write!(f, " ({sha})")?;
        }
        if let Some(target) = self.target {
            write!(f, " {target}")?;
        }
        if let Some(rustc) = self.rustc_semver {
            write!(f, " rustc {rustc}")?;
        }
        if let Some(ts) = self.build_timestamp {
            write!(f, " built {ts}")?;
        }
        Ok(())
    }
}
