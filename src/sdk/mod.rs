mod host;


pub use host::Host;

use path_absolutize::Absolutize;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable conventionally pointing at a JDK or JRE install
const JAVA_HOME_VAR: &str = "JAVA_HOME";

/// A local Android SDK installation, used to find build tools
pub struct SdkEnvironment {
    sdk_root: PathBuf,
    host: Host,
}

impl SdkEnvironment {
    /// Create an environment rooted at the given SDK directory
    pub fn new(sdk_root: impl Into<PathBuf>) -> Self {
        Self::with_host(sdk_root, Host::detect())
    }

    /// Create an environment with an explicit host, mainly for tests
    pub fn with_host(sdk_root: impl Into<PathBuf>, host: Host) -> Self {
        Self {
            sdk_root: sdk_root.into(),
            host,
        }
    }

    /// Locate the zipalign executable under the SDK root.
    ///
    /// The standalone `tools/` copy wins outright. Failing that, the
    /// versioned `build-tools/` directories are searched recursively and
    /// the path-comparison-greatest match is taken as a stand-in for the
    /// newest installed version. Absence is `None`, never an error.
    pub fn locate_zipalign(&self) -> Option<PathBuf> {
        let executable = format!("zipalign{}", self.host.exe_suffix());

        let tools = self.sdk_root.join("tools").join(&executable);
        if tools.is_file() {
            log::debug!("Found zipalign at {}", tools.display());
            return absolute(&tools);
        }

        let newest = WalkDir::new(self.sdk_root.join("build-tools"))
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_type().is_file() && entry.file_name() == OsStr::new(&executable)
            })
            .map(|entry| entry.into_path())
            .max();

        match newest {
            Some(path) => {
                log::debug!("Found zipalign at {}", path.display());
                absolute(&path)
            }
            None => {
                log::debug!("zipalign not found under {}", self.sdk_root.display());
                None
            }
        }
    }
}

/// A local Java runtime installation, used to find jarsigner
pub struct JavaRuntime {
    home: PathBuf,
    host: Host,
}

impl JavaRuntime {
    /// Resolve the runtime from the conventional `JAVA_HOME` variable
    pub fn from_env() -> Option<Self> {
        let home = env::var_os(JAVA_HOME_VAR)?;
        Some(Self::new(PathBuf::from(home), Host::detect()))
    }

    /// Create a runtime with an explicit home and host
    pub fn new(home: impl Into<PathBuf>, host: Host) -> Self {
        Self {
            home: home.into(),
            host,
        }
    }

    /// Locate the jarsigner executable for this runtime.
    ///
    /// Candidates are tried in fixed order: the runtime home itself, its
    /// `bin/` directory, then the `bin/` directory one level up. The last
    /// one covers JDK layouts where the reported home points at the
    /// bundled JRE. The first existing file is returned as an absolute,
    /// normalized path.
    pub fn locate_jarsigner(&self) -> Option<PathBuf> {
        let executable = format!("jarsigner{}", self.host.exe_suffix());

        let candidates = [
            self.home.join(&executable),
            self.home.join("bin").join(&executable),
            self.home.join("..").join("bin").join(&executable),
        ];

        for candidate in &candidates {
            if candidate.is_file() {
                log::debug!("Found jarsigner at {}", candidate.display());
                return absolute(candidate);
            }
        }

        log::debug!("jarsigner not found under {}", self.home.display());
        None
    }
}

/// Locate jarsigner for the runtime named by `JAVA_HOME`
pub fn locate_jarsigner() -> Option<PathBuf> {
    JavaRuntime::from_env()?.locate_jarsigner()
}

/// Normalize a candidate into an absolute path without touching symlinks
fn absolute(path: &Path) -> Option<PathBuf> {
    path.absolutize().ok().map(|p| p.into_owned())
}
