//! Run configuration read from an optional TOML file.
//!
//! Every field has a default, so an absent file or a partial one is fine:
//!
//! ```toml
//! output = "output/lms.png"
//!
//! [train]
//! class0 = "data/Train1.txt"
//! class1 = "data/Train2.txt"
//!
//! [lms]
//! learning_rate = 0.001
//! iterations = 10000
//! seed = 42
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{LmsError, Result},
    lms::LmsConfig,
};

/// Files holding the samples of each class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassFiles {
    pub class0: PathBuf,
    pub class1: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub train: ClassFiles,
    pub test: ClassFiles,
    /// Where the decision surface image is written.
    pub output: PathBuf,
    pub lms: LmsConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            train: ClassFiles {
                class0: PathBuf::from("data/Train1.txt"),
                class1: PathBuf::from("data/Train2.txt"),
            },
            test: ClassFiles {
                class0: PathBuf::from("data/Test1.txt"),
                class1: PathBuf::from("data/Test2.txt"),
            },
            output: PathBuf::from("output/lms.png"),
            lms: LmsConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(contents)?;
        config.lms.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LmsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Like `load_from_file`, but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load_from_file(path.as_ref()) {
            Err(LmsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.as_ref().display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }
}
