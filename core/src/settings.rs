use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_data_dir() -> PathBuf {
    "glove_file".into()
}

fn default_data_file() -> PathBuf {
    "glove.6B.300d.txt".into()
}

/// Location of the embeddings file, relative to the working directory.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Data {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_data_file")]
    pub file: PathBuf,
}

impl Default for Data {
    fn default() -> Self {
        Data {
            dir: default_data_dir(),
            file: default_data_file(),
        }
    }
}

fn default_buf_size() -> usize {
    8 * 1024 * 1024
}

/// Parameters for reading the embeddings file.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Loader {
    /// Capacity of the read buffer.
    #[serde(default = "default_buf_size")]
    pub buf_size: usize,
    /// Expected vector length. Unchecked when absent.
    #[serde(default)]
    pub dimension: Option<usize>,
}

impl Default for Loader {
    fn default() -> Self {
        Loader {
            buf_size: default_buf_size(),
            dimension: None,
        }
    }
}

fn default_query_word() -> String {
    "the".to_owned()
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Query {
    #[serde(default = "default_query_word")]
    pub word: String,
}

impl Default for Query {
    fn default() -> Self {
        Query {
            word: default_query_word(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub loader: Loader,
    #[serde(default)]
    pub query: Query,
}

impl Settings {
    /// Read settings from a config file, falling back to defaults for anything
    /// missing. A missing file is not an error.
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        Settings::from_file(path, false)
    }

    /// Read settings from a config file. When `required` is set a missing file
    /// is an error.
    pub fn from_file(path: &str, required: bool) -> Result<Self, ConfigError> {
        let mut settings = Config::new();
        settings.merge(File::with_name(path).required(required))?;
        settings.try_into()
    }

    /// Full path to the embeddings file under the given working directory.
    pub fn glove_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.data.dir).join(&self.data.file)
    }
}
