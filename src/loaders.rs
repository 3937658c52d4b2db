use glove_core::settings::Settings;
use log::debug;
use std::path::Path;
use storage::{load_glove_vectors_with, EmbeddingTable, GloveParams, LoadError, Vocabulary};

/// Loader parameters from the `[loader]` section of the settings.
pub fn glove_params(settings: &Settings) -> GloveParams {
    let params = GloveParams::default().with_buf_size(settings.loader.buf_size);
    match settings.loader.dimension {
        Some(dimension) => params.with_dimension(dimension),
        None => params,
    }
}

/// Load the embeddings file named by the settings, relative to `cwd`.
pub fn load_from_settings(
    settings: &Settings,
    cwd: &Path,
) -> Result<(Vocabulary, EmbeddingTable), LoadError> {
    let path = settings.glove_path(cwd);
    debug!("Resolved embeddings path {:?}", path);
    load_glove_vectors_with(&path, &glove_params(settings))
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_glove_params_from_settings() {
        let mut settings = Settings::default();
        assert_eq!(glove_params(&settings).dimension, None);

        settings.loader.dimension = Some(300);
        settings.loader.buf_size = 4096;
        let params = glove_params(&settings);
        assert_eq!(params.dimension, Some(300));
        assert_eq!(params.buf_size, 4096);
    }

    #[test]
    fn test_load_from_settings_reads_data_dir() {
        let tmp_dir = TempDir::new().unwrap();
        let data_dir = tmp_dir.path().join("glove_file");
        std::fs::create_dir(&data_dir).unwrap();
        std::fs::write(
            data_dir.join("glove.6B.300d.txt"),
            "the 0.1 0.2\n, 0.3 0.4\n. 0.5 0.6\n",
        )
        .unwrap();

        let (words, word_to_vec_map) =
            load_from_settings(&Settings::default(), tmp_dir.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(word_to_vec_map[","], vec![0.3, 0.4]);
    }

    #[test]
    fn test_load_from_settings_missing_dir() {
        let tmp_dir = TempDir::new().unwrap();
        match load_from_settings(&Settings::default(), tmp_dir.path()) {
            Err(LoadError::NotFound { .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
