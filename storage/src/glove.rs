use fnv::{FnvHashMap, FnvHashSet};
use log::{debug, info, trace};
use std::io::BufRead;
use std::path::Path;

use glove_core::utils::{open_text, Timer};

use crate::error::LoadError;

/// Set of distinct tokens with a known embedding.
pub type Vocabulary = FnvHashSet<String>;
/// Map of token to embedding vector.
pub type EmbeddingTable = FnvHashMap<String, Vec<f64>>;

/// Parameters for loading an embeddings file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GloveParams {
    /// Required vector length. Vectors are not checked when `None`.
    pub dimension: Option<usize>,
    /// Capacity of the read buffer.
    pub buf_size: usize,
}

impl GloveParams {
    pub fn with_dimension(self, dimension: usize) -> Self {
        GloveParams {
            dimension: Some(dimension),
            ..self
        }
    }
    pub fn with_buf_size(self, buf_size: usize) -> Self {
        GloveParams { buf_size, ..self }
    }
}

impl Default for GloveParams {
    fn default() -> Self {
        GloveParams {
            dimension: None,
            buf_size: 8 * 1024 * 1024,
        }
    }
}

/// Split one line into its token and vector.
///
/// Fields are separated by runs of whitespace. `field` in a `Parse` error
/// counts the token as field 1, so the first vector component is field 2.
pub fn parse_line(line_no: usize, line: &str) -> Result<(&str, Vec<f64>), LoadError> {
    let mut fields = line.split_whitespace();
    let token = fields
        .next()
        .ok_or(LoadError::MissingFields { line: line_no })?;
    let vector = fields
        .enumerate()
        .map(|(idx, value)| {
            value.parse::<f64>().map_err(|source| LoadError::Parse {
                line: line_no,
                field: idx + 2,
                value: value.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if vector.is_empty() {
        return Err(LoadError::MissingFields { line: line_no });
    }
    Ok((token, vector))
}

/// Read a GloVe-format text stream into a vocabulary and embedding table.
///
/// A token seen more than once keeps the vector from its last line. The first
/// malformed line aborts the read.
pub fn read_glove_vectors<R: BufRead>(
    reader: R,
    params: &GloveParams,
) -> Result<(Vocabulary, EmbeddingTable), LoadError> {
    let mut words = Vocabulary::default();
    let mut word_to_vec_map = EmbeddingTable::default();
    let mut duplicates = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let (token, vector) = parse_line(line_no, &line)?;

        if let Some(expected) = params.dimension {
            if vector.len() != expected {
                return Err(LoadError::Dimension {
                    line: line_no,
                    expected,
                    found: vector.len(),
                });
            }
        }

        if !words.insert(token.to_owned()) {
            duplicates += 1;
            debug!("Line {}: replacing vector for {:?}", line_no, token);
        }
        word_to_vec_map.insert(token.to_owned(), vector);

        if line_no % 100_000 == 0 {
            trace!("Read {} lines", line_no);
        }
    }

    if duplicates > 0 {
        info!("{} duplicate tokens, kept the last vector for each", duplicates);
    }
    Ok((words, word_to_vec_map))
}

/// Load a GloVe-format file with the given parameters.
pub fn load_glove_vectors_with<P: AsRef<Path>>(
    path: P,
    params: &GloveParams,
) -> Result<(Vocabulary, EmbeddingTable), LoadError> {
    let path = path.as_ref();
    let timer = Timer::start(format!("Loading GloVe vectors from {:?}", path));

    let reader = open_text(path, params.buf_size).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let (words, word_to_vec_map) = read_glove_vectors(reader, params)?;

    info!("Loaded {} vectors", word_to_vec_map.len());
    timer.finish();
    Ok((words, word_to_vec_map))
}

/// Load a GloVe-format file with default parameters.
pub fn load_glove_vectors<P: AsRef<Path>>(
    path: P,
) -> Result<(Vocabulary, EmbeddingTable), LoadError> {
    load_glove_vectors_with(path, &GloveParams::default())
}
