pub mod error;
pub mod glove;

pub use error::LoadError;
pub use glove::{
    load_glove_vectors, load_glove_vectors_with, parse_line, read_glove_vectors, EmbeddingTable,
    GloveParams, Vocabulary,
};
