use serde::Serialize;
use std::error;
use std::io::{self, Write};
use storage::{EmbeddingTable, Vocabulary};

/// What the loader found, plus the vector for one lookup word.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Number of distinct words.
    pub words: usize,
    /// Number of table entries. Always equal to `words`.
    pub entries: usize,
    pub word: String,
    pub vector: Option<Vec<f64>>,
    pub dimension: Option<usize>,
}

impl Summary {
    pub fn new(word: &str, words: &Vocabulary, word_to_vec_map: &EmbeddingTable) -> Self {
        let vector = word_to_vec_map.get(word).cloned();
        Summary {
            words: words.len(),
            entries: word_to_vec_map.len(),
            word: word.to_owned(),
            dimension: vector.as_ref().map(Vec::len),
            vector,
        }
    }

    /// Whether the lookup word has a vector.
    pub fn found(&self) -> bool {
        self.vector.is_some()
    }

    /// Write the summary as plain text, one item per line.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "words: {}", self.words)?;
        writeln!(out, "entries: {}", self.entries)?;
        match (&self.vector, self.dimension) {
            (Some(vector), Some(dimension)) => {
                writeln!(out, "{}: {:?}", self.word, vector)?;
                writeln!(out, "dimension: {}", dimension)
            }
            _ => writeln!(out, "{}: not in vocabulary", self.word),
        }
    }

    /// Write the summary as a single JSON object.
    pub fn write_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}

/// Write the summary, then fail if the lookup word had no vector.
pub fn write_report<W: Write>(
    summary: &Summary,
    json: bool,
    out: &mut W,
) -> Result<(), Box<dyn error::Error>> {
    if json {
        summary.write_json(out)?;
    } else {
        summary.write_text(out)?;
    }
    if !summary.found() {
        return Err(format!("{:?} is not in the vocabulary", summary.word).into());
    }
    Ok(())
}
