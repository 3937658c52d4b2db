use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use bzip2::read::BzDecoder;
use log::{info, trace};

/// Times one named stage of work, logging when it starts and ends.
pub struct Timer {
    task: String,
    start: Instant,
}

impl Timer {
    /// Log the start of `task` and begin timing it.
    pub fn start<S: Into<String>>(task: S) -> Self {
        let task = task.into();
        info!("{}...", task);
        Timer {
            task,
            start: Instant::now(),
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    /// Log and return the time spent on the task.
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        info!("{} done in {:.2} seconds", self.task, elapsed.as_secs_f64());
        elapsed
    }
}

type BZipReader = BufReader<BzDecoder<BufReader<File>>>;

/// Create a bzip2 BufReader from a File handle.
pub fn to_decode_buffer(file: File, buf_size: usize) -> BZipReader {
    let buf = BufReader::with_capacity(8192 * 4, file);
    let dec = BzDecoder::new(buf);
    BufReader::with_capacity(buf_size, dec)
}

/// Check whether a path names a bzip2 file.
pub fn is_bzip<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext == "bz2")
        .unwrap_or(false)
}

/// Open a text file for buffered line reading, decompressing `.bz2` files on
/// the fly.
///
/// # Arguments
/// * `path` - Path to the file
/// * `buf_size` - Capacity of the outermost buffer; zero selects the default
pub fn open_text<P: AsRef<Path>>(path: P, buf_size: usize) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if !file.metadata()?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        ));
    }
    let buf_size = if buf_size == 0 { 8192 * 16 } else { buf_size };
    if is_bzip(path) {
        trace!("opening {:?} as bzip2", path);
        Ok(Box::new(to_decode_buffer(file, buf_size)))
    } else {
        Ok(Box::new(BufReader::with_capacity(buf_size, file)))
    }
}
