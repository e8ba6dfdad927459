//! Buffered, append-only line output for generated wordlists.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, WordlistError};

/// Number of buffered lines that triggers a write to the underlying writer.
pub const FLUSH_THRESHOLD: usize = 1000;

/// Destination for generated lines.
pub trait Sink {
    /// Appends one line; the newline is added by the sink.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Pushes every buffered line to the underlying destination.
    fn flush(&mut self) -> io::Result<()>;
}

/// Accumulates lines and writes them in batches of [`FLUSH_THRESHOLD`].
///
/// Each batch reaches the writer as one write, so a run stopped by the
/// output cap or an I/O error leaves the batches written so far and
/// never repeats one.
#[derive(Debug)]
pub struct BufferedSink<W: Write> {
    writer: W,
    buffer: Vec<String>,
    threshold: usize,
    lines_flushed: u64,
}

impl<W: Write> BufferedSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_threshold(writer, FLUSH_THRESHOLD)
    }

    pub fn with_threshold(writer: W, threshold: usize) -> Self {
        let threshold = threshold.max(1);
        Self {
            writer,
            buffer: Vec::with_capacity(threshold),
            threshold,
            lines_flushed: 0,
        }
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Lines already handed to the writer.
    pub fn lines_flushed(&self) -> u64 {
        self.lines_flushed
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        Sink::flush(&mut self)?;
        Ok(self.writer)
    }
}

impl BufferedSink<BufWriter<File>> {
    /// Creates (or truncates) the output file.
    ///
    /// # Errors
    ///
    /// Returns `OutputUnwritable` if the directory is missing or the file
    /// cannot be opened for writing.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::error!("Cannot open output {:?}: {}", path, source);
            WordlistError::OutputUnwritable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Sink for BufferedSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.buffer.push(line.to_string());
        if self.buffer.len() >= self.threshold {
            Sink::flush(self)?;
        }
        Ok(())
    }

    /// Writes the whole batch with a single `write_all`.
    ///
    /// The buffer is emptied before writing, so a failed batch is dropped
    /// rather than replayed by the next flush.
    fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            let lines = self.buffer.len() as u64;
            let size = self.buffer.iter().map(|line| line.len() + 1).sum();
            let mut batch = String::with_capacity(size);
            for line in self.buffer.drain(..) {
                batch.push_str(&line);
                batch.push('\n');
            }
            self.writer.write_all(batch.as_bytes())?;
            self.lines_flushed += lines;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records bytes and write calls; fails the write call numbered `fail_on`.
    #[derive(Default)]
    struct RecordingWriter {
        bytes: Vec<u8>,
        calls: usize,
        fail_on: Option<usize>,
    }

    impl Write for RecordingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            if self.fail_on == Some(self.calls) {
                return Err(io::Error::other("disk full"));
            }
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lines_stay_buffered_below_threshold() {
        let mut sink = BufferedSink::with_threshold(Vec::new(), 3);
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();
        assert_eq!(sink.buffered(), 2);
        assert_eq!(sink.lines_flushed(), 0);
    }

    #[test]
    fn test_threshold_triggers_flush() {
        let mut sink = BufferedSink::with_threshold(Vec::new(), 2);
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();
        sink.write_line("three").unwrap();
        assert_eq!(sink.lines_flushed(), 2);
        assert_eq!(sink.buffered(), 1);

        let bytes = sink.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_default_threshold() {
        let mut sink = BufferedSink::new(Vec::new());
        for i in 0..FLUSH_THRESHOLD {
            sink.write_line(&i.to_string()).unwrap();
        }
        assert_eq!(sink.buffered(), 0);
        assert_eq!(sink.lines_flushed(), FLUSH_THRESHOLD as u64);
    }

    #[test]
    fn test_create_in_missing_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("out.txt");
        let result = BufferedSink::create(&path);
        assert!(matches!(result, Err(WordlistError::OutputUnwritable { .. })));
    }

    #[test]
    fn test_create_writes_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.txt");
        let mut sink = BufferedSink::create(&path).unwrap();
        sink.write_line("hello").unwrap();
        Sink::flush(&mut sink).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_failed_batch_is_not_replayed() {
        let writer = RecordingWriter {
            fail_on: Some(2),
            ..RecordingWriter::default()
        };
        let mut sink = BufferedSink::with_threshold(writer, 2);
        sink.write_line("aaaaaa").unwrap();
        sink.write_line("bbbbbb").unwrap();
        sink.write_line("cccccc").unwrap();
        assert!(sink.write_line("dddddd").is_err());
        assert_eq!(sink.buffered(), 0);

        // Retrying after the failure writes only what came later.
        sink.write_line("eeeeee").unwrap();
        let writer = sink.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(writer.bytes).unwrap(),
            "aaaaaa\nbbbbbb\neeeeee\n"
        );
    }

    #[test]
    fn test_failed_batch_is_not_counted() {
        let writer = RecordingWriter {
            fail_on: Some(1),
            ..RecordingWriter::default()
        };
        let mut sink = BufferedSink::with_threshold(writer, 3);
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();
        assert!(sink.write_line("three").is_err());
        assert_eq!(sink.lines_flushed(), 0);

        Sink::flush(&mut sink).unwrap();
        assert_eq!(sink.lines_flushed(), 0);
        assert!(sink.into_inner().unwrap().bytes.is_empty());
    }

    #[test]
    fn test_one_write_call_per_batch() {
        let mut sink = BufferedSink::new(RecordingWriter::default());
        for i in 0..FLUSH_THRESHOLD {
            sink.write_line(&format!("candidate{i}")).unwrap();
        }
        let writer = sink.into_inner().unwrap();
        assert_eq!(writer.calls, 1);
        assert_eq!(writer.bytes.iter().filter(|&&b| b == b'\n').count(), FLUSH_THRESHOLD);
    }
}
