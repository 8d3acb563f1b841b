//! MEI export driver
//!
//! Builds the skeleton, walks the score into it, serializes once, and
//! hands the bytes to a sink. Only the sink can fail.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::models::Score;
use super::config::ExportConfig;
use super::document::MeiDocument;
use super::errors::{MeiError, Result};
use super::header::build_skeleton;
use super::serialize::to_xml_string;
use super::walker::ScoreWalker;

/// One export of one score
///
/// Each call to [`MeiExporter::build`] uses a fresh identifier counter, so
/// exporters are independent of one another.
pub struct MeiExporter<'a> {
    score: &'a Score,
    config: ExportConfig,
}

impl<'a> MeiExporter<'a> {
    pub fn new(score: &'a Score) -> Self {
        Self::with_config(score, ExportConfig::default())
    }

    pub fn with_config(score: &'a Score, config: ExportConfig) -> Self {
        Self { score, config }
    }

    pub fn score(&self) -> &Score {
        self.score
    }

    /// Build the complete output tree
    pub fn build(&self) -> MeiDocument {
        let (mut builder, score_node) = build_skeleton(&self.config, self.score.title.as_deref());
        ScoreWalker::new(self.score, &mut builder).populate(score_node);

        crate::mei_log!(
            "built MEI tree: {} measures, {} staves, {} nodes",
            self.score.iter_measures().count(),
            self.score.nstaves(),
            builder.ids_issued()
        );
        builder.finish()
    }

    /// Build and serialize
    pub fn to_mei_string(&self) -> String {
        to_xml_string(&self.build())
    }

    /// Build, serialize, and write everything to `sink`
    pub fn write<W: Write>(&self, sink: &mut W) -> Result<()> {
        let xml = self.to_mei_string();
        sink.write_all(xml.as_bytes())?;
        sink.flush()?;
        crate::mei_log!("wrote {} bytes", xml.len());
        Ok(())
    }
}

/// Export `score` to an MEI string with default settings
pub fn to_mei(score: &Score) -> String {
    MeiExporter::new(score).to_mei_string()
}

/// Export `score` to the file at `path`
pub fn try_save_mei(score: &Score, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|source| MeiError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    MeiExporter::new(score).write(&mut file)
}

/// Export `score` to the file at `path`, reporting success only
pub fn save_mei(score: &Score, path: impl AsRef<Path>) -> bool {
    match try_save_mei(score, path) {
        Ok(()) => true,
        Err(e) => {
            log::error!("[MEI] export failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Element, Measure, Note, Segment};
    use std::io;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts nothing: `write_all` reports a short write
    struct ZeroSink;

    impl Write for ZeroSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn one_chord_score() -> Score {
        let mut measure = Measure::new();
        measure.push_segment(Segment::new(0).with_element(0, Element::chord(vec![Note::new(14, 60)])));
        let mut score = Score::new(1);
        score.push_measure(measure);
        score
    }

    #[test]
    fn test_write_to_buffer() {
        let score = one_chord_score();
        let mut out = Vec::new();
        MeiExporter::new(&score).write(&mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<mei "));
        assert!(xml.contains("<chord xml:id="));
    }

    #[test]
    fn test_write_error_is_reported() {
        let score = one_chord_score();
        let err = MeiExporter::new(&score).write(&mut FailingSink).unwrap_err();
        assert!(matches!(err, MeiError::Write(_)));
    }

    #[test]
    fn test_short_write_is_an_error() {
        let score = one_chord_score();
        let err = MeiExporter::new(&score).write(&mut ZeroSink).unwrap_err();
        match err {
            MeiError::Write(e) => assert_eq!(e.kind(), io::ErrorKind::WriteZero),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_each_build_restarts_ids() {
        let score = one_chord_score();
        let exporter = MeiExporter::new(&score);
        let first = exporter.build();
        let second = exporter.build();
        assert_eq!(first.len(), second.len());
        assert_eq!(first.node(first.root().unwrap()).id, "m-1");
        assert_eq!(second.node(second.root().unwrap()).id, "m-1");
    }
}
