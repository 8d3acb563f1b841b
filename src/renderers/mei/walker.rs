//! Score traversal: populates the MEI `score` node
//!
//! Descends score → measures → staves → voices → segments → elements and
//! emits one node per visited unit, in source order:
//!
//! ```text
//! score
//! ├── scoreDef
//! └── section
//!     └── measure*            (one per Measure, frames skipped)
//!         └── staff*          (exactly nstaves)
//!             └── layer*      (exactly VOICES)
//!                 └── element (one per occupied segment slot)
//! ```

use crate::models::{Element, ElementKind, Measure, MeasureBase, Note, Score, Staff, VOICES};
use super::document::{MeiBuilder, NodeId};

/// Tag for element kinds without an MEI mapping
pub const PLACEHOLDER_TAG: &str = "annot";

impl ElementKind {
    /// MEI element name used for this kind
    pub fn mei_name(&self) -> &'static str {
        match self {
            ElementKind::Chord { .. } => "chord",
            ElementKind::Rest => "rest",
            ElementKind::Clef => "clef",
            ElementKind::KeySignature => "keySig",
            ElementKind::TimeSignature => "meterSig",
            ElementKind::BarLine => "barLine",
            ElementKind::Breath => "breath",
            ElementKind::Other { .. } => PLACEHOLDER_TAG,
        }
    }
}

/// Walks one score into one builder
pub struct ScoreWalker<'a> {
    score: &'a Score,
    builder: &'a mut MeiBuilder,
}

impl<'a> ScoreWalker<'a> {
    pub fn new(score: &'a Score, builder: &'a mut MeiBuilder) -> Self {
        Self { score, builder }
    }

    /// Emit `scoreDef` and `section` under `score_node`
    pub fn populate(&mut self, score_node: NodeId) {
        self.create_score_def(score_node);
        self.create_section(score_node);
    }

    fn create_score_def(&mut self, score_node: NodeId) {
        // Score-wide declarations (staff groups, meter, key) go here.
        self.builder.create_child(score_node, "scoreDef");
    }

    fn create_section(&mut self, score_node: NodeId) {
        let score = self.score;
        let section = self.builder.create_child(score_node, "section");

        for (index, mb) in score.measures.iter().enumerate() {
            match mb {
                MeasureBase::Measure(measure) => self.create_measure(measure, section),
                other => {
                    log::debug!("[MEI] skipping timeline item {} ({:?})", index, other.kind());
                }
            }
        }
    }

    fn create_measure(&mut self, measure: &Measure, section: NodeId) {
        let score = self.score;
        let nstaves = score.nstaves();
        let xmeas = self.builder.create_child(section, "measure");

        for staff_idx in 0..nstaves {
            match score.staff(staff_idx) {
                Some(staff) => self.create_measure_staff(staff, measure, xmeas),
                None => log::warn!("[MEI] staff {} of {} missing, skipped", staff_idx, nstaves),
            }
        }
    }

    fn create_measure_staff(&mut self, _staff: &Staff, measure: &Measure, xmeas: NodeId) {
        let xstaff = self.builder.create_child(xmeas, "staff");

        for voice in 0..VOICES {
            let xlayer = self.builder.create_child(xstaff, "layer");

            for segment in &measure.segments {
                if let Some(element) = segment.element(voice) {
                    self.create_element(element, xlayer);
                }
            }
        }
    }

    fn create_element(&mut self, element: &Element, xlayer: NodeId) -> NodeId {
        let xel = self.builder.create_child(xlayer, element.kind.mei_name());

        match &element.kind {
            ElementKind::Chord { notes } => self.create_chord_notes(notes, xel),
            ElementKind::Other { name } => {
                self.builder.set_attribute(xel, "type", name.as_str());
            }
            _ => {}
        }

        xel
    }

    fn create_chord_notes(&mut self, notes: &[Note], xchord: NodeId) {
        for note in notes {
            // Pitch spelling is not encoded yet; only placement.
            log::trace!("[MEI] note tpc={} pitch={}", note.tpc, note.pitch);
            self.builder.create_child(xchord, "note");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Segment, Note};

    fn walk(score: &Score) -> crate::renderers::mei::MeiDocument {
        let mut builder = MeiBuilder::new();
        let root = builder.create_root("score");
        ScoreWalker::new(score, &mut builder).populate(root);
        builder.finish()
    }

    #[test]
    fn test_empty_score() {
        let doc = walk(&Score::new(1));
        let root = doc.root().unwrap();
        let tags: Vec<_> = doc.children(root).map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["scoreDef", "section"]);
        assert!(doc.find_all("section")[0].children.is_empty());
        assert!(doc.find_all("staff").is_empty());
    }

    #[test]
    fn test_frames_are_skipped() {
        let mut score = Score::new(1);
        score.measures.push(MeasureBase::VerticalFrame);
        score.push_measure(Measure::new());
        score.measures.push(MeasureBase::HorizontalFrame);
        score.push_measure(Measure::new());

        let doc = walk(&score);
        assert_eq!(doc.find_all("measure").len(), 2);
        assert_eq!(doc.find_all("section")[0].children.len(), 2);
    }

    #[test]
    fn test_zero_staves() {
        let mut score = Score::new(0);
        score.push_measure(Measure::new());
        let doc = walk(&score);
        assert_eq!(doc.find_all("measure").len(), 1);
        assert!(doc.find_all("measure")[0].children.is_empty());
    }

    #[test]
    fn test_layers_always_present() {
        let mut score = Score::new(3);
        score.push_measure(Measure::new());
        let doc = walk(&score);
        for staff in doc.find_all("staff") {
            assert_eq!(staff.children.len(), VOICES);
        }
        assert_eq!(doc.find_all("layer").len(), 3 * VOICES);
    }

    #[test]
    fn test_element_dispatch() {
        let mut measure = Measure::new();
        measure.push_segment(Segment::new(0).with_element(0, ElementKind::Clef.into()));
        measure.push_segment(
            Segment::new(0).with_element(0, Element::chord(vec![Note::new(14, 60), Note::new(18, 64)])),
        );
        measure.push_segment(Segment::new(480).with_element(0, Element::rest()));
        measure.push_segment(Segment::new(960).with_element(0, Element::other("Glissando")));
        let mut score = Score::new(1);
        score.push_measure(measure);

        let doc = walk(&score);
        let layer = doc.find_all("layer")[0];
        let tags: Vec<_> = layer.children.iter().map(|c| doc.node(*c).tag.as_str()).collect();
        assert_eq!(tags, vec!["clef", "chord", "rest", "annot"]);

        let chord = doc.find_all("chord")[0];
        assert_eq!(chord.children.len(), 2);
        assert_eq!(doc.find_all("annot")[0].attribute("type"), Some("Glissando"));
    }

    #[test]
    fn test_empty_chord_still_emitted() {
        let mut measure = Measure::new();
        measure.push_segment(Segment::new(0).with_element(1, Element::chord(Vec::new())));
        let mut score = Score::new(1);
        score.push_measure(measure);

        let doc = walk(&score);
        let layers = doc.find_all("layer");
        assert!(layers[0].children.is_empty());
        assert_eq!(layers[1].children.len(), 1);
        assert!(doc.find_all("note").is_empty());
    }
}
