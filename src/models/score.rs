//! Score document model
//!
//! Read-only input for export. A score is an ordered list of timeline
//! containers (measures and frames) spanning a fixed set of staves.
//!
//! ```text
//! Score
//! ├── staves: Vec<Staff>           (N parallel staves, indexed 0..N-1)
//! └── measures: Vec<MeasureBase>
//!     ├── Measure
//!     │   └── segments: Vec<Segment>     (time order)
//!     │       └── elements: [Option<Element>; VOICES]
//!     └── HorizontalFrame / VerticalFrame / TextFrame
//! ```

use serde::{Deserialize, Serialize};

use super::serde_helpers::deserialize_voice_slots;

/// Maximum number of simultaneous voices (lanes) per staff
pub const VOICES: usize = 4;

/// Root of the score document model
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Score {
    /// Work title (written to the MEI header when non-empty)
    #[serde(default)]
    pub title: Option<String>,

    /// Staves of the score; the count is constant for the whole score
    #[serde(default)]
    pub staves: Vec<Staff>,

    /// Timeline containers in score order
    #[serde(default)]
    pub measures: Vec<MeasureBase>,
}

impl Score {
    /// Create an empty score with `nstaves` unnamed staves
    pub fn new(nstaves: usize) -> Self {
        Self {
            title: None,
            staves: vec![Staff::default(); nstaves],
            measures: Vec::new(),
        }
    }

    /// Number of staves
    pub fn nstaves(&self) -> usize {
        self.staves.len()
    }

    /// Staff at `idx`, if present
    pub fn staff(&self, idx: usize) -> Option<&Staff> {
        self.staves.get(idx)
    }

    /// Append a measure to the timeline
    pub fn push_measure(&mut self, measure: Measure) {
        self.measures.push(MeasureBase::Measure(measure));
    }

    /// Iterate over the real measures only, skipping frames
    pub fn iter_measures(&self) -> impl Iterator<Item = &Measure> {
        self.measures.iter().filter_map(MeasureBase::as_measure)
    }
}

/// One staff of the score
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Staff {
    #[serde(default)]
    pub name: Option<String>,
}

/// A timeline container
///
/// Frames hold layout content (text, spacing) and carry no musical time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MeasureBase {
    Measure(Measure),
    HorizontalFrame,
    VerticalFrame,
    TextFrame {
        #[serde(default)]
        text: String,
    },
}

/// Discriminant of [`MeasureBase`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureBaseKind {
    Measure,
    HorizontalFrame,
    VerticalFrame,
    TextFrame,
}

impl MeasureBase {
    pub fn kind(&self) -> MeasureBaseKind {
        match self {
            MeasureBase::Measure(_) => MeasureBaseKind::Measure,
            MeasureBase::HorizontalFrame => MeasureBaseKind::HorizontalFrame,
            MeasureBase::VerticalFrame => MeasureBaseKind::VerticalFrame,
            MeasureBase::TextFrame { .. } => MeasureBaseKind::TextFrame,
        }
    }

    pub fn as_measure(&self) -> Option<&Measure> {
        match self {
            MeasureBase::Measure(m) => Some(m),
            _ => None,
        }
    }
}

/// A measure: ordered time slots
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Measure {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Measure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment; segments are kept in insertion (time) order
    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

/// A time slot within a measure holding at most one element per voice
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Segment {
    /// Position within the score, in ticks
    #[serde(default)]
    pub tick: u32,

    /// One slot per voice lane
    #[serde(default, deserialize_with = "deserialize_voice_slots")]
    pub elements: [Option<Element>; VOICES],
}

impl Segment {
    pub fn new(tick: u32) -> Self {
        Self {
            tick,
            elements: Default::default(),
        }
    }

    /// Builder-style: place `element` in `voice`
    ///
    /// Voices outside `0..VOICES` are ignored.
    pub fn with_element(mut self, voice: usize, element: Element) -> Self {
        if let Some(slot) = self.elements.get_mut(voice) {
            *slot = Some(element);
        }
        self
    }

    /// Element occupying `voice`, if any
    pub fn element(&self, voice: usize) -> Option<&Element> {
        self.elements.get(voice).and_then(Option::as_ref)
    }
}

/// A symbolic musical object in one voice of one segment
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
}

impl Element {
    pub fn chord(notes: Vec<Note>) -> Self {
        Self { kind: ElementKind::Chord { notes } }
    }

    pub fn rest() -> Self {
        Self { kind: ElementKind::Rest }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self { kind: ElementKind::Other { name: name.into() } }
    }
}

impl From<ElementKind> for Element {
    fn from(kind: ElementKind) -> Self {
        Self { kind }
    }
}

/// Kinds of symbolic elements
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// Zero or more simultaneous notes
    Chord {
        #[serde(default)]
        notes: Vec<Note>,
    },
    Rest,
    Clef,
    KeySignature,
    TimeSignature,
    BarLine,
    Breath,
    /// Any kind the exporter has no mapping for
    Other { name: String },
}

/// A single note of a chord
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    /// Tonal pitch class (line of fifths, C = 14)
    pub tpc: i32,
    /// MIDI pitch
    pub pitch: i32,
}

impl Note {
    pub fn new(tpc: i32, pitch: i32) -> Self {
        Self { tpc, pitch }
    }
}
