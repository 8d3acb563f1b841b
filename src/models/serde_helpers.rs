//! Serde deserialization helpers for lenient score input

use serde::{Deserialize, Deserializer};

use super::score::VOICES;

/// Deserialize per-voice slots from an array of 0..=VOICES entries
///
/// Missing trailing voices are `None`. Entries past `VOICES` are dropped
/// with a warning.
pub fn deserialize_voice_slots<'de, D, T>(deserializer: D) -> Result<[Option<T>; VOICES], D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    if entries.len() > VOICES {
        log::warn!(
            "[MEI] segment lists {} voices, keeping the first {}",
            entries.len(),
            VOICES
        );
    }

    let mut slots: [Option<T>; VOICES] = Default::default();
    for (slot, entry) in slots.iter_mut().zip(entries) {
        *slot = entry;
    }
    Ok(slots)
}
