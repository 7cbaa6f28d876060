use serde::{Deserialize, Serialize};

/// One chord in the timed progression. Events are kept in the order the
/// model produced them; they are never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordEvent {
    pub time_seconds: f64,
    pub chord_symbol: String,
    pub duration_seconds: f64,
    #[serde(default)]
    pub lyric_line: String,
    pub section: String,
}

/// Contiguous run of events sharing the same section label, in original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSheet {
    pub section: String,
    pub events: Vec<ChordEvent>,
}

/// Groups events by consecutive equal `section` values. No event is dropped
/// or reordered; non-adjacent repeats of a label yield separate groups.
pub fn group_by_section(events: &[ChordEvent]) -> Vec<SectionSheet> {
    let mut sheets: Vec<SectionSheet> = Vec::new();

    for event in events {
        match sheets.last_mut() {
            Some(sheet) if sheet.section == event.section => {
                sheet.events.push(event.clone());
            }
            _ => sheets.push(SectionSheet {
                section: event.section.clone(),
                events: vec![event.clone()],
            }),
        }
    }

    sheets
}
