use serde::{Deserialize, Serialize};

use crate::structs::chord_analysis::ChordAnalysis;
use crate::structs::tutorial::Tutorial;

/// Terminal artifact of `analyze`: the chord analysis plus the tutorial
/// generated from it. Created fresh per request, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullResult {
    pub analysis: ChordAnalysis,
    pub tutorial: Tutorial,
}
