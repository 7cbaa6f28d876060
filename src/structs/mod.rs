pub mod ai;
pub mod chord_analysis;
pub mod chord_event;
pub mod cli;
pub mod config;
pub mod full_result;
pub mod song_candidate;
pub mod tutorial;
pub mod tutorial_step;
