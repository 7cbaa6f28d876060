mod support;

mod fallback_tests;
mod orchestrator_tests;
