//! Integration tests for callscan

mod config_test;
mod fixtures;
mod scan_test;
mod scoring_test;
