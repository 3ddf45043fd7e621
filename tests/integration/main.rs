//! Integration tests for drip-edge

mod config_test;
mod scenarios_test;
