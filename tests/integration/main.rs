//! Integration tests for playbar.

mod helpers;

mod cli_test;
mod config_test;
mod control_bar_test;
