//! Integration tests, built as a single test binary.

mod helpers;

mod cli_test;
mod layout_test;
mod show_test;
