//! Integration test harness.

mod helpers;

mod cli_test;
mod parser_test;
mod sync_test;
mod vocab_test;
