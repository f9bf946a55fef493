//! Integration tests for stagelight

mod cli_test;
mod helpers;
mod page_test;
mod playback_test;
