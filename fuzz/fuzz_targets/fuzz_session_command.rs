//! Fuzz target for interactive session line parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mt_core::session::SessionCommand;

fuzz_target!(|data: &str| {
    // Should never panic, only return an error
    let _ = SessionCommand::parse_line(data);
});
