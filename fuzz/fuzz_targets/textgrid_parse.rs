//! Fuzz target for TextGrid parsing.
//!
//! Feeds arbitrary bytes through encoding detection and the positional
//! parser. Anything that parses must also survive a short-form round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use labgrid::ir::io_textgrid::{from_textgrid_slice, from_textgrid_str, to_short_string};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(grid) = from_textgrid_slice(data, "fuzz") else {
        return;
    };

    let text = to_short_string(&grid);
    let restored = from_textgrid_str(&text, "fuzz").expect("short-form round trip");
    assert_eq!(restored, grid);
});

