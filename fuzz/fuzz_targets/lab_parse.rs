//! Fuzz target for lab file parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use labgrid::ir::io_lab::{from_lab_str, to_lab_string};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(lab) = from_lab_str(content, "fuzz") {
        let _ = to_lab_string(&lab);
    }
});
