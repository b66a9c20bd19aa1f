//! Fuzz target for the TextGrid tokenizer and token cursor.

#![no_main]

use libfuzzer_sys::fuzz_target;
use labgrid::ir::lexer::tokenize;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut queue = tokenize(text);
    while !queue.is_empty() {
        let _ = queue.next_float("fuzz");
        let _ = queue.next_count("fuzz");
        let _ = queue.next_quoted("fuzz");
        let _ = queue.next_flag("fuzz");
    }
});
