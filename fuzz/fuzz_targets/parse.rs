#![no_main]

use cinder::{dump_program, lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The lexer only takes text; invalid UTF-8 is out of scope.
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = lexer::lex(s);
        if let Ok(program) = parser::parse(&tokens) {
            let _ = dump_program(&program);
        }
    }
});
