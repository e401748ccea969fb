#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use bbconvert::{TagConverter, XmlEventSource};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must convert or fail with an error, never panic
    let _ = TagConverter::default().convert_reader(Cursor::new(data));

    // The source must stop after its first error
    let mut source = XmlEventSource::new(Cursor::new(data));
    let mut failed = false;
    for _ in 0..10_000 {
        match source.next_event() {
            Ok(Some(_)) => assert!(!failed),
            Ok(None) => break,
            Err(_) => failed = true,
        }
    }
});
