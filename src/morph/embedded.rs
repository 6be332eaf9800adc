//! Embedded lexicon
//!
//! Lexicon lines compiled into the binary at build time.

// Include generated lexicon from build script
include!(concat!(env!("OUT_DIR"), "/lexicon.rs"));
