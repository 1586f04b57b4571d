//! Embedded word lists
//!
//! Reference corpus compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/guesses.rs"));
