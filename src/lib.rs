pub mod convert;
pub mod cue;
pub mod document;
