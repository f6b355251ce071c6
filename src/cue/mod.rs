pub mod error;
pub mod grammar;
pub mod keywords;
pub mod models;
pub mod parser;
pub mod unparser;

pub use parser::CueParser;
pub use unparser::{unparse_cue_sheet, unparse_cue_sheet_to_string};
