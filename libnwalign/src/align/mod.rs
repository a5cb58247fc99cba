pub mod structs;

mod needleman_wunsch;
pub use needleman_wunsch::needleman_wunsch;

mod scoring;
pub use scoring::{PenaltyConfig, TieBreak};

mod traceback;
pub use traceback::{traceback, traceback_path, TracebackError};

mod global;
pub use global::align;
