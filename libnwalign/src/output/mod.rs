pub mod output_json;
pub use output_json::write_json_output;

pub mod output_search;
pub use output_search::{write_search_json, write_search_output};

pub mod output_standard;
pub use output_standard::{write_standard_header, write_standard_output};

/// The name to print for a sequence, or `fallback` when it has none.
pub(crate) fn display_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.is_empty() {
        fallback
    } else {
        name
    }
}
