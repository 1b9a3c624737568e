pub mod formatters;
pub mod utils;

use reportguard_core::FileResult;
pub use formatters::{html::HtmlFormatter, json::JsonFormatter, stdout::StdOutFormatter};

/// Receives the progress of a run, one call per event.
pub trait Reporter {
    fn on_start(&self);
    fn on_discovered(&self, directory: &str, files: &[String]);
    fn on_file_start(&self, current: usize, total: usize, name: &str);
    fn on_file_result(&mut self, result: &FileResult);
    fn on_file_error(&mut self, name: &str, error: &str);
    fn on_complete(&self);
}

pub(crate) fn status_label(passed: bool) -> &'static str {
    if passed { "PASSED" } else { "FAILED" }
}
