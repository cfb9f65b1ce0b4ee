//! Progress reporting for tool generation
//!
//! Everything here writes to stderr so stdout stays a clean JSON document
//! when tools are printed there.

use agent_tools_application::{GenerateProgressNotifier, GenerateToolsOutput, SpecSource};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports generation progress with a spinner while the spec loads
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// A failed load never reaches `on_base_url`, so the spinner is cleared here
/// before the caller prints its error.
impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(pb) = self.spinner.get_mut().ok().and_then(Option::take) {
            pb.finish_and_clear();
        }
    }
}

impl GenerateProgressNotifier for ProgressReporter {
    fn on_loading(&self, source: &SpecSource) {
        let message = format!("Loading OpenAPI spec from {source}");
        eprintln!("{}", message.cyan());

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Fetching...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_base_url(&self, base_url: &str) {
        self.finish_spinner();
        eprintln!("{} {}", "Using base URL:".cyan(), base_url);
    }

    fn on_validating(&self, tool_count: usize) {
        eprintln!(
            "{}",
            format!("Validating and fixing {tool_count} generated tools...").cyan()
        );
    }

    fn on_complete(&self, output: &GenerateToolsOutput) {
        self.finish_spinner();
        eprintln!(
            "{} {} tools from base URL {}",
            "Generated".green().bold(),
            output.tools.len(),
            output.base_url
        );
    }
}

/// Simple progress notifier that only prints stage lines (no spinner)
pub struct SimpleProgress;

impl GenerateProgressNotifier for SimpleProgress {
    fn on_loading(&self, source: &SpecSource) {
        eprintln!("Loading OpenAPI spec from {source}");
    }

    fn on_base_url(&self, base_url: &str) {
        eprintln!("Using base URL: {base_url}");
    }

    fn on_validating(&self, _tool_count: usize) {
        eprintln!("Validating and fixing generated tools...");
    }
}
