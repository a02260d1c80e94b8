use std::path::Path;

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Interactive stderr feedback for batch runs
pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// A reporter only when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            let mut frames = SPINNER_FRAMES.to_vec();
            frames.push("✓");
            pb.set_style(spinner_style.tick_strings(&frames));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering scenarios...", style("🔍").cyan());
        let spinner = self.create_spinner("Scanning paths...");
        self.current_bar = Some(spinner);
    }

    pub fn scanning_path(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Scanning: {}...", path.display()));
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No scenarios found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} scenario{}",
                style("✓").green(),
                style(count).yellow().bold(),
                if count == 1 { "" } else { "s" }
            );
        }
    }

    pub fn start_detection(&mut self, total_scenarios: usize) {
        eprintln!("\n{} Detecting deadlocks...", style("🔄").yellow());
        let pb = self.create_progress_bar(total_scenarios as u64, "Running detector");
        self.current_bar = Some(pb);
    }

    pub fn update_detection(&self, source: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Checked: {source}"));
            pb.inc(1);
        }
    }

    pub fn finish_detection(&mut self, deadlocks_found: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if deadlocks_found == 0 {
            eprintln!(
                "{} No deadlocks detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} deadlocked scenario{}",
                style("⚠").yellow().bold(),
                style(deadlocks_found).red().bold(),
                if deadlocks_found == 1 { "" } else { "s" }
            );
        }
    }
}
