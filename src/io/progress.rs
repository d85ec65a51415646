//! Phase progress tracking for library loading, assembly and rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates one progress bar per processing phase
///
/// Each phase gets its own bar, stacked under the previous ones, so the
/// finished phases stay visible with their elapsed time.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    current: Option<ProgressBar>,
    completed_phases: Vec<(String, Duration)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            current: None,
            completed_phases: Vec::new(),
        }
    }

    /// Begin a phase with a known number of steps, closing any open phase
    pub fn start_phase(&mut self, label: &str, total: usize) {
        self.finish_phase();

        let bar = ProgressBar::new(total as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.current = Some(self.multi_progress.add(bar));
    }

    /// Move the open phase to an absolute position
    pub fn update(&self, position: usize, total: usize) {
        if let Some(ref bar) = self.current {
            bar.set_length(total as u64);
            bar.set_position(position as u64);
        }
    }

    /// Complete the open phase and remember its duration
    pub fn finish_phase(&mut self) {
        if let Some(bar) = self.current.take() {
            let elapsed = bar.elapsed();
            bar.finish_with_message(format!("done in {:.1}s", elapsed.as_secs_f64()));
            self.completed_phases.push((bar.prefix(), elapsed));
        }
    }

    /// Phases completed so far with their durations
    pub fn completed_phases(&self) -> &[(String, Duration)] {
        &self.completed_phases
    }

    /// Close the open phase and clean up all progress displays
    pub fn finish(&mut self) {
        self.finish_phase();
        let _ = self.multi_progress.clear();
    }
}
