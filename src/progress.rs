//! Progress UI (download bar) for scrape runs.

use imgrab_core::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

/// Console progress bar bounded by the requested image count.
///
/// Wraps an indicatif bar behind the collector's [`ProgressSink`] trait so
/// the library stays free of terminal concerns. When `enabled` is false all
/// notifications are dropped, which keeps piped/quiet output clean.
pub(crate) struct ConsoleProgress {
    bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    /// Creates the progress UI. When `enabled` is false, no bar is drawn.
    pub(crate) fn new(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::hidden();
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} images")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar: Some(bar) }
    }
}

impl ProgressSink for ConsoleProgress {
    fn begin(&self, total: u64) {
        if let Some(bar) = &self.bar {
            bar.set_length(total);
            bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        }
    }

    fn advance(&self, completed: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(completed);
        }
    }

    fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConsoleProgress;
    use imgrab_core::ProgressSink;

    #[test]
    fn test_disabled_progress_ignores_notifications() {
        let progress = ConsoleProgress::new(false);
        progress.begin(5);
        progress.advance(1);
        progress.finish();
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_enabled_progress_tracks_position() {
        let progress = ConsoleProgress::new(true);
        progress.begin(5);
        progress.advance(2);
        let bar = progress.bar.as_ref().unwrap();
        assert_eq!(bar.position(), 2);
        assert_eq!(bar.length(), Some(5));
        progress.finish();
    }
}
