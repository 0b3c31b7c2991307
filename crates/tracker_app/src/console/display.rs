use std::sync::atomic::{AtomicUsize, Ordering};

use tracker_client::ProgressDisplay;
use tracker_core::{AlertSeverity, Phase, ProgressView, Summary};

/// Terminal renderer for one check run: progress lines while polling,
/// alert banners, and the final summary block.
pub struct ConsoleDisplay {
    processed: AtomicUsize,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self {
            processed: AtomicUsize::new(0),
        }
    }
}

impl ProgressDisplay for ConsoleDisplay {
    fn progress(&self, view: &ProgressView) {
        self.processed.store(view.processed_sources, Ordering::Relaxed);
        match view.phase {
            Phase::Polling | Phase::Completed => {
                println!("[{:>3}%] {}", view.percent, view.label());
            }
            _ => {}
        }
    }

    fn alert(&self, severity: AlertSeverity, message: &str) {
        match severity {
            AlertSeverity::Error => eprintln!("error: {message}"),
            AlertSeverity::Info | AlertSeverity::Success => println!("{message}"),
        }
    }

    fn summary(&self, summary: &Summary) {
        let processed = self.processed.load(Ordering::Relaxed);
        if summary.total_projects_added == 0 {
            println!("Update complete: No new projects found in {processed} sources.");
            return;
        }

        let plural = if summary.total_projects_added == 1 { "" } else { "s" };
        println!(
            "Update Complete: {} new project{} added",
            summary.total_projects_added, plural
        );
        if !summary.per_source.is_empty() {
            println!("Projects found in the following sources:");
            for delta in &summary.per_source {
                let plural = if delta.projects_added == 1 { "" } else { "s" };
                println!(
                    "  {}: {} project{}",
                    delta.source_name, delta.projects_added, plural
                );
            }
        }
    }
}
