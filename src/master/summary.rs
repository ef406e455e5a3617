use crate::utils::logger::{LogLevel, Logger};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub written: usize,
    pub failed_lookups: usize,
    pub refreshed: usize,
    pub carried_forward: usize,
    pub total_downloads: u64,
}

pub fn print_generate_summary(summary: &GenerateSummary, output: &Path, logger: &Logger) {
    let details = [
        format!("Entries          : {}", summary.written),
        format!("Total downloads  : {}", summary.total_downloads),
        format!("Timestamps kept  : {}", summary.carried_forward),
        format!("Timestamps fresh : {}", summary.refreshed),
    ];
    let refs: Vec<&str> = details.iter().map(|s| s.as_str()).collect();
    logger.log_message_with_trace(
        LogLevel::Info,
        &format!("📦 Master written to {}", output.display()),
        refs,
    );

    if summary.failed_lookups > 0 {
        logger.log_message(
            LogLevel::Warning,
            &format!(
                "{} download count lookup(s) failed and were recorded as 0",
                summary.failed_lookups
            ),
        );
    }
}
