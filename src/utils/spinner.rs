use crate::utils::logger::{LogLevel, Logger};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::time::Duration;

pub struct Spinner {
    bar: ProgressBar,
    active: Cell<bool>,
    logger: Logger,
}

impl Spinner {
    pub fn new(message: impl Into<String>, logger: &Logger) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        bar.set_style(style);
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));

        Spinner {
            bar,
            active: Cell::new(true),
            logger: logger.clone(),
        }
    }

    /// Spinner with a known amount of work, rendered as a counter.
    pub fn counter(message: impl Into<String>, total: u64, logger: &Logger) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::with_template("{spinner} {msg} [{pos}/{len}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));

        Spinner {
            bar,
            active: Cell::new(true),
            logger: logger.clone(),
        }
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn succeed(&self, message: impl Into<String>) {
        if self.active.get() {
            self.bar.finish_and_clear();
            self.logger.log_message(LogLevel::Success, &message.into());
            self.active.set(false);
        }
    }

    pub fn fail(&self, message: impl Into<String>) {
        if self.active.get() {
            self.bar.finish_and_clear();
            self.logger.log_message(LogLevel::Error, &message.into());
            self.active.set(false);
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.active.get() {
            self.bar.abandon();
            self.active.set(false);
        }
    }
}

pub fn run_step<T, F, S>(
    start_message: &str,
    logger: &Logger,
    on_success: S,
    action: F,
) -> Result<T, String>
where
    F: FnOnce() -> Result<T, String>,
    S: FnOnce(&T) -> String,
{
    let spinner = Spinner::new(start_message, logger);
    match action() {
        Ok(value) => {
            let message = on_success(&value);
            spinner.succeed(message);
            Ok(value)
        }
        Err(err) => {
            spinner.fail(err.clone());
            Err(err)
        }
    }
}
