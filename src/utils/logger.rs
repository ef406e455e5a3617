#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
    Debug,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn is_diagnostic(self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Warning)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn with_verbose(verbose: bool) -> Self {
        Logger { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        if level == LogLevel::Debug && !self.is_verbose() {
            return;
        }

        let line = format!(
            "{} {} {}",
            self.signature(),
            self.format_status(level),
            message
        );

        // errors and warnings belong on the diagnostic stream
        if level.is_diagnostic() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: Vec<&str>) {
        if level == LogLevel::Debug && !self.is_verbose() {
            return;
        }

        self.log_message(level, message);
        for t in trace {
            if level.is_diagnostic() {
                eprintln!("     ↳ {}", t);
            } else {
                println!("     ↳ {}", t);
            }
        }
    }

    #[cfg(feature = "cli")]
    fn signature(&self) -> String {
        let mut s = String::new();

        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push('[');
        let _ = write!(
            &mut s,
            "{}{}",
            SetForegroundColor(Color::Rgb {
                r: 230,
                g: 126,
                b: 34,
            }),
            SetAttribute(Attribute::Bold)
        );
        s.push_str("Pluginmaster");
        let _ = write!(
            &mut s,
            "{}{}",
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Grey)
        );
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);

        s
    }

    #[cfg(not(feature = "cli"))]
    fn signature(&self) -> String {
        "[Pluginmaster]".to_string()
    }

    #[cfg(feature = "cli")]
    fn format_status(&self, level: LogLevel) -> String {
        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
            LogLevel::Debug => Color::Rgb {
                r: 103,
                g: 58,
                b: 183,
            },
        };

        let mut s = String::new();
        s.push('[');
        let _ = write!(
            &mut s,
            "{}{}",
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold)
        );
        s.push_str(level.label());
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);

        s
    }

    #[cfg(not(feature = "cli"))]
    fn format_status(&self, level: LogLevel) -> String {
        format!("[{}]", level.label())
    }
}
