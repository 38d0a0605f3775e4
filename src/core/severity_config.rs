//! Severity registry
//!
//! Static per-severity overrides layered over the global defaults. The match
//! in [`Severity::config`] is exhaustive, so adding a severity without
//! deciding its route does not compile.

use super::severity::{ConsoleColor, Severity};

/// Per-severity overrides. Absent fields fall back to the global defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityConfig {
    /// File name relative to the logs folder, with a `{date}` placeholder
    pub file_name_template: Option<&'static str>,
    /// Displayed content, with a `{message}` placeholder
    pub message_template: Option<&'static str>,
    pub write_to_main_log: Option<bool>,
    pub write_to_console: Option<bool>,
    pub console_color: Option<ConsoleColor>,
    pub terminate_process: Option<bool>,
}

impl SeverityConfig {
    const NONE: SeverityConfig = SeverityConfig {
        file_name_template: None,
        message_template: None,
        write_to_main_log: None,
        write_to_console: None,
        console_color: None,
        terminate_process: None,
    };
}

impl Severity {
    /// Registry entry for this severity
    pub const fn config(&self) -> SeverityConfig {
        match self {
            Severity::Info => SeverityConfig::NONE,
            Severity::Warning => SeverityConfig {
                file_name_template: Some("{date}_warning"),
                console_color: Some(ConsoleColor::Yellow),
                ..SeverityConfig::NONE
            },
            Severity::Error => SeverityConfig {
                file_name_template: Some("{date}_error"),
                console_color: Some(ConsoleColor::Red),
                ..SeverityConfig::NONE
            },
            Severity::FatalError => SeverityConfig {
                file_name_template: Some("{date}_error"),
                message_template: Some("FATAL ERROR: {message}"),
                console_color: Some(ConsoleColor::BrightRed),
                terminate_process: Some(true),
                ..SeverityConfig::NONE
            },
            Severity::UncaughtException => SeverityConfig {
                file_name_template: Some("{date}_exception"),
                message_template: Some("UNCAUGHT EXCEPTION: {message}"),
                console_color: Some(ConsoleColor::Magenta),
                ..SeverityConfig::NONE
            },
            Severity::Message => SeverityConfig {
                file_name_template: Some("messages/message_{date}"),
                write_to_main_log: Some(false),
                write_to_console: Some(false),
                ..SeverityConfig::NONE
            },
            Severity::Webserver => SeverityConfig {
                file_name_template: Some("webserver/webserver_{date}"),
                write_to_main_log: Some(false),
                write_to_console: Some(false),
                ..SeverityConfig::NONE
            },
            Severity::Sql => SeverityConfig {
                file_name_template: Some("sql/sql_{date}"),
                write_to_main_log: Some(false),
                write_to_console: Some(false),
                ..SeverityConfig::NONE
            },
            Severity::Debug => SeverityConfig {
                file_name_template: Some("{date}_debug"),
                write_to_main_log: Some(false),
                ..SeverityConfig::NONE
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_info_has_no_override() {
        assert_eq!(Severity::Info.config(), SeverityConfig::default());
    }

    #[test]
    fn test_only_fatal_terminates() {
        for severity in Severity::ALL {
            let terminates = severity.config().terminate_process == Some(true);
            assert_eq!(terminates, severity == Severity::FatalError, "{severity}");
        }
    }

    #[test]
    fn test_alert_severities_have_distinct_colors() {
        let colors: HashSet<_> = [
            Severity::Warning,
            Severity::Error,
            Severity::FatalError,
            Severity::UncaughtException,
        ]
        .iter()
        .map(|s| s.config().console_color.expect("color set"))
        .map(|c| format!("{c:?}"))
        .collect();
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn test_domain_routes_are_quiet() {
        for severity in [Severity::Message, Severity::Webserver, Severity::Sql] {
            let config = severity.config();
            assert_eq!(config.write_to_main_log, Some(false));
            assert_eq!(config.write_to_console, Some(false));
            assert!(config.file_name_template.expect("template").contains('/'));
        }
    }

    #[test]
    fn test_debug_stays_on_console() {
        let config = Severity::Debug.config();
        assert_eq!(config.write_to_main_log, Some(false));
        assert_eq!(config.write_to_console, None);
    }

    #[test]
    fn test_every_template_has_date() {
        for severity in Severity::ALL {
            if let Some(template) = severity.config().file_name_template {
                assert!(template.contains("{date}"), "{severity}");
            }
        }
    }
}
