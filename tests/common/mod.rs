#![allow(dead_code)]

use std::path::Path;

use artisan_cron::clock::{DEFAULT_TIMESTAMP_FORMAT, FixedClock};
use artisan_cron::invoker::InvokerSettings;
use artisan_cron::types::{OutputMode, ReportLevel};
use chrono::{Local, TimeZone};

pub use artisan_cron_test_utils::init_tracing;

/// Settings matching the no-argument cron invocation, in `dir`.
pub fn default_settings(dir: &Path) -> InvokerSettings {
    InvokerSettings {
        working_dir: dir.to_path_buf(),
        command: "php artisan schedule:run".to_string(),
        output_mode: OutputMode::Discard,
        report_level: ReportLevel::Summary,
        always_exit_zero: true,
        timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
    }
}

/// Clock pinned at 2024-01-15 10:05:00 local time.
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(Local.with_ymd_and_hms(2024, 1, 15, 10, 5, 0).unwrap())
}

pub fn stdout_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| l.to_string())
        .collect()
}
