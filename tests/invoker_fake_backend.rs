// tests/invoker_fake_backend.rs

mod common;
use crate::common::{default_settings, fixed_clock, init_tracing, stdout_lines};

use std::path::Path;

use artisan_cron::invoker::Invoker;
use artisan_cron::sink::Status;
use artisan_cron::types::{OutputMode, ReportLevel};
use artisan_cron_test_utils::{FakeBackend, RecordingSink};

const DIR: &str = "/srv/laravel";

#[tokio::test]
async fn success_without_output() {
    init_tracing();

    let backend = FakeBackend::exiting(0);
    let sink = RecordingSink::new();
    let mut invoker = Invoker::new(
        default_settings(Path::new(DIR)),
        backend.clone(),
        fixed_clock(),
        Box::new(sink.clone()),
    );

    let mut out = Vec::<u8>::new();
    let invocation = invoker.invoke(&mut out).await;

    assert_eq!(invocation.result.exit_code, 0);
    assert_eq!(invocation.exit_code, 0);
    assert_eq!(
        sink.lines(),
        vec![(
            Status::Success,
            "Laravel scheduler executed successfully at 2024-01-15 10:05:00".to_string()
        )]
    );
    assert_eq!(
        stdout_lines(&out),
        vec![
            "Laravel scheduler executed at 2024-01-15 10:05:00",
            "Return code: 0",
        ]
    );

    let runs = backend.runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].working_dir, Path::new(DIR));
    assert_eq!(runs[0].command, "php artisan schedule:run");
    assert_eq!(runs[0].mode, OutputMode::Discard);
}

#[tokio::test]
async fn failure_is_logged_but_process_exits_zero() {
    init_tracing();

    let sink = RecordingSink::new();
    let mut invoker = Invoker::new(
        default_settings(Path::new(DIR)),
        FakeBackend::exiting(1),
        fixed_clock(),
        Box::new(sink.clone()),
    );

    let mut out = Vec::<u8>::new();
    let invocation = invoker.invoke(&mut out).await;

    assert_eq!(invocation.result.exit_code, 1);
    assert_eq!(invocation.exit_code, 0);
    assert_eq!(
        sink.lines(),
        vec![(Status::Failure, "Laravel scheduler failed with code: 1".to_string())]
    );

    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Return code: 1");
}

#[tokio::test]
async fn captured_output_is_printed_after_return_code() {
    init_tracing();

    let backend = FakeBackend::new().then_exit(
        0,
        &["Running scheduled command: inspire", "No scheduled commands are ready to run."],
    );
    let mut settings = default_settings(Path::new(DIR));
    settings.output_mode = OutputMode::Capture;

    let mut invoker = Invoker::new(settings, backend, fixed_clock(), Box::new(RecordingSink::new()));

    let mut out = Vec::<u8>::new();
    invoker.invoke(&mut out).await;

    assert_eq!(
        stdout_lines(&out),
        vec![
            "Laravel scheduler executed at 2024-01-15 10:05:00",
            "Return code: 0",
            "Output: Running scheduled command: inspire",
            "No scheduled commands are ready to run.",
        ]
    );
}

#[tokio::test]
async fn propagating_exit_code_when_opted_out() {
    init_tracing();

    let mut settings = default_settings(Path::new(DIR));
    settings.always_exit_zero = false;

    let mut invoker = Invoker::new(
        settings,
        FakeBackend::exiting(3),
        fixed_clock(),
        Box::new(RecordingSink::new()),
    );

    let invocation = invoker.invoke(&mut Vec::<u8>::new()).await;
    assert_eq!(invocation.exit_code, 3);
}

#[tokio::test]
async fn quiet_report_prints_nothing_but_still_logs() {
    init_tracing();

    let mut settings = default_settings(Path::new(DIR));
    settings.report_level = ReportLevel::Quiet;
    let sink = RecordingSink::new();

    let mut invoker = Invoker::new(
        settings,
        FakeBackend::exiting(2),
        fixed_clock(),
        Box::new(sink.clone()),
    );

    let mut out = Vec::<u8>::new();
    invoker.invoke(&mut out).await;

    assert!(out.is_empty());
    assert_eq!(sink.messages(), vec!["Laravel scheduler failed with code: 2"]);
}

#[tokio::test]
async fn spawn_error_is_reported_as_failed_run() {
    init_tracing();

    let sink = RecordingSink::new();
    let mut invoker = Invoker::new(
        default_settings(Path::new(DIR)),
        FakeBackend::new().then_spawn_error(),
        fixed_clock(),
        Box::new(sink.clone()),
    );

    let mut out = Vec::<u8>::new();
    let invocation = invoker.invoke(&mut out).await;

    assert_eq!(invocation.result.exit_code, -1);
    assert_eq!(invocation.exit_code, 0);
    assert_eq!(sink.messages(), vec!["Laravel scheduler failed with code: -1"]);
    assert_eq!(stdout_lines(&out)[1], "Return code: -1");
}

#[tokio::test]
async fn each_invoke_writes_exactly_one_status_line() {
    init_tracing();

    let backend = FakeBackend::new().then_exit(4, &[]).then_exit(0, &[]);
    let sink = RecordingSink::new();
    let clock = fixed_clock();
    let mut invoker = Invoker::new(
        default_settings(Path::new(DIR)),
        backend,
        clock.clone(),
        Box::new(sink.clone()),
    );

    invoker.invoke(&mut Vec::<u8>::new()).await;
    assert_eq!(sink.lines().len(), 1);

    clock.advance(chrono::Duration::minutes(5));
    invoker.invoke(&mut Vec::<u8>::new()).await;

    assert_eq!(
        sink.messages(),
        vec![
            "Laravel scheduler failed with code: 4",
            "Laravel scheduler executed successfully at 2024-01-15 10:10:00",
        ]
    );
}

#[tokio::test]
async fn custom_timestamp_format_applies_to_log_and_summary() {
    init_tracing();

    let mut settings = default_settings(Path::new(DIR));
    settings.timestamp_format = "%d/%m/%Y %H:%M".to_string();
    let sink = RecordingSink::new();

    let mut invoker = Invoker::new(settings, FakeBackend::exiting(0), fixed_clock(), Box::new(sink.clone()));

    let mut out = Vec::<u8>::new();
    invoker.invoke(&mut out).await;

    assert_eq!(
        sink.messages(),
        vec!["Laravel scheduler executed successfully at 15/01/2024 10:05"]
    );
    assert_eq!(stdout_lines(&out)[0], "Laravel scheduler executed at 15/01/2024 10:05");
}
