// tests/invoker_properties.rs

mod common;
use crate::common::{default_settings, fixed_clock, stdout_lines};

use std::path::Path;

use artisan_cron::invoker::{Invocation, Invoker};
use artisan_cron::types::OutputMode;
use artisan_cron_test_utils::{FakeBackend, RecordingSink};
use proptest::prelude::*;

fn invoke_once(code: i32, output: &[String], always_exit_zero: bool) -> (Invocation, Vec<String>, Vec<String>) {
    let refs: Vec<&str> = output.iter().map(|s| s.as_str()).collect();
    let backend = FakeBackend::new().then_exit(code, &refs);
    let sink = RecordingSink::new();

    let mut settings = default_settings(Path::new("/srv/app"));
    settings.output_mode = OutputMode::Capture;
    settings.always_exit_zero = always_exit_zero;

    let mut invoker = Invoker::new(settings, backend, fixed_clock(), Box::new(sink.clone()));
    let mut out = Vec::<u8>::new();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let invocation = rt.block_on(invoker.invoke(&mut out));

    (invocation, sink.messages(), stdout_lines(&out))
}

// Output lines as a shell would hand them back: no newlines, no trailing
// whitespace.
fn output_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:._ -]{0,30}[a-zA-Z0-9.]"
}

proptest! {
    #[test]
    fn nonzero_exit_logs_failure_and_exits_zero(code in any::<i32>().prop_filter("non-zero", |c| *c != 0)) {
        let (invocation, log, stdout) = invoke_once(code, &[], true);

        prop_assert_eq!(invocation.exit_code, 0);
        prop_assert_eq!(log, vec![format!("Laravel scheduler failed with code: {code}")]);
        prop_assert_eq!(stdout.len(), 2);
        prop_assert_eq!(&stdout[1], &format!("Return code: {code}"));
    }

    #[test]
    fn output_is_joined_in_order(
        code in -1i32..256,
        output in proptest::collection::vec(output_line(), 0..6),
    ) {
        let (_, log, stdout) = invoke_once(code, &output, true);

        prop_assert_eq!(log.len(), 1);
        if output.is_empty() {
            prop_assert_eq!(stdout.len(), 2);
        } else {
            let mut expected = vec![format!("Output: {}", output[0])];
            expected.extend(output[1..].iter().cloned());
            prop_assert_eq!(&stdout[2..], &expected[..]);
        }
    }

    #[test]
    fn propagated_exit_code_stays_in_range(code in any::<i32>()) {
        let (invocation, _, _) = invoke_once(code, &[], false);

        prop_assert!((0..=255).contains(&invocation.exit_code));
        prop_assert_eq!(invocation.exit_code == 0, code == 0);
    }
}
