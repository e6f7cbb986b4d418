
use crate::logger::panic_report;
use crate::panic_message;

use std::panic::Location;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_str_payload_when_described_then_message_returned() {
    let payload = std::panic::catch_unwind(|| panic!("static failure")).unwrap_err();

    assert_that!(panic_message(payload.as_ref()), eq("static failure"));
}

#[test]
fn given_formatted_payload_when_described_then_message_returned() {
    let id = 7;
    let payload = std::panic::catch_unwind(|| panic!("worker {id} gave up")).unwrap_err();

    assert_that!(panic_message(payload.as_ref()), eq("worker 7 gave up"));
}

#[test]
fn given_unknown_payload_when_described_then_placeholder() {
    let payload = std::panic::catch_unwind(|| std::panic::panic_any(42u8)).unwrap_err();

    assert_that!(panic_message(payload.as_ref()), eq("unknown panic"));
}

#[test]
fn given_named_thread_and_location_when_reported_then_single_line_with_both() {
    // Given
    let payload = std::panic::catch_unwind(|| panic!("worker 3 gave up")).unwrap_err();
    let location = Location::caller();

    // When
    let report = panic_report(Some("worker-3"), Some(location), payload.as_ref());

    // Then
    assert_that!(
        report,
        eq(&format!(
            "thread 'worker-3' panicked at {location}: worker 3 gave up"
        ))
    );
}

#[test]
fn given_unnamed_thread_without_location_when_reported_then_placeholders() {
    // Given
    let payload = std::panic::catch_unwind(|| std::panic::panic_any(42u8)).unwrap_err();

    // When
    let report = panic_report(None, None, payload.as_ref());

    // Then
    assert_that!(report, eq("thread '<unnamed>' panicked: unknown panic"));
}
