mod common;

use common::{GRACEFUL_SHUTDOWN, RecordingLogger};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, ge};
use sg_shutdown::{Coordinator, DrainOutcome};
use tokio_util::sync::CancellationToken;

const TIME_UNIT: Duration = Duration::from_millis(100);

#[test]
fn given_three_workers_when_cancelled_mid_flight_then_stand_by_returns_after_all_done() {
    // Given
    let token = CancellationToken::new();
    let logger = Arc::new(RecordingLogger::default());
    let coordinator = Arc::new(
        Coordinator::builder()
            .token(token.clone())
            .logger(Arc::clone(&logger))
            .poll_interval(Duration::from_millis(50))
            .build()
            .unwrap(),
    );
    let completed = Arc::new(AtomicUsize::new(0));

    let workers: Vec<_> = (0..3)
        .map(|_| {
            let coordinator = Arc::clone(&coordinator);
            let completed = Arc::clone(&completed);
            coordinator.add_job();
            thread::spawn(move || {
                thread::sleep(TIME_UNIT * 3);
                completed.fetch_add(1, Ordering::SeqCst);
                coordinator.done_job();
            })
        })
        .collect();

    let canceller = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(TIME_UNIT);
            token.cancel();
        })
    };

    // When
    let outcome = coordinator.stand_by().unwrap();

    // Then
    assert_that!(outcome, eq(DrainOutcome::Completed));
    assert_that!(completed.load(Ordering::SeqCst), eq(3));
    assert_that!(coordinator.active_jobs(), eq(0));
    assert_that!(logger.count_waiting(), ge(1));
    assert!(logger.contains(GRACEFUL_SHUTDOWN));

    canceller.join().unwrap();
    for worker in workers {
        worker.join().unwrap();
    }
}

#[test]
fn given_scoped_jobs_when_cancelled_before_start_then_drain_waits_for_guards() {
    // Given
    let token = CancellationToken::new();
    let logger = Arc::new(RecordingLogger::default());
    let coordinator = Arc::new(
        Coordinator::builder()
            .token(token.clone())
            .logger(Arc::clone(&logger))
            .poll_interval(Duration::from_millis(20))
            .build()
            .unwrap(),
    );
    token.cancel();

    let workers: Vec<_> = (1..=4u32)
        .map(|id| {
            let job = coordinator.job();
            thread::spawn(move || {
                let _job = job;
                thread::sleep(Duration::from_millis(20) * id);
            })
        })
        .collect();

    // When
    let outcome = coordinator.stand_by().unwrap();

    // Then
    assert_that!(outcome, eq(DrainOutcome::Completed));
    assert_that!(coordinator.active_jobs(), eq(0));
    for worker in workers {
        worker.join().unwrap();
    }
}
