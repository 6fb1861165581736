use delayed_compute::core::engine;
use delayed_compute::{ComputeEngine, DelayedComputation, Outcome};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn batch_preserves_input_order_and_isolates_failures() {
    let computation = DelayedComputation::new(Duration::from_millis(100));
    let engine = ComputeEngine::new(computation);

    let entries = engine.run(&[4.0, -3.0, 2.5]).await.unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].input, 4.0);
    assert_eq!(entries[1].input, -3.0);
    assert_eq!(entries[2].input, 2.5);

    assert!(matches!(entries[0].outcome, Outcome::Success(v) if v == 16.0));
    assert!(matches!(entries[2].outcome, Outcome::Success(v) if v == 6.25));

    match &entries[1].outcome {
        Outcome::Failure(err) => assert_eq!(err.to_string(), "Negative number not allowed"),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn batch_inputs_run_concurrently() {
    let computation = DelayedComputation::new(Duration::from_millis(1000));
    let engine = ComputeEngine::new(computation);

    let started = tokio::time::Instant::now();
    let entries = engine.run(&[1.0, 2.0, 3.0, 4.0]).await.unwrap();

    assert_eq!(entries.len(), 4);
    // Four concurrent one-second delays elapse together, not in series.
    assert!(started.elapsed() < Duration::from_millis(4000));
    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn summary_reflects_the_batch() {
    let computation = DelayedComputation::new(Duration::from_millis(100));
    let engine = ComputeEngine::new(computation);

    let entries = engine.run(&[4.0, 0.0, -3.0]).await.unwrap();
    let summary = engine::execution_summary(&entries);

    assert_eq!(
        summary.get("total_inputs").unwrap(),
        &serde_json::Value::Number(3.into())
    );
    assert_eq!(
        summary.get("succeeded").unwrap(),
        &serde_json::Value::Number(2.into())
    );
    assert_eq!(
        summary.get("failed").unwrap(),
        &serde_json::Value::Number(1.into())
    );
}
