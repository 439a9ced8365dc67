use std::time::Duration;

use crate::helpers::daily;
use tramo::{Tramo, TramoError};

#[tokio::test]
async fn deadline_fails_the_batch() {
    let tramo = Tramo::builder()
        .max_concurrency(1)
        .request_timeout(Duration::ZERO)
        .build()
        .unwrap();
    let mut batch = tramo.signals();
    for n in 0..64 {
        batch = batch.samples(format!("p{n}"), daily(1, "FTTFTTTFFT"));
    }
    let err = batch.run().await.unwrap_err();
    assert_eq!(err, TramoError::request_timeout("signals"));
}

#[tokio::test]
async fn generous_deadline_completes() {
    let tramo = Tramo::builder()
        .request_timeout(Duration::from_secs(30))
        .build()
        .unwrap();
    let report = tramo
        .signals()
        .samples("p", daily(1, "FTTF"))
        .run()
        .await
        .unwrap();
    assert_eq!(report.entries.len(), 1);
}
