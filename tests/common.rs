//! Shared test utilities: canned producers, failure shapes, and sample
//! habits used across the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use habit_loader::habits::{Habit, HabitStatus};
use habit_loader::{producer, Producer, RawFailure};
use tokio::sync::Notify;

/// Producer that resolves to a fixed item list.
pub fn resolving_producer<T>(items: Vec<T>) -> Producer<T>
where
    T: Clone + Send + Sync + 'static,
{
    producer(move || {
        let items = items.clone();
        async move { Ok(items) }
    })
}

/// Producer that rejects with a fixed failure.
pub fn failing_producer<T>(failure: RawFailure) -> Producer<T>
where
    T: Send + 'static,
{
    producer(move || {
        let failure = failure.clone();
        async move { Err(failure) }
    })
}

/// Producer that fails on the first invocation and resolves afterwards,
/// counting invocations. Used for retry scenarios.
pub fn flaky_producer<T>(
    failure: RawFailure,
    items: Vec<T>,
) -> (Producer<T>, Arc<AtomicUsize>)
where
    T: Clone + Send + Sync + 'static,
{
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let p = producer(move || {
        let attempt = counter.fetch_add(1, Ordering::SeqCst);
        let failure = failure.clone();
        let items = items.clone();
        async move {
            if attempt == 0 {
                Err(failure)
            } else {
                Ok(items)
            }
        }
    });
    (p, calls)
}

/// Producer that resolves only after `gate` is notified, for deterministic
/// interleaving of overlapping loads.
pub fn gated_producer<T>(items: Vec<T>, gate: Arc<Notify>) -> Producer<T>
where
    T: Clone + Send + Sync + 'static,
{
    producer(move || {
        let items = items.clone();
        let gate = Arc::clone(&gate);
        async move {
            gate.notified().await;
            Ok(items)
        }
    })
}

/// Three sample habits matching the shapes the backend serves.
pub fn sample_habits() -> Vec<Habit> {
    vec![
        Habit {
            id: 1,
            name: "Morning Meditation".to_string(),
            description: "10 minutes of mindfulness".to_string(),
            streak: 7,
            status: HabitStatus::Active,
            category: None,
            completed_today: true,
            frequency: None,
        },
        Habit {
            id: 2,
            name: "Read Daily".to_string(),
            description: "30 pages per day".to_string(),
            streak: 12,
            status: HabitStatus::Active,
            category: Some("Learning".to_string()),
            completed_today: false,
            frequency: None,
        },
        Habit {
            id: 3,
            name: "Exercise".to_string(),
            description: "30 minutes of cardio".to_string(),
            streak: 0,
            status: HabitStatus::Inactive,
            category: Some("Health".to_string()),
            completed_today: false,
            frequency: None,
        },
    ]
}
