//! Shared-access tests: the scheduler behind `&self` from several threads.

use std::thread;

use runtime_slots::{NodeView, Scheduler};

fn assert_consistent(nodes: &[NodeView]) {
    for node in nodes {
        assert_eq!(node.color.is_some(), node.color_index.is_some());
        assert_eq!(
            node.color.is_some(),
            node.scheduled_start.is_some(),
            "node {} observed mid-pass",
            node.id
        );
    }
}

#[test]
fn test_scheduler_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Scheduler>();
}

#[test]
fn test_readers_never_observe_partial_pass() {
    let scheduler = Scheduler::with_defaults();
    for i in 0..30 {
        scheduler.add_node(f64::from(i % 6) * 40.0, f64::from(i / 6) * 40.0);
    }

    thread::scope(|s| {
        s.spawn(|| {
            for round in 0..50u32 {
                let minutes = (round % 7 * 5).to_string();
                scheduler.color_and_schedule("09:00", &minutes).unwrap();
            }
        });
        for _ in 0..3 {
            s.spawn(|| {
                for _ in 0..50 {
                    assert_consistent(&scheduler.snapshot().nodes);
                }
            });
        }
    });

    let snapshot = scheduler.snapshot();
    assert_eq!(snapshot.nodes.len(), 30);
    assert_consistent(&snapshot.nodes);
}

#[test]
fn test_concurrent_inserts_get_unique_ids() {
    let scheduler = Scheduler::with_defaults();

    thread::scope(|s| {
        for t in 0..4 {
            let scheduler = &scheduler;
            s.spawn(move || {
                for i in 0..25 {
                    scheduler.add_node(f64::from(t) * 1000.0, f64::from(i) * 1000.0);
                }
            });
        }
    });

    let mut ids: Vec<u64> = scheduler.snapshot().nodes.iter().map(|n| n.id.0).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    assert_eq!(scheduler.edge_count(), 0);
}
