//! compute units chained through channels, selected by unit identity.

use crossbeam_channel::{bounded, Receiver, Sender};
use spatial_compute_units::{
    compute_unit_name, submit_compute_units, ComputeUnit, HostQueue, Index, QueueConfig,
};
use std::sync::Arc;

compute_unit_name!(Links => Link);

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Pipes {
    tx: Vec<Sender<i64>>,
    rx: Vec<Receiver<i64>>,
}

impl Pipes {
    fn new(count: usize) -> Self {
        let (tx, rx) = (0..count).map(|_| bounded(4)).unzip();
        Self { tx, rx }
    }
}

/// unit `ID` forwards pipe `ID` to pipe `ID + 1`, adding `ID`.
#[derive(Clone)]
struct Forward {
    pipes: Arc<Pipes>,
    items: usize,
}

impl ComputeUnit for Forward {
    fn run<const ID: usize>(self, _id: Index<ID>) {
        for _ in 0..self.items {
            let value = self.pipes.rx[ID].recv().unwrap();
            self.pipes.tx[ID + 1].send(value + ID as i64).unwrap();
        }
    }
}

#[test]
fn test_chain_of_units() {
    init_logger();

    const UNITS: usize = 8;
    const ITEMS: usize = 100;

    let pipes = Arc::new(Pipes::new(UNITS + 1));
    let queue = HostQueue::new(QueueConfig::new().with_thread_name_prefix("link")).unwrap();

    let kernel = Forward {
        pipes: Arc::clone(&pipes),
        items: ITEMS,
    };
    let submitted = submit_compute_units::<UNITS, Links, _, _>(&queue, kernel).unwrap();
    assert_eq!(submitted.count, UNITS);

    // every unit blocks on its input, so the chain only drains if all eight
    // run concurrently
    for value in 0..ITEMS as i64 {
        pipes.tx[0].send(value).unwrap();
        let out = pipes.rx[UNITS].recv().unwrap();
        assert_eq!(out, value + (0..UNITS as i64).sum::<i64>());
    }

    queue.wait().unwrap();
}

#[test]
fn test_units_feeding_one_sink() {
    init_logger();

    // fan-in: every unit writes its identity into the same pipe
    #[derive(Clone)]
    struct Report(Sender<usize>);

    impl ComputeUnit for Report {
        fn run<const ID: usize>(self, id: Index<ID>) {
            self.0.send(id.into()).unwrap();
        }
    }

    let (tx, rx) = bounded(64);
    let queue = HostQueue::new(QueueConfig::default()).unwrap();
    submit_compute_units::<64, Links, _, _>(&queue, Report(tx)).unwrap();
    queue.wait().unwrap();

    let mut ids: Vec<usize> = rx.try_iter().collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..64).collect::<Vec<_>>());
}
