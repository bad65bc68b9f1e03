//! four compute units chained through pipes.
//!
//! unit `ID` reads from pipe `ID`, adds `ID + 1` and writes to pipe `ID + 1`.
//! the main thread feeds pipe 0 and drains the last pipe.
//!
//! usage: cargo run --example pipeline -- [--items N] [--cores 0,1,2]
//!
//! env: SPATIAL_ITEMS, SPATIAL_CPU_CORES, RUST_LOG

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use spatial_compute_units::{
    compute_unit_name, submit_compute_units, ComputeUnit, HostQueue, Index, QueueConfig,
};
use std::env;
use std::process;
use std::sync::Arc;
use std::time::Instant;

const STAGES: usize = 4;
const PIPE_DEPTH: usize = 16;

compute_unit_name!(Stages => Stage);

struct Pipe {
    tx: Sender<u64>,
    rx: Receiver<u64>,
}

#[derive(Clone)]
struct AddStage {
    pipes: Arc<Vec<Pipe>>,
    items: usize,
}

impl ComputeUnit for AddStage {
    fn run<const ID: usize>(self, _id: Index<ID>) {
        let input = &self.pipes[ID].rx;
        let output = &self.pipes[ID + 1].tx;

        for _ in 0..self.items {
            let Ok(value) = input.recv() else {
                error!("stage {} input closed", ID);
                return;
            };
            if output.send(value + ID as u64 + 1).is_err() {
                error!("stage {} output closed", ID);
                return;
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let items: usize = match arg_value(&args, "--items")
        .or_else(|| env::var("SPATIAL_ITEMS").ok())
        .map(|v| v.parse())
        .transpose()
    {
        Ok(items) => items.unwrap_or(1_000),
        Err(e) => {
            error!("invalid item count: {}", e);
            process::exit(2);
        }
    };

    let cores = match arg_value(&args, "--cores")
        .or_else(|| env::var("SPATIAL_CPU_CORES").ok())
        .map(|v| parse_cores(&v))
        .transpose()
    {
        Ok(cores) => cores.unwrap_or_default(),
        Err(e) => {
            error!("invalid core list: {}", e);
            process::exit(2);
        }
    };

    let config = QueueConfig::new()
        .with_thread_name_prefix("stage")
        .with_cpu_cores(cores);
    let queue = match HostQueue::new(config) {
        Ok(queue) => queue,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let pipes: Arc<Vec<Pipe>> = Arc::new(
        (0..=STAGES)
            .map(|_| {
                let (tx, rx) = bounded(PIPE_DEPTH);
                Pipe { tx, rx }
            })
            .collect(),
    );

    let kernel = AddStage {
        pipes: Arc::clone(&pipes),
        items,
    };
    if let Err(e) = submit_compute_units::<STAGES, Stages, _, _>(&queue, kernel) {
        error!("{}", e);
        process::exit(1);
    }

    let start = Instant::now();
    let feed = pipes[0].tx.clone();
    let producer = std::thread::spawn(move || {
        for value in 0..items as u64 {
            if feed.send(value).is_err() {
                break;
            }
        }
    });

    // every item picks up 1 + 2 + .. + STAGES on its way through
    let offset = (STAGES * (STAGES + 1) / 2) as u64;
    let mut mismatches = 0usize;
    for expected in 0..items as u64 {
        match pipes[STAGES].rx.recv() {
            Ok(value) if value == expected + offset => {}
            Ok(value) => {
                mismatches += 1;
                error!("item {}: got {}, want {}", expected, value, expected + offset);
            }
            Err(_) => {
                error!("pipeline closed after {} items", expected);
                process::exit(1);
            }
        }
    }

    if producer.join().is_err() {
        error!("producer panicked");
        process::exit(1);
    }
    if let Err(e) = queue.wait() {
        error!("{}", e);
        process::exit(1);
    }

    info!(
        "{} items through {} stages in {:?} ({} mismatches)",
        items,
        STAGES,
        start.elapsed(),
        mismatches
    );
    if mismatches > 0 {
        process::exit(1);
    }
}

fn parse_cores(list: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse())
        .collect()
}

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}
