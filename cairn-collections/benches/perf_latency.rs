//! Per-operation latency distribution for the hot operations.
//!
//! Run: cargo bench --bench perf_latency
//! Profile: sudo taskset -c 2 ./target/release/deps/perf_latency-*

use std::hint::black_box;

use cairn_collections::{Array, List, RingBuffer};
use hdrhistogram::Histogram;

const WARMUP: usize = 10_000;
const ITERATIONS: usize = 100_000;

#[inline]
fn rdtscp() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        core::arch::x86_64::__rdtscp(&mut 0)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        use std::time::Instant;
        static START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
        START.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}

fn print_histogram(name: &str, hist: &Histogram<u64>) {
    println!(
        "{:24} p50: {:4} cycles | p99: {:4} cycles | p999: {:5} cycles | min: {:4} | max: {:5}",
        name,
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.min(),
        hist.max(),
    );
}

/// Times `op` once per iteration after a warmup.
fn measure(mut op: impl FnMut(usize)) -> Histogram<u64> {
    let mut hist = Histogram::<u64>::new(3).expect("valid sigfig");

    for i in 0..WARMUP {
        op(i);
    }

    for i in 0..ITERATIONS {
        let start = rdtscp();
        op(i);
        let elapsed = rdtscp().saturating_sub(start);
        let _ = hist.record(elapsed);
    }

    hist
}

fn main() {
    println!("\ncairn-collections latency ({ITERATIONS} iterations)");
    println!("---------------------------------------------------------");

    // Array append including the occasional doubling
    let mut items = Array::with_capacity(1);
    let hist = measure(|i| items.append(i as i32));
    print_histogram("array append (growing)", &hist);

    let mut items = Array::with_capacity(WARMUP + ITERATIONS);
    let hist = measure(|i| items.append(i as i32));
    print_histogram("array append (prealloc)", &hist);

    let hist = measure(|_| {
        black_box(items.pop().ok());
    });
    print_histogram("array pop", &hist);

    // List append/remove_node churn at a steady length
    let mut list: List = (0..1024).collect();
    let hist = measure(|i| {
        let key = list.append(i as i32);
        black_box(list.remove_node(key));
    });
    print_histogram("list append+remove_node", &hist);

    let hist = measure(|i| {
        black_box(list.get(i % 16).ok());
    });
    print_histogram("list get (index < 16)", &hist);

    // Ring buffer queue at a steady half fill
    let mut ring = RingBuffer::with_capacity(1024);
    for v in 0..512 {
        let _ = ring.push(v);
    }
    let hist = measure(|i| {
        let _ = ring.push(i as i32);
        black_box(ring.deque().ok());
    });
    print_histogram("ring push+deque", &hist);

    println!();
}
