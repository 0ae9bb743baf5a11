//! Workload profiles for benchmarking the strlist container.
//!
//! - [`values`]: deterministic element payloads from a seed
//! - [`mixed_ops`]: a seeded stream of end operations
//! - [`run_ops`]: replay a stream against a list

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strlist::ListArray;

/// One end operation in a benchmark stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndOp {
    /// Push the payload with this index to the front.
    PushFront(usize),
    /// Push the payload with this index to the back.
    PushBack(usize),
    /// Pop from the front if non-empty.
    PopFront,
    /// Pop from the back if non-empty.
    PopBack,
}

/// Generate `count` short payload strings, identical for identical seeds.
pub fn values(count: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| format!("item-{:08x}", rng.next_u32()))
        .collect()
}

/// Generate `count` end operations over `payloads` payloads.
///
/// Pushes outnumber pops three to one so the list keeps growing.
pub fn mixed_ops(count: usize, payloads: usize, seed: u64) -> Vec<EndOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let roll = rng.next_u32();
            let idx = (rng.next_u32() as usize) % payloads.max(1);
            match roll % 8 {
                0..=2 => EndOp::PushBack(idx),
                3..=5 => EndOp::PushFront(idx),
                6 => EndOp::PopBack,
                _ => EndOp::PopFront,
            }
        })
        .collect()
}

/// Replay `ops` against `list`, drawing payloads from `payloads`.
pub fn run_ops(list: &mut ListArray, ops: &[EndOp], payloads: &[String]) {
    for op in ops {
        match *op {
            EndOp::PushFront(i) => list.push_front(payloads[i].as_str()),
            EndOp::PushBack(i) => list.push_back(payloads[i].as_str()),
            EndOp::PopFront => {
                let _ = list.try_pop_front();
            }
            EndOp::PopBack => {
                let _ = list.try_pop_back();
            }
        }
    }
}
