//! Test utilities for strlist development.
//!
//! Provides list fixtures, proptest strategies over list operations, and
//! [`ModelList`], which drives a [`ListArray`] and a `VecDeque<String>`
//! reference model in lockstep so tests can compare them after every step.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use proptest::prelude::*;
use strlist::ListArray;

/// Build a list with the given capacity and push `values` to the back.
pub fn list_with_capacity(capacity: usize, values: &[&str]) -> ListArray {
    let mut list = ListArray::with_capacity(capacity);
    for v in values {
        list.push_back(*v);
    }
    list
}

/// Snapshot of the live elements, read through indexed access only.
pub fn contents(list: &ListArray) -> Vec<String> {
    (0..list.size()).map(|i| list[i].clone()).collect()
}

/// A single mutation applied by [`ModelList::apply`].
#[derive(Clone, Debug)]
pub enum ListOp {
    PushFront(String),
    PushBack(String),
    PopFront,
    PopBack,
    /// Overwrite the element at `index % len`. Skipped on an empty list.
    Set(usize, String),
}

/// A [`ListArray`] paired with a `VecDeque` that receives the same operations.
///
/// Pops on an empty list go through the checked accessors and are
/// expected to fail on both sides.
pub struct ModelList {
    list: ListArray,
    model: VecDeque<String>,
}

impl ModelList {
    pub fn new(capacity: usize) -> Self {
        Self {
            list: ListArray::with_capacity(capacity),
            model: VecDeque::new(),
        }
    }

    pub fn apply(&mut self, op: &ListOp) {
        match op {
            ListOp::PushFront(v) => {
                self.list.push_front(v.as_str());
                self.model.push_front(v.clone());
            }
            ListOp::PushBack(v) => {
                self.list.push_back(v.as_str());
                self.model.push_back(v.clone());
            }
            ListOp::PopFront => {
                assert_eq!(self.list.try_pop_front().ok(), self.model.pop_front());
            }
            ListOp::PopBack => {
                assert_eq!(self.list.try_pop_back().ok(), self.model.pop_back());
            }
            ListOp::Set(index, v) => {
                if !self.model.is_empty() {
                    let i = index % self.model.len();
                    self.list[i] = v.clone();
                    self.model[i] = v.clone();
                }
            }
        }
    }

    pub fn list(&self) -> &ListArray {
        &self.list
    }

    pub fn model(&self) -> &VecDeque<String> {
        &self.model
    }

    /// Describe the first divergence between list and model, if any.
    pub fn mismatch(&self) -> Option<String> {
        if self.list.size() != self.model.len() {
            return Some(format!(
                "size {} != model len {}",
                self.list.size(),
                self.model.len()
            ));
        }
        if self.list.size() > self.list.capacity() {
            return Some(format!(
                "size {} exceeds capacity {}",
                self.list.size(),
                self.list.capacity()
            ));
        }
        for (i, expected) in self.model.iter().enumerate() {
            if &self.list[i] != expected {
                return Some(format!(
                    "index {i}: {:?} != model {:?}",
                    self.list[i], expected
                ));
            }
        }
        None
    }
}

/// Short lowercase strings, including the empty string.
pub fn arb_value() -> impl Strategy<Value = String> {
    "[a-z]{0,6}"
}

pub fn arb_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        arb_value().prop_map(ListOp::PushFront),
        arb_value().prop_map(ListOp::PushBack),
        Just(ListOp::PopFront),
        Just(ListOp::PopBack),
        (any::<usize>(), arb_value()).prop_map(|(i, v)| ListOp::Set(i, v)),
    ]
}

pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<ListOp>> {
    prop::collection::vec(arb_op(), 0..max_len)
}

/// Lists of up to `max_len` values, built from a random initial capacity.
pub fn arb_list(max_len: usize) -> impl Strategy<Value = ListArray> {
    (1usize..16, prop::collection::vec(arb_value(), 0..max_len)).prop_map(|(cap, values)| {
        let mut list = ListArray::with_capacity(cap);
        for v in values {
            list.push_back(v);
        }
        list
    })
}
