//! The array-backed string list.
//!
//! [`ListArray`] owns a boxed slice of `capacity` string slots. The first
//! `count` slots hold the live elements in order; the rest are spare and
//! always hold empty strings. Capacity doubles whenever an insertion finds
//! the buffer full and never shrinks on removal.

use std::mem;
use std::ops::{Index, IndexMut};

use crate::config::ListConfig;
use crate::error::ListError;
use crate::metrics::ListMetrics;

/// An ordered sequence of strings stored in a contiguous, owned buffer.
///
/// Back insertion and removal are amortized O(1); front insertion and
/// removal shift every live element and cost O(len). Indexed access is O(1).
///
/// The primary accessors treat an empty list or an out-of-range index as
/// a caller bug and panic. The `get`/`try_*` family reports the same
/// conditions as `Option`/[`ListError`] instead.
///
/// Copies are independent: [`Clone::clone`] allocates a buffer of the same
/// capacity, and [`ListArray::assign`] (also reachable as
/// [`Clone::clone_from`]) reuses the existing buffer whenever it already
/// has room for the source's elements.
pub struct ListArray {
    /// Exactly `capacity` slots. Spare slots hold empty strings.
    storage: Box<[String]>,
    /// Number of live elements at the front of `storage`.
    count: usize,
    metrics: ListMetrics,
}

fn alloc_slots(capacity: usize) -> Box<[String]> {
    std::iter::repeat_with(String::new).take(capacity).collect()
}

impl ListArray {
    /// Create an empty list with [`ListConfig::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(ListConfig::DEFAULT_CAPACITY)
    }

    /// Create an empty list with `initial_capacity` slots.
    ///
    /// A capacity of zero is raised to [`ListConfig::MIN_CAPACITY`].
    pub fn with_capacity(initial_capacity: usize) -> Self {
        let capacity = initial_capacity.max(ListConfig::MIN_CAPACITY);
        Self {
            storage: alloc_slots(capacity),
            count: 0,
            metrics: ListMetrics::default(),
        }
    }

    /// Create an empty list from a validated config.
    ///
    /// Fails with the config's validation error before allocating.
    pub fn from_config(config: &ListConfig) -> Result<Self, ListError> {
        config.validate()?;
        Ok(Self::with_capacity(config.initial_capacity))
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Alias for [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` when the list holds no elements.
    pub fn empty(&self) -> bool {
        self.count == 0
    }

    /// Alias for [`empty`](Self::empty).
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Insert `value` before the first element.
    pub fn push_front(&mut self, value: impl Into<String>) {
        self.reserve_one();
        // The spare slot at `count` rotates round to index 0.
        self.storage[..=self.count].rotate_right(1);
        self.metrics.elements_shifted += self.count as u64;
        self.storage[0] = value.into();
        self.count += 1;
    }

    /// Append `value` after the last element.
    pub fn push_back(&mut self, value: impl Into<String>) {
        self.reserve_one();
        self.storage[self.count] = value.into();
        self.count += 1;
    }

    /// Remove and return the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn pop_front(&mut self) -> String {
        self.expect_non_empty("pop_front");
        let value = mem::take(&mut self.storage[0]);
        self.storage[..self.count].rotate_left(1);
        self.metrics.elements_shifted += (self.count - 1) as u64;
        self.count -= 1;
        value
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn pop_back(&mut self) -> String {
        self.expect_non_empty("pop_back");
        self.count -= 1;
        mem::take(&mut self.storage[self.count])
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn front(&self) -> &String {
        self.expect_non_empty("front");
        &self.storage[0]
    }

    /// Mutable access to the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut String {
        self.expect_non_empty("front_mut");
        &mut self.storage[0]
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn back(&self) -> &String {
        self.expect_non_empty("back");
        &self.storage[self.count - 1]
    }

    /// Mutable access to the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut String {
        self.expect_non_empty("back_mut");
        &mut self.storage[self.count - 1]
    }

    /// The element at `index`, or `None` past the last live element.
    pub fn get(&self, index: usize) -> Option<&String> {
        self.live().get(index)
    }

    /// Mutable access to the element at `index`, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.storage[..self.count].get_mut(index)
    }

    /// Checked [`front`](Self::front).
    pub fn try_front(&self) -> Result<&String, ListError> {
        self.live().first().ok_or(ListError::Empty {
            operation: "front",
        })
    }

    /// Checked [`back`](Self::back).
    pub fn try_back(&self) -> Result<&String, ListError> {
        self.live().last().ok_or(ListError::Empty { operation: "back" })
    }

    /// Checked [`pop_front`](Self::pop_front). Leaves an empty list untouched.
    pub fn try_pop_front(&mut self) -> Result<String, ListError> {
        if self.count == 0 {
            return Err(ListError::Empty {
                operation: "pop_front",
            });
        }
        Ok(self.pop_front())
    }

    /// Checked [`pop_back`](Self::pop_back). Leaves an empty list untouched.
    pub fn try_pop_back(&mut self) -> Result<String, ListError> {
        if self.count == 0 {
            return Err(ListError::Empty {
                operation: "pop_back",
            });
        }
        Ok(self.pop_back())
    }

    /// Overwrite this list with a copy of `other`'s elements.
    ///
    /// The current buffer is kept when it already has at least
    /// `other.size()` slots, even if its capacity differs from `other`'s.
    /// Otherwise it is replaced by a buffer of `other.capacity()` slots.
    /// Either way the two lists compare equal afterwards and share nothing.
    pub fn assign(&mut self, other: &ListArray) {
        if self.capacity() < other.count {
            self.storage = alloc_slots(other.capacity());
            self.metrics.assign_reallocations += 1;
        } else {
            self.metrics.assign_reuses += 1;
            if self.count > other.count {
                for slot in &mut self.storage[other.count..self.count] {
                    *slot = String::new();
                }
            }
        }
        for (dst, src) in self.storage.iter_mut().zip(other.live()) {
            dst.clone_from(src);
        }
        self.count = other.count;
        debug_assert!(self.count <= self.capacity());
    }

    /// Buffer activity since construction or the last [`reset_metrics`](Self::reset_metrics).
    pub fn metrics(&self) -> ListMetrics {
        self.metrics
    }

    /// Zero the activity counters.
    pub fn reset_metrics(&mut self) {
        self.metrics = ListMetrics::default();
    }

    pub(crate) fn live(&self) -> &[String] {
        &self.storage[..self.count]
    }

    /// Double the buffer if the next insertion would not fit.
    fn reserve_one(&mut self) {
        if self.count == self.capacity() {
            let new_capacity = self
                .capacity()
                .checked_mul(2)
                .expect("capacity overflow");
            self.grow(new_capacity);
            self.metrics.grow_events += 1;
        }
        debug_assert!(self.count < self.capacity());
    }

    /// Move the live elements into a fresh buffer of `new_capacity` slots.
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.count);
        let mut new_storage = alloc_slots(new_capacity);
        for (dst, src) in new_storage.iter_mut().zip(&mut self.storage[..self.count]) {
            *dst = mem::take(src);
        }
        self.storage = new_storage;
    }

    #[track_caller]
    fn expect_non_empty(&self, operation: &'static str) {
        if self.count == 0 {
            panic!("{}", ListError::Empty { operation });
        }
    }

    #[track_caller]
    fn expect_in_range(&self, index: usize) {
        if index >= self.count {
            panic!(
                "{}",
                ListError::IndexOutOfRange {
                    index,
                    len: self.count,
                }
            );
        }
    }
}

impl Default for ListArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ListArray {
    /// Copy into a new buffer with the same capacity. Metrics start at zero.
    fn clone(&self) -> Self {
        let mut storage = alloc_slots(self.capacity());
        storage[..self.count].clone_from_slice(self.live());
        Self {
            storage,
            count: self.count,
            metrics: ListMetrics::default(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl PartialEq for ListArray {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl Eq for ListArray {}

impl std::fmt::Debug for ListArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListArray")
            .field("elements", &self.live())
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl Index<usize> for ListArray {
    type Output = String;

    #[track_caller]
    fn index(&self, index: usize) -> &String {
        self.expect_in_range(index);
        &self.storage[index]
    }
}

impl IndexMut<usize> for ListArray {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut String {
        self.expect_in_range(index);
        &mut self.storage[index]
    }
}

impl<S: Into<String>> FromIterator<S> for ListArray {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut list = Self::with_capacity(lower.max(ListConfig::DEFAULT_CAPACITY));
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl From<Vec<String>> for ListArray {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}
