//! Array-backed list of strings with doubling growth.
//!
//! [`ListArray`] keeps its elements in one exclusively-owned buffer of
//! `capacity` slots and supports insertion and removal at both ends,
//! indexed access, and independent copies.
//!
//! # Buffer policy
//!
//! ```text
//! storage: [ e0 | e1 | ... | e(count-1) | spare ... ]
//!            ^ front          ^ back      ^ empty strings
//! ```
//!
//! - **Growth:** when an insertion finds `count == capacity`, the live
//!   elements move into a buffer twice the size.
//! - **Removal:** never shrinks the buffer. Vacated slots are reset to
//!   empty strings.
//! - **Assignment:** [`ListArray::assign`] copies into the existing buffer
//!   when it has room, otherwise adopts a buffer of the source's capacity.
//!   Equal lists may therefore report different capacities.
//!
//! # Contract violations
//!
//! `front`, `back`, `pop_front`, `pop_back` and indexing panic on an empty
//! list or an out-of-range index, in every build profile. The checked
//! variants (`get`, `try_front`, `try_pop_back`, ...) return
//! `Option`/[`ListError`] instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod list;
pub mod metrics;
mod render;

// Public re-exports for the primary API surface.
pub use config::ListConfig;
pub use error::ListError;
pub use list::ListArray;
pub use metrics::ListMetrics;
