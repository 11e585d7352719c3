//! Counter store: keyed registry of click counters.
//!
//! - `CounterId`: validated, opaque identifier (non-empty, otherwise unconstrained)
//! - `Counter`: `count` + `last_click` snapshot
//! - `CounterStore`: lazy creation, atomic increment, delete, listing

mod clock;
mod model;
mod store;

pub use clock::{Clock, SystemClock};
pub use model::{Counter, CounterId};
pub use store::CounterStore;
