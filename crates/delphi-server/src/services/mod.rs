//! External collaborators consumed by the service.

pub mod price;

pub use price::{PriceSource, Quote, StaticPriceSource};
