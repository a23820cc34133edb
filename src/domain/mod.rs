pub mod coerce;
pub mod keys;
pub mod models;

pub use coerce::coerce_int;
pub use models::*;
