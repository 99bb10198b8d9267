//! Command handler implementations

pub mod compare;
pub mod lookup;
