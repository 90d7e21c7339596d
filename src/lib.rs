pub mod db;
pub mod domain;
pub mod models;
pub mod processing;
pub mod repository;
pub mod schema;

/// Default number of matches kept per entity in each direction.
pub const DEFAULT_TOP_K: usize = 5;
