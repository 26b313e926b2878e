pub mod entities;
pub mod helpers;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;

/// Every generation request asks the model for this many recipes, and any
/// response without exactly this many well-formed entries is rejected.
pub const SUGGESTION_COUNT: usize = 5;
