/// Entity models for TaskNest
///
/// Each entity module defines the row struct, its create/update payloads,
/// and the [`crate::repository::Resource`] implementation that plugs it
/// into the generic repository.
///
/// # Models
///
/// - `user`: account rows; `email` is unique store-wide
/// - `todo`: task rows owned by a user; deleted together with their owner
pub mod todo;
pub mod user;
