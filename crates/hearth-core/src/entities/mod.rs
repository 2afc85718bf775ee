//! Entity structs for the four Hearth domain objects.
//!
//! Each entity maps to a table in the remote store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`; deserialization goes through
//! the closed enums in [`crate::enums`], so a row with an out-of-enumeration
//! status fails to decode instead of arriving with a defaulted field.
//!
//! Entities are immutable once loaded — the portal only ever reads them.

mod customer;
mod milestone;
mod project;
mod update;

pub use customer::Customer;
pub use milestone::Milestone;
pub use project::Project;
pub use update::ProjectUpdate;
