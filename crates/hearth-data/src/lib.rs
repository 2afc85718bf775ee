//! # hearth-data
//!
//! Read-only data access for the Hearth portal.
//!
//! The [`ProjectRepository`] trait is the single capability interface the
//! view layer depends on. It has two implementations, selected once at
//! session start based on authentication state:
//!
//! - [`RemoteStore`] — HTTP adapter against the remote store's REST read API
//! - [`DemoStore`] — static in-memory dataset for the unauthenticated demo
//!
//! Both satisfy the same shape and ordering contract, so everything
//! downstream is unaware which is active.

pub mod demo;
pub mod error;
pub mod remote;
pub mod repository;

pub use demo::DemoStore;
pub use error::DataError;
pub use remote::RemoteStore;
pub use repository::ProjectRepository;
