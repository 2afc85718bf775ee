//! Command handlers mapping CLI verbs onto portal flows.

pub mod browse;
pub mod login;
pub mod logout;
pub mod project;
pub mod projects;
pub mod whoami;
