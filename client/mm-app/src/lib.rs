//! matchmaker - terminal client for the matchmaking service
//!
//! Log in, browse the people you can pick from, send likes and follow your
//! matches. Admins also manage the member directory.
//!
//! # Examples
//!
//! ```bash
//! matchmaker login alice --password secret
//! matchmaker people --pretty
//! matchmaker select 2
//! matchmaker submit
//! matchmaker matches list
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod notice;
pub mod routes;
pub mod views;

#[cfg(test)]
mod tests;

pub use app::{App, AppSettings};
pub use error::{AppError, Result as AppErrorResult};
pub use notice::{Notice, NoticeLevel};
pub use routes::{Route, guard, landing_for};
