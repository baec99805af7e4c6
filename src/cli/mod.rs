//! # CLI Module
//!
//! Command-line surface for routewalk. One logical entry point that accepts
//! a route string and terminates with either a printed result or a
//! 404-equivalent outcome.
//!
//! ## Commands
//!
//! ### `resolve`
//!
//! Resolve a route against a directory-backed namespace and print the
//! resolution:
//!
//! ```bash
//! routewalk resolve --root handlers/ admin/members/edit/7
//! ```
//!
//! ### `dispatch`
//!
//! Fully dispatch a route, loading every located unit as an echo handler:
//!
//! ```bash
//! routewalk dispatch --root handlers/ Todolist/delete
//! ```
//!
//! A not-found outcome prints a short generic message and exits non-zero;
//! internal paths never leak into the output.
//!
//! ## Naming Convention
//!
//! `--prefix` and `--suffix` define which files count as handler nodes:
//! with `--prefix handler_ --suffix .toml`, segment `members` maps to the
//! file `handler_members.toml`.

mod commands;


pub use commands::{run_cli, Cli, Commands};
