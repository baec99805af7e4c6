//! # Resolver Module
//!
//! Pure route resolution: turn a slash-delimited route string into
//! (handler identity, action name, positional arguments) by walking the
//! segments against a [`Namespace`](crate::namespace::Namespace) tree.
//!
//! ## Algorithm
//!
//! Segments are consumed left-to-right, each at most once, with no
//! backtracking:
//!
//! 1. A segment naming a sub-namespace at the current position descends the
//!    walk (arbitrary depth).
//! 2. A segment naming a handler at the current position ends the walk with
//!    that handler - the walk is greedy and stops at the first handler found,
//!    it never prefers a deeper handler over a shallower one.
//! 3. A segment matching neither ends the walk without being consumed.
//!
//! If no handler was matched, the handler defaults to the well-known name
//! `index`, located at the deepest namespace reached. The next unconsumed
//! segment (if any) is the action, defaulting to `index`; all remaining
//! segments become positional arguments in their original order.
//!
//! Resolution is a total function: it cannot fail. "Not found" is decided
//! later by the dispatcher, when the loader is asked for the resolved unit.
//!
//! ## Example
//!
//! ```rust
//! use routewalk::namespace::StaticNamespace;
//! use routewalk::resolver::resolve;
//!
//! let ns = StaticNamespace::builder().handler("members").build();
//!
//! // `view` is neither a namespace nor a handler under `members`,
//! // so it becomes the action.
//! let res = resolve("members/view", &ns);
//! assert_eq!(res.handler_name, "members");
//! assert_eq!(res.action_name, "view");
//! assert!(res.args.is_empty());
//! ```

mod core;

pub use core::{resolve, HandlerLocation, Resolution, DEFAULT_SEGMENT};
