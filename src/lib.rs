//! # routewalk
//!
//! **routewalk** is a small, convention-driven request dispatcher. Given a
//! slash-delimited route string it locates a handler (an object owning a group
//! of related actions) by walking the route segments against a namespace tree,
//! then invokes one of the handler's actions with the remaining segments as
//! positional string arguments.
//!
//! ## Architecture
//!
//! The library is organized into a few small modules:
//!
//! - **[`namespace`]** - The handler-namespace tree: an injected, read-only
//!   lookup capability answering "is this segment a sub-namespace here" and
//!   "is this segment a handler here". Ships an in-memory tree
//!   ([`namespace::StaticNamespace`]) and a directory-backed one
//!   ([`namespace::DirNamespace`]).
//! - **[`resolver`]** - Pure route resolution: route string + namespace in,
//!   [`Resolution`] out. Total function, never fails, defaults to
//!   `index`/`index`.
//! - **[`dispatcher`]** - Orchestration: extracts the raw route from a
//!   [`dispatcher::RequestSource`], resolves it, loads the handler through a
//!   [`dispatcher::HandlerLoader`], verifies the action exists and invokes it.
//!   Missing handlers and missing actions terminate as a 404-equivalent
//!   [`dispatcher::DispatchError::NotFound`].
//! - **[`registry`]** - Per-request key/value context with write-once keys.
//!   Created once per dispatch and handed to the handler factory; never shared
//!   across requests.
//! - **[`echo`]** - A diagnostic handler that reports whatever action and
//!   arguments it was invoked with; used by the CLI and tests.
//! - **[`cli`]** - The `routewalk` binary: resolve or dispatch a route against
//!   a directory-backed namespace from the command line.
//!
//! ## Request Flow
//!
//! 1. Request source supplies the raw route string (`"admin/members/edit/7"`)
//! 2. Resolver walks the namespace tree: `admin` is a sub-namespace, `members`
//!    is a handler there, so the walk stops. `edit` becomes the action and
//!    `["7"]` the positional arguments.
//! 3. Dispatcher asks the loader whether a unit exists at `admin/members`;
//!    a miss is a terminal 404.
//! 4. The loader instantiates the handler with the per-request [`Registry`].
//! 5. The dispatcher checks the action exists on the handler (miss: 404) and
//!    invokes it with the positional arguments.
//!
//! ## Example
//!
//! ```rust
//! use routewalk::namespace::StaticNamespace;
//! use routewalk::resolver::resolve;
//!
//! let ns = StaticNamespace::builder()
//!     .handler("index")
//!     .handler_at(&["admin"], "members")
//!     .build();
//!
//! let res = resolve("admin/members/edit/7", &ns);
//! assert_eq!(res.handler_name, "members");
//! assert_eq!(res.action_name, "edit");
//! assert_eq!(res.args, vec!["7".to_string()]);
//! assert_eq!(res.location.qualified_name(), "admin/members");
//! ```
//!
//! ## Conventions
//!
//! Resolution is greedy: the walk terminates at the first handler it finds,
//! it never prefers a deeper handler over a shallower one. When no segment
//! matches anything, the handler falls back to the well-known name `index`,
//! and an absent action falls back to `index` as well. Matching is literal
//! and case-sensitive; URL-decoding and query strings are the request
//! source's concern, not this crate's.

pub mod cli;
pub mod dispatcher;
pub mod echo;
pub mod namespace;
pub mod registry;
pub mod resolver;

pub use dispatcher::{DispatchError, Dispatcher, FactoryLoader, Handler, HandlerLoader, RequestSource};
pub use namespace::Namespace;
pub use registry::{Registry, RegistryError};
pub use resolver::{resolve, HandlerLocation, Resolution, DEFAULT_SEGMENT};
