//! # Dispatcher Module
//!
//! The dispatcher orchestrates one request from raw route string to invoked
//! action. It owns no handler logic of its own; everything domain-specific
//! arrives through collaborator traits:
//!
//! - [`RequestSource`] supplies the raw route (and any out-of-band payload).
//! - [`HandlerLoader`] answers "does a loadable unit exist at this location"
//!   and instantiates it with the per-request [`Registry`](crate::Registry).
//! - [`Handler`] is the instantiated unit: it knows which actions it has and
//!   how to invoke them with positional string arguments.
//!
//! ## Request Flow
//!
//! 1. Extract the raw route from the request source
//! 2. Resolve it against the namespace tree ([`crate::resolver::resolve`])
//! 3. Loader existence check - a miss is a terminal
//!    [`DispatchError::NotFound`]
//! 4. Instantiate the handler with a freshly created, seeded registry
//! 5. Action existence check - a miss is again a terminal `NotFound`
//! 6. Invoke the action; whatever it writes goes to its own output
//!    collaborator, the dispatcher produces no output
//!
//! ## Error Handling
//!
//! `NotFound` is final and user-visible, the 404 analog; there is no retry
//! and no fallback chain beyond the resolver's default-to-`index` rule.
//! A loader that finds the unit but cannot build it fails the request with
//! [`DispatchError::LoadFailure`], which is deliberately distinct from
//! `NotFound`.
//!
//! ## Handler Registration
//!
//! Dynamic lookup-by-name is done against a startup-time registry of handler
//! factories, [`FactoryLoader`], keyed by the qualified handler name:
//!
//! ```rust
//! use routewalk::dispatcher::FactoryLoader;
//! use routewalk::echo::EchoHandler;
//!
//! let mut loader = FactoryLoader::new();
//! loader.register("admin/members", |registry| {
//!     Ok(Box::new(EchoHandler::new(registry)))
//! });
//! ```

mod core;

pub use core::{
    DispatchError, Dispatcher, FactoryLoader, Handler, HandlerFactory, HandlerLoader,
    RequestSource, KEY_PAYLOAD, KEY_ROUTE,
};
