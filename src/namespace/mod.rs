//! # Namespace Module
//!
//! The handler namespace is an ordered, rooted tree mirroring a directory
//! hierarchy. Each node is either a **namespace node** (a grouping level,
//! analogous to a sub-folder, containing child nodes) or a **handler node**
//! (a leaf representing one loadable handler).
//!
//! The resolver does not own the tree; it only needs an injected lookup
//! capability, expressed by the [`Namespace`] trait:
//!
//! - "is this segment a sub-namespace directly under this position?"
//! - "is this segment a handler directly under this position?"
//!
//! Two implementations are provided:
//!
//! - [`StaticNamespace`] - an in-memory tree built once at startup via
//!   [`StaticNamespace::builder`].
//! - [`DirNamespace`] - backed by a real directory tree: a sub-directory is a
//!   namespace node and a file named `<prefix><segment><suffix>` is a handler
//!   node.
//!
//! Both are read-only after construction and safe to share across concurrent
//! resolutions.

mod core;
mod dir;

pub use core::{Namespace, StaticNamespace, StaticNamespaceBuilder};
pub use dir::DirNamespace;
