use std::collections::{HashMap, HashSet};

/// Read-only lookup capability over a handler namespace tree.
///
/// `at` is the namespace path walked so far, root-relative and in walk order;
/// an empty slice means the root. Matching is literal and case-sensitive.
///
/// Implementations must be cheap to query and free of interior mutability:
/// the same tree is shared read-only across concurrent resolutions.
pub trait Namespace: Send + Sync {
    /// Is `segment` a sub-namespace directly under `at`?
    fn has_namespace(&self, at: &[&str], segment: &str) -> bool;

    /// Is `segment` a handler directly under `at`?
    fn has_handler(&self, at: &[&str], segment: &str) -> bool;
}

#[derive(Debug, Default)]
struct Node {
    namespaces: HashMap<String, Node>,
    handlers: HashSet<String>,
}

impl Node {
    fn descend(&self, at: &[&str]) -> Option<&Node> {
        let mut node = self;
        for seg in at {
            node = node.namespaces.get(*seg)?;
        }
        Some(node)
    }
}

/// In-memory handler namespace, built once at startup.
#[derive(Debug, Default)]
pub struct StaticNamespace {
    root: Node,
}

impl StaticNamespace {
    /// Start building a namespace tree.
    #[must_use]
    pub fn builder() -> StaticNamespaceBuilder {
        StaticNamespaceBuilder::default()
    }
}

impl Namespace for StaticNamespace {
    fn has_namespace(&self, at: &[&str], segment: &str) -> bool {
        self.root
            .descend(at)
            .is_some_and(|node| node.namespaces.contains_key(segment))
    }

    fn has_handler(&self, at: &[&str], segment: &str) -> bool {
        self.root
            .descend(at)
            .is_some_and(|node| node.handlers.contains(segment))
    }
}

/// Builder for [`StaticNamespace`].
///
/// Intermediate namespace nodes are created on demand, so registering
/// `handler_at(&["admin", "reports"], "summary")` creates the `admin` and
/// `reports` grouping levels implicitly.
#[derive(Debug, Default)]
pub struct StaticNamespaceBuilder {
    root: Node,
}

impl StaticNamespaceBuilder {
    /// Register a handler at the tree root.
    #[must_use]
    pub fn handler(self, name: &str) -> Self {
        self.handler_at(&[], name)
    }

    /// Register a handler under the given namespace path.
    #[must_use]
    pub fn handler_at(mut self, namespace: &[&str], name: &str) -> Self {
        let node = Self::descend_mut(&mut self.root, namespace);
        node.handlers.insert(name.to_string());
        self
    }

    /// Register an (possibly empty) namespace path.
    #[must_use]
    pub fn namespace_at(mut self, namespace: &[&str]) -> Self {
        let _ = Self::descend_mut(&mut self.root, namespace);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> StaticNamespace {
        StaticNamespace { root: self.root }
    }

    fn descend_mut<'a>(mut node: &'a mut Node, namespace: &[&str]) -> &'a mut Node {
        for seg in namespace {
            node = node.namespaces.entry((*seg).to_string()).or_default();
        }
        node
    }
}
