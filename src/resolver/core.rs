use crate::namespace::Namespace;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// Fallback name for both the handler and the action when a route does not
/// supply one.
pub const DEFAULT_SEGMENT: &str = "index";

/// Where a resolved handler lives: its containing namespace path plus the
/// handler name. Loaders use the [`qualified_name`](Self::qualified_name) as
/// their lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerLocation {
    /// Namespace segments walked to reach the handler, root-relative,
    /// in walk order. Empty for a root-level handler.
    pub namespace: Vec<String>,
    /// Name of the handler inside that namespace.
    pub handler: String,
}

impl HandlerLocation {
    /// Slash-joined, root-relative name, e.g. `"admin/members"` or `"index"`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.handler.clone()
        } else {
            format!("{}/{}", self.namespace.join("/"), self.handler)
        }
    }
}

impl fmt::Display for HandlerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// Result of resolving one route string. Produced once per dispatch,
/// immutable, consumed immediately by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved handler name (`index` if nothing matched).
    pub handler_name: String,
    /// Resolved action name (`index` if the route supplied none).
    pub action_name: String,
    /// Unconsumed segments, in their original left-to-right order.
    /// Always strings; casting is the action's responsibility.
    pub args: Vec<String>,
    /// Where the dispatcher should load the handler from.
    pub location: HandlerLocation,
}

/// Resolve `route` against the namespace tree.
///
/// Total function: every route resolves, falling back to
/// [`DEFAULT_SEGMENT`] for a missing handler and action. Whether the
/// resolved unit actually exists is the loader's question, not ours.
/// Traversal is read-only and the same inputs always yield the same
/// resolution.
#[must_use]
pub fn resolve(route: &str, ns: &dyn Namespace) -> Resolution {
    let mut segments: VecDeque<&str> = route.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        segments.push_back(DEFAULT_SEGMENT);
    }

    let mut walked: Vec<&str> = Vec::new();
    let mut handler: Option<&str> = None;

    while let Some(&segment) = segments.front() {
        if ns.has_namespace(&walked, segment) {
            walked.push(segment);
            segments.pop_front();
        } else if ns.has_handler(&walked, segment) {
            // Greedy: first handler wins, the walk goes no deeper.
            handler = Some(segment);
            segments.pop_front();
            break;
        } else {
            // Unmatched segment stays unconsumed; it becomes the action.
            break;
        }
    }

    let handler_name = handler.unwrap_or(DEFAULT_SEGMENT).to_string();
    let action_name = segments
        .pop_front()
        .unwrap_or(DEFAULT_SEGMENT)
        .to_string();
    let args: Vec<String> = segments.into_iter().map(str::to_string).collect();

    let location = HandlerLocation {
        namespace: walked.iter().map(|s| (*s).to_string()).collect(),
        handler: handler_name.clone(),
    };

    debug!(
        route = route,
        handler = %location,
        action = %action_name,
        args = ?args,
        "Route resolved"
    );

    Resolution {
        handler_name,
        action_name,
        args,
        location,
    }
}
