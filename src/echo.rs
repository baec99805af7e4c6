//! Diagnostic echo handler: accepts every action and reports what it was
//! invoked with. Used by the CLI `dispatch` command and in tests.

use crate::dispatcher::{Handler, HandlerLoader, KEY_ROUTE};
use crate::namespace::Namespace;
use crate::registry::Registry;
use crate::resolver::HandlerLocation;
use serde::Serialize;

/// What one echo invocation saw.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EchoReport {
    /// Raw route the dispatcher seeded into the registry, if any.
    pub route: Option<String>,
    /// Invoked action name.
    pub action: String,
    /// Positional arguments, in route order.
    pub args: Vec<String>,
}

/// Example handler: echoes back its invocation as a JSON line on stdout.
pub struct EchoHandler {
    registry: Registry,
}

impl EchoHandler {
    /// Wrap the per-request registry.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }
}

impl Handler for EchoHandler {
    fn has_action(&self, _action: &str) -> bool {
        true
    }

    fn invoke(&mut self, action: &str, args: &[String]) -> anyhow::Result<()> {
        let report = EchoReport {
            route: self
                .registry
                .get(KEY_ROUTE)
                .and_then(|v| v.as_str())
                .map(str::to_string),
            action: action.to_string(),
            args: args.to_vec(),
        };
        println!("{}", serde_json::to_string(&report)?);
        Ok(())
    }
}

/// Loader that produces an [`EchoHandler`] for every unit present in the
/// wrapped namespace. Lets a directory tree be dispatched against without
/// writing any real handlers.
pub struct EchoLoader<N: Namespace> {
    ns: N,
}

impl<N: Namespace> EchoLoader<N> {
    /// Wrap a namespace.
    #[must_use]
    pub fn new(ns: N) -> Self {
        Self { ns }
    }
}

impl<N: Namespace> HandlerLoader for EchoLoader<N> {
    fn contains(&self, location: &HandlerLocation) -> bool {
        let at: Vec<&str> = location.namespace.iter().map(String::as_str).collect();
        self.ns.has_handler(&at, &location.handler)
    }

    fn load(
        &self,
        _location: &HandlerLocation,
        registry: Registry,
    ) -> anyhow::Result<Box<dyn Handler>> {
        Ok(Box::new(EchoHandler::new(registry)))
    }
}
