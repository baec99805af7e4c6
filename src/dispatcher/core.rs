use crate::namespace::Namespace;
use crate::registry::Registry;
use crate::resolver::{resolve, HandlerLocation};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, error, info, warn};

/// Registry key under which the dispatcher stores the raw route string.
pub const KEY_ROUTE: &str = "route";

/// Registry key under which the dispatcher stores the request payload,
/// when the request source supplies one.
pub const KEY_PAYLOAD: &str = "payload";

/// Supplies the raw route string for one request.
///
/// The dispatcher is agnostic to where the route came from: a rewritten URL
/// path, a query parameter or a CLI argument all look the same here.
pub trait RequestSource {
    /// The raw, slash-delimited route string.
    fn route(&self) -> String;

    /// Out-of-band request data (form fields, body). Travels to the handler
    /// via the per-request registry, not via positional arguments.
    fn payload(&self) -> Value {
        Value::Null
    }
}

/// An instantiated handler: a group of related actions.
///
/// The trait object doubles as the invocation capability: `has_action`
/// answers whether a name is invocable, `invoke` runs it. Arguments are
/// always strings, in original route order; casting (e.g. to an integer id)
/// is the action's responsibility.
pub trait Handler {
    /// Is `action` an invocable member of this handler?
    fn has_action(&self, action: &str) -> bool;

    /// Invoke `action` with the given positional arguments.
    ///
    /// # Errors
    ///
    /// Whatever the action fails with; the dispatcher propagates it as
    /// [`DispatchError::HandlerFailed`].
    fn invoke(&mut self, action: &str, args: &[String]) -> anyhow::Result<()>;
}

/// Produces handler instances for resolved locations.
pub trait HandlerLoader {
    /// Does a loadable unit exist at `location`?
    fn contains(&self, location: &HandlerLocation) -> bool;

    /// Instantiate the handler at `location`, handing it the per-request
    /// registry.
    ///
    /// # Errors
    ///
    /// A unit that exists but cannot be built (malformed definition, failed
    /// construction) errors here; the dispatcher treats that as fatal to the
    /// request, distinct from not-found.
    fn load(
        &self,
        location: &HandlerLocation,
        registry: Registry,
    ) -> anyhow::Result<Box<dyn Handler>>;
}

/// Constructor capability for one handler, keyed by qualified name in a
/// [`FactoryLoader`].
pub type HandlerFactory =
    Box<dyn Fn(Registry) -> anyhow::Result<Box<dyn Handler>> + Send + Sync>;

/// Startup-time registry of handler factories keyed by qualified handler
/// name (e.g. `"admin/members"`).
///
/// This replaces on-demand file inclusion and instantiation-by-name: the
/// mapping from name to constructor is populated once at process
/// initialization and looked up per dispatch.
#[derive(Default)]
pub struct FactoryLoader {
    factories: HashMap<String, HandlerFactory>,
}

impl FactoryLoader {
    /// Create an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `qualified_name`.
    ///
    /// Re-registering a name replaces the previous factory; the old one is
    /// dropped.
    pub fn register<F>(&mut self, qualified_name: &str, factory: F)
    where
        F: Fn(Registry) -> anyhow::Result<Box<dyn Handler>> + Send + Sync + 'static,
    {
        let replaced = self
            .factories
            .insert(qualified_name.to_string(), Box::new(factory))
            .is_some();
        if replaced {
            warn!(handler = qualified_name, "Replaced existing handler factory");
        } else {
            info!(
                handler = qualified_name,
                total_handlers = self.factories.len(),
                "Handler factory registered"
            );
        }
    }

    /// Names of all registered factories, unordered.
    #[must_use]
    pub fn registered(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl HandlerLoader for FactoryLoader {
    fn contains(&self, location: &HandlerLocation) -> bool {
        self.factories.contains_key(&location.qualified_name())
    }

    fn load(
        &self,
        location: &HandlerLocation,
        registry: Registry,
    ) -> anyhow::Result<Box<dyn Handler>> {
        let name = location.qualified_name();
        let factory = self
            .factories
            .get(&name)
            .ok_or_else(|| anyhow::anyhow!("no handler factory registered for '{name}'"))?;
        factory(registry)
    }
}

/// Terminal failure of one dispatch.
#[derive(Debug)]
pub enum DispatchError {
    /// No loadable handler at the resolved location, or no such action on
    /// the loaded handler. Final and user-visible, analogous to HTTP 404.
    NotFound,
    /// The loader found a unit but failed to produce a usable handler.
    /// Fatal to the request and distinct from [`DispatchError::NotFound`].
    LoadFailure(anyhow::Error),
    /// The invoked action itself failed.
    HandlerFailed(anyhow::Error),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NotFound => write!(f, "not found"),
            DispatchError::LoadFailure(err) => {
                write!(f, "handler failed to load: {err}")
            }
            DispatchError::HandlerFailed(err) => {
                write!(f, "action failed: {err}")
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::NotFound => None,
            DispatchError::LoadFailure(err) | DispatchError::HandlerFailed(err) => {
                Some(err.as_ref())
            }
        }
    }
}

/// Orchestrates one request: route extraction, resolution, handler loading
/// and action invocation.
///
/// The dispatcher is stateless across requests apart from its loader; the
/// per-request [`Registry`] is created here and never outlives the dispatch.
pub struct Dispatcher {
    loader: Box<dyn HandlerLoader>,
}

impl Dispatcher {
    /// Create a dispatcher over the given loader.
    #[must_use]
    pub fn new(loader: Box<dyn HandlerLoader>) -> Self {
        Self { loader }
    }

    /// Handle one request end to end.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NotFound`] when the resolved handler is not loadable
    /// or the resolved action does not exist on it;
    /// [`DispatchError::LoadFailure`] when instantiation fails;
    /// [`DispatchError::HandlerFailed`] when the invoked action errors.
    /// All are terminal for the request - nothing is retried.
    pub fn dispatch(
        &self,
        source: &dyn RequestSource,
        ns: &dyn Namespace,
    ) -> Result<(), DispatchError> {
        let route = source.route();
        let resolution = resolve(&route, ns);

        debug!(
            route = %route,
            handler = %resolution.location,
            action = %resolution.action_name,
            "Handler lookup"
        );

        if !self.loader.contains(&resolution.location) {
            error!(
                route = %route,
                handler = %resolution.location,
                "Handler not found"
            );
            return Err(DispatchError::NotFound);
        }

        let mut registry = Registry::new();
        // Freshly created registry: seeding cannot collide.
        let _ = registry.set(KEY_ROUTE, Value::String(route.clone()));
        let payload = source.payload();
        if !payload.is_null() {
            let _ = registry.set(KEY_PAYLOAD, payload);
        }

        let mut handler = self
            .loader
            .load(&resolution.location, registry)
            .map_err(DispatchError::LoadFailure)?;

        if !handler.has_action(&resolution.action_name) {
            error!(
                handler = %resolution.location,
                action = %resolution.action_name,
                "Action not found on handler"
            );
            return Err(DispatchError::NotFound);
        }

        info!(
            handler = %resolution.location,
            action = %resolution.action_name,
            args = ?resolution.args,
            "Invoking action"
        );

        handler
            .invoke(&resolution.action_name, &resolution.args)
            .map_err(DispatchError::HandlerFailed)?;

        debug!(route = %route, "Dispatch complete");
        Ok(())
    }
}
