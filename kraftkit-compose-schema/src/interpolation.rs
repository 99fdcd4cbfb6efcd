//! Options handed to the interpolation stage of the loader.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Looks up the value of a variable referenced as `${NAME}`.
pub type LookupValue = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Interpolation settings. Only the variable lookup is exposed here; the
/// substitution rules belong to the interpolation engine.
#[derive(Clone, Default)]
pub struct Options {
    pub lookup_value: Option<LookupValue>,
}

impl Options {
    /// Resolve variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            lookup_value: Some(Arc::new(|name: &str| std::env::var(name).ok())),
        }
    }

    /// Resolve variables from a fixed mapping.
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self {
            lookup_value: Some(Arc::new(move |name: &str| values.get(name).cloned())),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<String> {
        self.lookup_value.as_ref().and_then(|lookup| lookup(name))
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("lookup_value", &self.lookup_value.is_some())
            .finish()
    }
}
