//! Name → tool constructor registry.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use std::collections::BTreeMap;
use std::fmt;

use crate::tool::{Tool, ToolId};

type Constructor = Box<dyn Fn() -> Box<dyn Tool>>;

/// Maps tool names typed on the command line to fresh tool instances.
///
/// Names match exactly; there is no abbreviation or case folding. The
/// default registry holds every [`ToolId`].
pub struct ToolFactory {
    constructors: BTreeMap<String, Constructor>,
}

impl Default for ToolFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        for id in ToolId::ALL {
            factory.register(id.as_str(), move || id.create());
        }
        factory
    }
}

impl ToolFactory {
    /// A registry with no tools.
    #[must_use]
    pub fn empty() -> Self {
        Self { constructors: BTreeMap::new() }
    }

    /// Add or replace the constructor for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn Tool> + 'static,
    {
        self.constructors.insert(name.into(), Box::new(constructor));
    }

    /// A fresh tool for `name`, or `None` if the name is not registered.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<Box<dyn Tool>> {
        self.constructors.get(name).map(|constructor| constructor())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl fmt::Debug for ToolFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolFactory").field("names", &self.constructors.keys().collect::<Vec<_>>()).finish()
    }
}
