use serde::Deserialize;
use serde::Serialize;

/// The naming configuration of a composition run.
///
/// A schema records the configuration of the first run composed into it; later runs must use
/// an equal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CompositionConfig {
    /// Prefix applied to every fusion type and directive name, as `<prefix>_<name>`.
    ///
    /// An empty prefix is the same as no prefix.
    ///
    /// Defaults to no prefix.
    pub prefix: Option<String>,

    /// Whether the root `@fusion` directive is prefixed as well. Has no effect without a prefix.
    ///
    /// Defaults to false.
    pub prefix_self: bool,
}

impl CompositionConfig {
    pub fn new(prefix: Option<&str>, prefix_self: bool) -> Self {
        Self {
            prefix: prefix.map(str::to_owned),
            prefix_self,
        }
        .normalized()
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self::new(Some(prefix), false)
    }

    /// Drops an empty prefix, and the prefix-self flag when there is no prefix.
    pub(crate) fn normalized(mut self) -> Self {
        if self.prefix.as_deref().is_some_and(str::is_empty) {
            self.prefix = None;
        }
        if self.prefix.is_none() {
            self.prefix_self = false;
        }
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }
}
