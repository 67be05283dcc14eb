//! Pipeline extensions.
//!
//! An extension bundles parser and renderer registrations under a name so the
//! registry can install it at most once.

use crate::registry::PipelineRegistry;

/// A named set of registrations applied to a [`PipelineRegistry`].
///
/// Install through [`PipelineRegistry::install`], which skips extensions whose
/// name is already present. Calling [`install`](Self::install) directly
/// bypasses that check.
pub trait PipelineExtension {
    /// Unique extension name.
    fn name(&self) -> &'static str;

    /// Apply this extension's registrations.
    fn install(&self, registry: &mut PipelineRegistry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting<'a> {
        installs: &'a Cell<u32>,
    }

    impl PipelineExtension for Counting<'_> {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn install(&self, _registry: &mut PipelineRegistry) {
            self.installs.set(self.installs.get() + 1);
        }
    }

    #[test]
    fn test_registry_installs_extension_once() {
        let installs = Cell::new(0);
        let extension = Counting {
            installs: &installs,
        };
        let mut registry = PipelineRegistry::new();

        assert!(registry.install(&extension));
        assert!(!registry.install(&extension));

        assert_eq!(installs.get(), 1);
        assert!(registry.is_installed("counting"));
        assert_eq!(registry.extensions(), vec!["counting"]);
    }
}
