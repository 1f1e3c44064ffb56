/// Action registry — named generator functions behind the placeholders.

use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

use crate::core::coerce::Value;

/// A registered generator.
///
/// Receives the registry itself (so derived actions can delegate to other
/// actions by name), the RNG of the current `make` call, and the coerced
/// argument sequence. Returning `None` means "no value" — the caller
/// substitutes an empty string and moves on.
pub type Action = Box<dyn Fn(&ActionRegistry, &mut StdRng, &[Value]) -> Option<Value>>;

/// Mapping from action name to generator. One registry per engine instance;
/// mutated only by explicit merges.
#[derive(Default)]
pub struct ActionRegistry {
    actions: FxHashMap<String, Action>,
}

impl ActionRegistry {
    pub fn new() -> ActionRegistry {
        ActionRegistry {
            actions: FxHashMap::default(),
        }
    }

    /// Insert a single action, overwriting any existing binding of the name.
    pub fn register(&mut self, name: impl Into<String>, action: Action) {
        self.actions.insert(name.into(), action);
    }

    /// Shallow union: every entry overwrites any existing binding of the same
    /// name; names not mentioned are untouched. Last merge wins.
    pub fn merge(&mut self, new_actions: impl IntoIterator<Item = (String, Action)>) {
        self.actions.extend(new_actions);
    }

    pub fn has(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Invoke an action by name. An unknown name yields `None`, the same
    /// signal as an action that produced no value.
    pub fn invoke(&self, name: &str, rng: &mut StdRng, args: &[Value]) -> Option<Value> {
        let action = self.actions.get(name)?;
        action(self, rng, args)
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("len", &self.actions.len())
            .finish()
    }
}
