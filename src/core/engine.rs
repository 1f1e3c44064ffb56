/// The sentence engine: configure actions, then `make` templates.
///
/// Wires together the tokenizer/classifier, argument coercion, the action
/// registry, and list-derived action installation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::coerce::{coerce, Value};
use crate::core::lists;
use crate::core::registry::{Action, ActionRegistry};
use crate::core::token::{self, ActionExpr, Placeholder};
use crate::schema::list::{ListError, ListSpec};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("word list error: {0}")]
    List(#[from] ListError),
}

/// Configuration consumed by `configure` and `derive`: custom actions plus
/// word lists to derive actions from.
#[derive(Default)]
pub struct EngineOptions {
    pub actions: FxHashMap<String, Action>,
    pub custom_lists: Vec<ListSpec>,
}

impl EngineOptions {
    pub fn new() -> EngineOptions {
        EngineOptions::default()
    }

    /// Add an action that only looks at its arguments.
    pub fn action<F>(mut self, name: impl Into<String>, f: F) -> EngineOptions
    where
        F: Fn(&[Value]) -> Option<Value> + 'static,
    {
        self.actions
            .insert(name.into(), Box::new(move |_, _, args| f(args)));
        self
    }

    /// Add an action that also draws from the per-call RNG.
    pub fn action_with_rng<F>(mut self, name: impl Into<String>, f: F) -> EngineOptions
    where
        F: Fn(&mut StdRng, &[Value]) -> Option<Value> + 'static,
    {
        self.actions
            .insert(name.into(), Box::new(move |_, rng, args| f(rng, args)));
        self
    }

    /// Add a full-signature action (registry access included).
    pub fn raw_action(mut self, name: impl Into<String>, action: Action) -> EngineOptions {
        self.actions.insert(name.into(), action);
        self
    }

    pub fn list(mut self, spec: ListSpec) -> EngineOptions {
        self.custom_lists.push(spec);
        self
    }

    pub fn lists(mut self, specs: impl IntoIterator<Item = ListSpec>) -> EngineOptions {
        self.custom_lists.extend(specs);
        self
    }
}

/// A sentence templating engine. Built empty (no registered actions) via
/// `new`/`with_seed`, or through `Sentencer::builder()`.
pub struct Sentencer {
    registry: ActionRegistry,
    seed: u64,
    generation_count: u64,
}

impl Sentencer {
    /// An empty engine with a random seed.
    pub fn new() -> Sentencer {
        Sentencer::with_seed(rand::random())
    }

    /// An empty engine with a fixed seed. Two engines configured identically
    /// and seeded identically produce identical output.
    pub fn with_seed(seed: u64) -> Sentencer {
        Sentencer {
            registry: ActionRegistry::new(),
            seed,
            generation_count: 0,
        }
    }

    pub fn builder() -> SentencerBuilder {
        SentencerBuilder {
            seed: None,
            options: EngineOptions::new(),
            list_files: Vec::new(),
        }
    }

    /// Merge new actions and install list-derived actions.
    ///
    /// Actions merge first, lists after — a list whose key collides with an
    /// action supplied in the same call wins, and later configure calls
    /// override earlier ones name by name.
    pub fn configure(&mut self, options: EngineOptions) {
        self.registry.merge(options.actions);
        for spec in &options.custom_lists {
            lists::install(&mut self.registry, spec);
        }
    }

    /// A fresh, independently configured engine. Nothing is shared with this
    /// instance — not the registry and not the RNG state.
    pub fn derive(&self, options: EngineOptions) -> Sentencer {
        let mut engine = Sentencer::new();
        engine.configure(options);
        engine
    }

    /// Reset the seed (and the per-call generation counter).
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.generation_count = 0;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Resolve every placeholder in `template` and return the finished
    /// sentence. Never fails: unresolvable bare tokens pass through verbatim,
    /// failed call forms become empty strings, and text without placeholders
    /// comes back unchanged.
    pub fn make(&mut self, template: &str) -> String {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.generation_count));
        self.generation_count += 1;

        let mut sentence = template.to_string();
        for placeholder in token::scan(template) {
            let result = self.resolve(&placeholder, &mut rng);
            // First-occurrence substitution against the evolving sentence;
            // identical tokens each get their own independently generated
            // result on their own iteration.
            sentence = sentence.replacen(&placeholder.raw, &result, 1);
        }
        sentence
    }

    fn resolve(&self, placeholder: &Placeholder, rng: &mut StdRng) -> String {
        match token::classify(&placeholder.action) {
            ActionExpr::Call { name, args_text } => {
                // Unknown call targets and empty argument lists fail
                // silently, not via passthrough.
                if !self.registry.has(&name) || args_text.is_empty() {
                    return String::new();
                }
                let args: Vec<Value> = args_text.split(',').map(coerce).collect();
                self.registry
                    .invoke(&name, rng, &args)
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            }
            ActionExpr::Bare(name) => {
                if self.registry.has(&name) {
                    self.registry
                        .invoke(&name, rng, &[])
                        .map(|v| v.to_string())
                        .unwrap_or_default()
                } else {
                    placeholder.raw.clone()
                }
            }
        }
    }
}

impl Default for Sentencer {
    fn default() -> Sentencer {
        Sentencer::new()
    }
}

/// Builder for a configured engine, with word-list loading from RON files.
pub struct SentencerBuilder {
    seed: Option<u64>,
    options: EngineOptions,
    list_files: Vec<PathBuf>,
}

impl SentencerBuilder {
    pub fn seed(mut self, seed: u64) -> SentencerBuilder {
        self.seed = Some(seed);
        self
    }

    pub fn action<F>(mut self, name: impl Into<String>, f: F) -> SentencerBuilder
    where
        F: Fn(&[Value]) -> Option<Value> + 'static,
    {
        self.options = self.options.action(name, f);
        self
    }

    pub fn action_with_rng<F>(mut self, name: impl Into<String>, f: F) -> SentencerBuilder
    where
        F: Fn(&mut StdRng, &[Value]) -> Option<Value> + 'static,
    {
        self.options = self.options.action_with_rng(name, f);
        self
    }

    pub fn raw_action(mut self, name: impl Into<String>, action: Action) -> SentencerBuilder {
        self.options = self.options.raw_action(name, action);
        self
    }

    pub fn list(mut self, spec: ListSpec) -> SentencerBuilder {
        self.options = self.options.list(spec);
        self
    }

    pub fn lists(mut self, specs: impl IntoIterator<Item = ListSpec>) -> SentencerBuilder {
        self.options = self.options.lists(specs);
        self
    }

    /// Queue a RON file of list specs. File lists install before lists given
    /// directly, so direct configuration wins on name collisions.
    pub fn lists_from_ron(mut self, path: impl Into<PathBuf>) -> SentencerBuilder {
        self.list_files.push(path.into());
        self
    }

    pub fn build(self) -> Result<Sentencer, EngineError> {
        let mut engine = match self.seed {
            Some(seed) => Sentencer::with_seed(seed),
            None => Sentencer::new(),
        };

        let mut custom_lists = Vec::new();
        for path in &self.list_files {
            custom_lists.extend(crate::schema::list::load_from_ron(path)?);
        }
        custom_lists.extend(self.options.custom_lists);

        engine.configure(EngineOptions {
            actions: self.options.actions,
            custom_lists,
        });
        Ok(engine)
    }
}
