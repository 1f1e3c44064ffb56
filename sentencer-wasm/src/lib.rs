//! WASM bindings for sentencer — powers the interactive web demo.

use wasm_bindgen::prelude::*;

use sentencer::core::engine::{EngineOptions, Sentencer};
use sentencer::schema::list::{self, ListSpec};

// ---------------------------------------------------------------------------
// Embedded starter data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const STARTER_LISTS: &str = include_str!("../../data/starter_lists.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct ListInfo {
    key: String,
    size: usize,
    articlize: Option<String>,
    pluralize: Option<String>,
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A sentence engine preloaded with the starter word lists.
#[wasm_bindgen]
pub struct WasmSentencer {
    inner: Sentencer,
}

#[wasm_bindgen]
impl WasmSentencer {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<WasmSentencer, JsValue> {
        let starter = list::parse_ron(data::STARTER_LISTS).map_err(js_err)?;
        let mut inner = Sentencer::with_seed(seed);
        inner.configure(EngineOptions::new().lists(starter));
        Ok(WasmSentencer { inner })
    }

    /// Resolve a template into a sentence.
    pub fn make(&mut self, template: &str) -> String {
        self.inner.make(template)
    }

    /// Register extra word lists, supplied as a JSON array of
    /// `{key, values, articlize?, pluralize?}` objects.
    pub fn add_lists(&mut self, json: &str) -> Result<(), JsValue> {
        let specs: Vec<ListSpec> = serde_json::from_str(json).map_err(js_err)?;
        self.inner.configure(EngineOptions::new().lists(specs));
        Ok(())
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.inner.registry().has(name)
    }

    pub fn action_count(&self) -> usize {
        self.inner.registry().len()
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.inner.set_seed(seed);
    }

    /// Describe the embedded starter lists as JSON.
    pub fn starter_lists(&self) -> Result<String, JsValue> {
        let specs = list::parse_ron(data::STARTER_LISTS).map_err(js_err)?;
        let info: Vec<ListInfo> = specs
            .into_iter()
            .map(|s| ListInfo {
                key: s.key,
                size: s.values.len(),
                articlize: s.articlize,
                pluralize: s.pluralize,
            })
            .collect();
        serde_json::to_string(&info).map_err(js_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_starter_lists_parse() {
        let specs = list::parse_ron(data::STARTER_LISTS).unwrap();
        assert!(!specs.is_empty());
    }

    #[test]
    fn make_resolves_starter_actions() {
        let mut engine = WasmSentencer::new(3).unwrap();
        let sentence = engine.make("I met {{ an_animal }} near the {{ place }}.");
        assert!(!sentence.contains("{{"), "unresolved token in: {}", sentence);
    }

    #[test]
    fn add_lists_accepts_json() {
        let mut engine = WasmSentencer::new(3).unwrap();
        engine
            .add_lists(r#"[{"key": "mood", "values": ["wistful", "smug"]}]"#)
            .unwrap();
        assert!(engine.has_action("mood"));
        let word = engine.make("{{mood}}");
        assert!(word == "wistful" || word == "smug");
    }
}
