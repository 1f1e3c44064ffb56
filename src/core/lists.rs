/// List-derived action builder.
///
/// Installs up to three registry entries per word list: direct selection,
/// article-prefixed selection, and pluralized selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::core::coerce::Value;
use crate::core::registry::ActionRegistry;
use crate::english;

/// Register the actions derived from one list spec.
///
/// The direct action draws uniformly from `values`. The articlize action
/// invokes the *registered* `key` action through the registry (so a later
/// override of `key` is honored) and prefixes the indefinite article. The
/// pluralize action draws independently from its own copy of `values`.
/// An empty `values` list makes every derived action produce no value, which
/// resolves to an empty string.
pub fn install(registry: &mut ActionRegistry, spec: &crate::schema::list::ListSpec) {
    let values = spec.values.clone();
    registry.register(
        spec.key.clone(),
        Box::new(move |_, rng, _| choose(&values, rng)),
    );

    if let Some(name) = &spec.articlize {
        let key = spec.key.clone();
        registry.register(
            name.clone(),
            Box::new(move |registry, rng, _| {
                let picked = registry.invoke(&key, rng, &[])?;
                Some(Value::text(english::articlize(&picked.to_string())))
            }),
        );
    }

    if let Some(name) = &spec.pluralize {
        let values = spec.values.clone();
        registry.register(
            name.clone(),
            Box::new(move |_, rng, _| {
                let picked = choose(&values, rng)?;
                match picked {
                    Value::Text(word) => Some(Value::text(english::pluralize(&word))),
                    other => Some(other),
                }
            }),
        );
    }
}

fn choose(values: &[String], rng: &mut StdRng) -> Option<Value> {
    values.choose(rng).map(|v| Value::text(v.clone()))
}
