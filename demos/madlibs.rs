/// Mad-libs demo — starter lists plus a couple of custom actions.
///
/// Run with: cargo run --example madlibs

use rand::Rng;
use sentencer::core::coerce::Value;
use sentencer::core::engine::Sentencer;

fn main() {
    let mut engine = Sentencer::builder()
        .seed(rand::random())
        .lists_from_ron("data/starter_lists.ron")
        .action("exclaim", |args| {
            let word = args.first()?.to_string();
            Some(Value::text(format!("{}!", word.to_uppercase())))
        })
        .action_with_rng("count", |rng, args| {
            let max = args.first().and_then(Value::as_number)? as i64;
            Some(Value::number(rng.gen_range(2..=max.max(2)) as f64))
        })
        .build()
        .expect("starter lists should load");

    let templates = [
        "{{ exclaim(behold) }} {{ an_adjective }} {{ animal }} has moved into the {{ place }}.",
        "It keeps {{ count(9) }} {{ color }} {{ vegetables }} by the door.",
        "The neighbors say it is {{ an_animal }}, but it insists it is {{ an_adjective }} {{ animal }}.",
        "Every evening it counts its {{ animals }} — all {{ count(12) }} of them.",
    ];

    for template in templates {
        println!("{}", engine.make(template));
    }
}
