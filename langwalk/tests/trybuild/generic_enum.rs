//! Generic enums with every field attribute form.

use langwalk::{Analyzer, Context, Localize, NoOpTranslator};

#[derive(Localize)]
enum Payload<'a, T> {
    Items {
        #[localize(mod = "line")]
        items: Vec<T>,
        #[localize(skip)]
        source: &'a str,
    },
    Tagged(#[localize(block)] T, #[localize = "mod=template"] String),
    Nothing,
}

#[derive(Localize)]
struct Unit;

fn main() {
    let analyzer = Analyzer::new(NoOpTranslator);
    let cx = Context::new();
    let _payload = analyzer.analyze(
        &cx,
        Payload::Items {
            items: vec![String::from("x")],
            source: "static",
        },
    );
    let _unit = analyzer.analyze(&cx, Unit);
    let _tagged: Payload<'_, String> = Payload::Tagged(String::new(), String::new());
    let _nothing: Payload<'_, u8> = Payload::Nothing;
}
