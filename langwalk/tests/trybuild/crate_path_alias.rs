//! `#[localize(crate = "...")]` points generated code at a renamed dependency.

use langwalk as i18n;

#[derive(i18n::Localize)]
#[localize(crate = "i18n")]
struct Notice {
    #[localize(mod = "template")]
    title: String,
    #[localize = "-"]
    code: String,
}

fn main() {
    let analyzer = i18n::Analyzer::new(i18n::NoOpTranslator);
    let notice = analyzer.analyze(
        &i18n::Context::from(i18n::langid!("en")),
        Notice {
            title: String::from("标题"),
            code: String::from("A1"),
        },
    );
    assert_eq!(notice.title, "标题");
    assert_eq!(notice.code, "A1");
}
