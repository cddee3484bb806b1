use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

const TUTOR_TEMPLATE_NAME: &str = "tutor_system.txt";

macro_rules! prompt_file {
    ($lang:literal, $name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/lang/", $lang, "/", $name))
    };
}

// `.txt` templates are rendered without auto-escaping, so caller text lands verbatim.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(TUTOR_TEMPLATE_NAME, prompt_file!("en", "tutor_system.txt"))
        .expect("invalid tutor system template");
    env
});

#[derive(Serialize)]
struct TutorContext<'a> {
    user_level: &'a str,
    context: &'a str,
}

/// Renders the tutor persona with the student's level and teaching context.
pub fn tutor_system_prompt(user_level: &str, context: &str) -> Result<String, minijinja::Error> {
    TEMPLATES
        .get_template(TUTOR_TEMPLATE_NAME)?
        .render(TutorContext {
            user_level,
            context,
        })
}
