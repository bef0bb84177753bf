//! Server-side HTML views.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Names ending in `.html` get HTML auto-escaping.

use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("index.html", include_str!("../templates/index.html")),
    (
        "change_password.html",
        include_str!("../templates/change_password.html"),
    ),
    ("abilities.html", include_str!("../templates/abilities.html")),
    ("experiences.html", include_str!("../templates/experiences.html")),
    (
        "edit_experience.html",
        include_str!("../templates/edit_experience.html"),
    ),
    ("contact_info.html", include_str!("../templates/contact_info.html")),
    ("inbox.html", include_str!("../templates/inbox.html")),
    (
        "single_message.html",
        include_str!("../templates/single_message.html"),
    ),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compile every view. Fails on the first syntax error.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(context)
    }
}
