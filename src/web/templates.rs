use askama::Template;

/// SPA shell; the frontend bundle takes over routing once loaded.
#[derive(Template)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub title: &'static str,
}
