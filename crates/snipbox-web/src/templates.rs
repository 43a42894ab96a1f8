//! Startup-built template cache.
//!
//! Page templates live on disk under `<ui_dir>/html`:
//!
//! ```text
//! ui/html/base.html          shared layout, defines the named blocks
//! ui/html/partials/*.html    fragments included by the layout
//! ui/html/pages/*.html       one file per page, extends the layout
//! ```
//!
//! [`TemplateCache::build`] composes one [`tera::Tera`] set per page in
//! a fixed order (base, then partials, then the page) so a page can
//! override any block the layout defines, and compiles everything up
//! front. A missing or unparsable file is a construction error; the
//! process is expected to abort rather than serve with a partial cache.
//! The built cache is immutable and read concurrently by every request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tera::{Context, Tera, Value};

use snipbox_store::Snippet;

/// Errors raised while building or using the template cache.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The page directory exists but holds no `.html` files (or does
    /// not exist at all).
    #[error("no page templates found in {0}")]
    NoPages(PathBuf),

    /// A template directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template parse or render failure.
    #[error("template error: {0}")]
    Tera(#[from] tera::Error),

    /// A handler asked for a page the cache was not built with.
    #[error("unknown page template: {0}")]
    UnknownPage(String),
}

/// Per-request view-model handed to the templates.
///
/// Constructed fresh for every request; pages read whatever subset
/// they need.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData {
    /// Current year, shown in the footer.
    pub current_year: i32,
    /// The snippet for detail pages.
    pub snippet: Option<Snippet>,
    /// The snippet list for the home page.
    pub snippets: Vec<Snippet>,
}

impl TemplateData {
    /// An empty view-model stamped with the current year.
    pub fn new() -> Self {
        Self {
            current_year: Utc::now().year(),
            snippet: None,
            snippets: Vec::new(),
        }
    }
}

impl Default for TemplateData {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiled page templates, keyed by page file name
/// (e.g. `home.html`).
#[derive(Debug)]
pub struct TemplateCache {
    pages: HashMap<String, Tera>,
}

impl TemplateCache {
    /// Discover the page templates under `ui_dir` and compile one
    /// template set per page.
    ///
    /// Fails if the page directory is empty, a file is unreadable, or
    /// any template has a syntax error. Page enumeration is sorted, so
    /// repeated builds over an unchanged directory produce the same
    /// key set.
    pub fn build(ui_dir: &Path) -> Result<Self, TemplateError> {
        let html_dir = ui_dir.join("html");
        let pages_dir = html_dir.join("pages");

        let page_files = html_files(&pages_dir)?;
        if page_files.is_empty() {
            return Err(TemplateError::NoPages(pages_dir));
        }

        let base = html_dir.join("base.html");
        let partials = html_files(&html_dir.join("partials"))?;

        let mut pages = HashMap::new();
        for page in &page_files {
            let name = file_name(page);

            // Helpers must be registered before the files are added so
            // they resolve during compilation.
            let mut set = Tera::default();
            set.register_filter("human_date", human_date);

            let mut files: Vec<(PathBuf, Option<String>)> =
                vec![(base.clone(), Some("base.html".to_string()))];
            for partial in &partials {
                files.push((partial.clone(), Some(file_name(partial))));
            }
            files.push((page.clone(), Some(name.clone())));

            set.add_template_files(files)?;
            pages.insert(name, set);
        }

        tracing::info!(pages = pages.len(), ui_dir = %ui_dir.display(), "template cache built");

        Ok(Self { pages })
    }

    /// Render `page` with `data`, producing the full HTML document.
    ///
    /// Rendering happens entirely in memory; nothing reaches the
    /// response until the whole page has rendered.
    pub fn render(&self, page: &str, data: &TemplateData) -> Result<String, TemplateError> {
        let set = self
            .pages
            .get(page)
            .ok_or_else(|| TemplateError::UnknownPage(page.to_string()))?;

        let context = Context::from_serialize(data)?;
        Ok(set.render(page, &context)?)
    }

    /// Number of compiled pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when no pages were compiled. Unreachable after a
    /// successful [`TemplateCache::build`].
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page names, sorted.
    pub fn page_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// List the `.html` files directly under `dir`, sorted by path.
///
/// A missing directory yields an empty list; only the pages directory
/// promotes that to an error (in [`TemplateCache::build`]).
fn html_files(dir: &Path) -> Result<Vec<PathBuf>, TemplateError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|source| TemplateError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
            files.push(path);
        }
    }

    files.sort_unstable();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Tera filter: format a timestamp as a human-readable date, e.g.
/// "02 Jan 2026 at 15:04".
fn human_date(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let date: DateTime<Utc> = serde_json::from_value(value.clone())
        .map_err(|e| tera::Error::msg(format!("human_date expects a timestamp: {e}")))?;

    Ok(Value::String(
        date.format("%d %b %Y at %H:%M").to_string(),
    ))
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Minimal on-disk UI tree for tests.

    use std::fs;
    use std::path::Path;

    const BASE: &str = r#"<!doctype html>
<html lang="en">
<head><title>{% block title %}Snipbox{% endblock %}</title></head>
<body>
{% include "nav.html" %}
<main>{% block main %}{% endblock %}</main>
<footer>&copy; {{ current_year }}</footer>
</body>
</html>
"#;

    const NAV: &str = r#"<nav><a href="/">Home</a></nav>
"#;

    const HOME: &str = r#"{% extends "base.html" %}
{% block title %}Home - Snipbox{% endblock %}
{% block main %}
{% if snippets | length > 0 %}
<ul>
{% for s in snippets %}
<li><a href="/snippet/view?id={{ s.id }}">{{ s.title }}</a> {{ s.created | human_date }}</li>
{% endfor %}
</ul>
{% else %}
<p>Nothing to see here yet.</p>
{% endif %}
{% endblock %}
"#;

    const VIEW: &str = r#"{% extends "base.html" %}
{% block title %}Snippet #{{ snippet.id }}{% endblock %}
{% block main %}
<h2>{{ snippet.title }}</h2>
<pre>{{ snippet.content }}</pre>
<time>{{ snippet.created | human_date }}</time>
{% endblock %}
"#;

    /// Write the fixture UI tree (templates plus one static asset)
    /// under `dir`.
    pub(crate) fn write_ui(dir: &Path) {
        let html = dir.join("html");
        fs::create_dir_all(html.join("partials")).unwrap();
        fs::create_dir_all(html.join("pages")).unwrap();
        fs::create_dir_all(dir.join("static/css")).unwrap();

        fs::write(html.join("base.html"), BASE).unwrap();
        fs::write(html.join("partials/nav.html"), NAV).unwrap();
        fs::write(html.join("pages/home.html"), HOME).unwrap();
        fs::write(html.join("pages/view.html"), VIEW).unwrap();
        fs::write(dir.join("static/css/main.css"), "body{margin:0}\n").unwrap();
    }
}
