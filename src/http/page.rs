//! Static front page.

use askama::Template;

/// Body sent when rendering the page template fails.
pub const TEMPLATE_RENDER_FAILED: &str = "Failed to execute template";

/// The browser view of `/api/debug-info`. Compiled in from
/// `templates/index.html`, so a missing or malformed template fails the
/// build rather than a request. It takes no variables.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;
