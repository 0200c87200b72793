//! Markdown rendering

use pulldown_cmark::{html, Event, Options, Parser};
use serde::{Deserialize, Serialize};

/// Renderer configuration
///
/// Constructed once and passed in wherever rendering happens; there is no
/// process-wide renderer state. The defaults match what the blog content
/// was written against: GFM extensions on, soft line breaks rendered as
/// hard breaks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Tables, strikethrough and task lists
    pub gfm: bool,
    /// Render a single newline between lines as a `<br>`
    pub hard_breaks: bool,
    pub footnotes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            hard_breaks: true,
            footnotes: false,
        }
    }
}

/// Markdown renderer
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
    hard_breaks: bool,
}

impl MarkdownRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        let mut options = Options::empty();
        if opts.gfm {
            options |= Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM;
        }
        if opts.footnotes {
            options |= Options::ENABLE_FOOTNOTES;
        }
        Self {
            options,
            hard_breaks: opts.hard_breaks,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();

        if self.hard_breaks {
            let events = parser.map(|event| match event {
                Event::SoftBreak => Event::HardBreak,
                other => other,
            });
            html::push_html(&mut html_output, events);
        } else {
            html::push_html(&mut html_output, parser);
        }

        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
