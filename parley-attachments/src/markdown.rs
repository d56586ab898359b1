//! Body rendering seam.
//!
//! The message-body engine is a collaborator; the view only needs
//! "text in, renderable markup out". The production implementation runs
//! pulldown-cmark the same way the rest of the client renders message
//! bodies.

use pulldown_cmark::{Options, Parser, html};

/// Turns attachment text into renderable markup.
pub trait BodyRenderer: Send + Sync {
    fn render(&self, text: &str) -> String;
}

/// CommonMark renderer with strikethrough and table support.
#[derive(Debug, Default)]
pub struct MarkdownRenderer;

impl BodyRenderer for MarkdownRenderer {
    fn render(&self, text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        let parser = Parser::new_ext(text, options);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}
