//! Tabbed code-sample blocks for markdown.
//!
//! Implements the `:::tabs` extension used by the API reference site:
//!
//! ````markdown
//! :::tabs
//! == curl
//! ```bash
//! curl http://localhost:8001/api/products
//! ```
//! == PHP
//! ```php
//! $client->get('/api/products');
//! ```
//! :::
//! ````
//!
//! # Architecture
//!
//! Processing happens in a single build-time pass:
//!
//! 1. [`TabsScanner`] walks the raw markdown line by line (fence-aware) and
//!    recognizes `:::tabs ... :::` regions.
//! 2. The extractor converts a region into an ordered list of [`TabEntry`]
//!    values (one per `== label` segment with a fenced code block).
//! 3. [`TabBlockRenderer`] emits a self-contained HTML fragment for the
//!    entries. Syntax highlighting is delegated through the [`FenceRenderer`]
//!    trait; a failing delegate falls back to escaped plain text so a page
//!    build never aborts.
//!
//! The emitted fragment passes through pulldown-cmark unchanged as an HTML
//! block; [`render_page`] runs the full pipeline for one markdown page.
//!
//! A region that yields zero entries is not a tab block: its lines pass
//! through untouched and ordinary markdown handling applies. This mirrors the
//! site's historical behavior; such regions are surfaced via
//! [`TabsScanner::warnings`] so authoring tooling can flag them.

mod escape;
mod extract;
mod fence;
mod highlight;
mod language;
mod render;
mod scanner;

pub use escape::escape_html;
pub use extract::{TabEntry, extract_tab_entries};
pub use highlight::{FenceError, FenceRenderer, HtmlFence};
pub use language::language_for_label;
pub use render::TabBlockRenderer;
pub use scanner::{TabsScanner, parser_options, render_page};
