//! Document scanner for `:::tabs` regions.
//!
//! Walks a markdown page line by line, recognizes tab-block regions and
//! replaces each with its rendered HTML fragment. Everything else passes
//! through untouched; the fragment survives pulldown-cmark as an HTML block.

use pulldown_cmark::{Options, Parser, html};

use crate::extract::{TabEntry, extract_tab_entries};
use crate::fence::FenceTracker;
use crate::highlight::{FenceRenderer, HtmlFence};
use crate::render::TabBlockRenderer;

/// Filter applied to each extracted code sample before rendering.
///
/// Used to compose the URL normalizer (or any other text filter) into the
/// pipeline without coupling this crate to it.
pub type CodeFilter = dyn Fn(&str) -> String;

/// Build-time scanner replacing tab-block regions with rendered HTML.
///
/// A region that yields zero entries is not treated as a tab block: its lines
/// pass through unchanged and fall back to ordinary markdown handling. This
/// is a recognition failure, not an error, but it is recorded in
/// [`warnings`](Self::warnings) because it usually means a typo in the
/// author's block.
pub struct TabsScanner {
    fence_renderer: Box<dyn FenceRenderer>,
    code_filter: Option<Box<CodeFilter>>,
    warnings: Vec<String>,
    next_group_id: usize,
}

impl TabsScanner {
    /// Create a scanner using the default HTML fence renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fence_renderer: Box::new(HtmlFence),
            code_filter: None,
            warnings: Vec::new(),
            next_group_id: 0,
        }
    }

    /// Replace the highlighting delegate.
    #[must_use]
    pub fn with_fence_renderer<R: FenceRenderer + 'static>(mut self, renderer: R) -> Self {
        self.fence_renderer = Box::new(renderer);
        self
    }

    /// Set a filter applied to each code sample before rendering.
    #[must_use]
    pub fn with_code_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.code_filter = Some(Box::new(filter));
        self
    }

    /// Warnings generated during processing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Process one markdown page, replacing recognized tab blocks.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let lines: Vec<&str> = input.lines().collect();
        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        let mut tracker = FenceTracker::new();
        let mut idx = 0;

        while idx < lines.len() {
            let line = lines[idx];

            if !tracker.in_fence() && is_tabs_open(line) {
                if let Some(close) = find_region_close(&lines, idx + 1) {
                    self.emit_region(&lines, idx, close, &mut out);
                    idx = close + 1;
                    continue;
                }
                self.warnings.push(format!(
                    "line {}: unclosed :::tabs (missing closing :::), passing through",
                    idx + 1
                ));
            } else {
                tracker.classify(line);
            }

            out.push(line.to_owned());
            idx += 1;
        }

        let mut output = out.join("\n");
        if input.ends_with('\n') {
            output.push('\n');
        }
        output
    }

    /// Extract and render one region, or pass it through when it is not a
    /// tab block after all.
    fn emit_region(&mut self, lines: &[&str], open: usize, close: usize, out: &mut Vec<String>) {
        let region = lines[open + 1..close].join("\n");
        let entries = self.filtered_entries(&region);

        if entries.is_empty() {
            self.warnings.push(format!(
                "line {}: :::tabs with no code samples, passing through",
                open + 1
            ));
            out.extend(lines[open..=close].iter().map(|&l| l.to_owned()));
            return;
        }

        let group_id = self.next_group_id;
        self.next_group_id += 1;

        let fragment = TabBlockRenderer::new(self.fence_renderer.as_ref()).render(&entries, group_id);

        // Blank lines around the fragment so pulldown-cmark treats it as a
        // standalone HTML block
        out.push(String::new());
        out.push(fragment);
        out.push(String::new());
    }

    fn filtered_entries(&self, region: &str) -> Vec<TabEntry> {
        let mut entries = extract_tab_entries(region);
        if let Some(ref filter) = self.code_filter {
            for entry in &mut entries {
                entry.code = filter(&entry.code);
            }
        }
        entries
    }
}

impl Default for TabsScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a line opens a tab block.
fn is_tabs_open(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed
        .strip_prefix(":::tabs")
        .is_some_and(|rest| rest.trim().is_empty())
}

/// Find the line index of the region's closing `:::`, fence-aware.
fn find_region_close(lines: &[&str], start: usize) -> Option<usize> {
    let mut tracker = FenceTracker::new();
    for (offset, line) in lines[start..].iter().enumerate() {
        if !tracker.in_fence() && line.trim() == ":::" {
            return Some(start + offset);
        }
        tracker.classify(line);
    }
    None
}

/// Parser options matching the site's markdown dialect (GFM).
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Render one markdown page to HTML: tab blocks first, then the remaining
/// markdown through pulldown-cmark.
#[must_use]
pub fn render_page(scanner: &mut TabsScanner, markdown: &str) -> String {
    let processed = scanner.process(markdown);
    let parser = Parser::new_ext(&processed, parser_options());
    let mut out = String::with_capacity(processed.len() * 2);
    html::push_html(&mut out, parser);
    out
}
