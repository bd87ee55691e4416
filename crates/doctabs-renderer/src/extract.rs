//! Extraction of labeled code samples from a `:::tabs` region.

use crate::fence::{FenceLine, FenceTracker};

/// One labeled code sample inside a tab block.
///
/// Created at parse time, handed once to the renderer and discarded; nothing
/// is persisted. The invariant upheld by [`extract_tab_entries`] is that
/// `code` is non-empty after trimming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabEntry {
    /// Display label for the tab button, also used for highlight-language
    /// inference.
    pub label: String,
    /// Trimmed literal content of the segment's first fenced code block.
    pub code: String,
}

/// Parse state for one `== label` segment.
struct Segment {
    label: String,
    state: SegmentState,
}

enum SegmentState {
    /// No fence seen yet in this segment.
    BeforeFence,
    /// Collecting lines of the segment's first fence.
    InFence(Vec<String>),
    /// First fence captured; later content is ignored.
    Done(String),
}

impl Segment {
    fn new(label: &str) -> Self {
        let label = label.trim();
        Self {
            label: if label.is_empty() { "Tab" } else { label }.to_owned(),
            state: SegmentState::BeforeFence,
        }
    }

    fn feed(&mut self, line: &str, class: &FenceLine<'_>) {
        match (&mut self.state, class) {
            (SegmentState::BeforeFence, FenceLine::Open(_)) => {
                self.state = SegmentState::InFence(Vec::new());
            }
            (SegmentState::InFence(lines), FenceLine::Inside) => {
                lines.push(line.to_owned());
            }
            (SegmentState::InFence(lines), FenceLine::Close) => {
                self.state = SegmentState::Done(std::mem::take(lines).join("\n"));
            }
            _ => {}
        }
    }

    /// Convert the segment into a [`TabEntry`], dropping it when no fence was
    /// matched or the captured code trims to nothing.
    fn into_entry(self) -> Option<TabEntry> {
        let SegmentState::Done(content) = self.state else {
            return None;
        };
        let code = content.trim();
        if code.is_empty() {
            return None;
        }
        Some(TabEntry {
            label: self.label,
            code: code.to_owned(),
        })
    }
}

/// Extract the labeled code samples from the text between a `:::tabs` opening
/// marker and its closing `:::` line.
///
/// The region is split on lines starting with `== ` (outside fenced code);
/// the remainder of that line is the label. Each segment contributes its
/// first fenced code block, trimmed. Text before the first marker and
/// segments without a matched fence are silently skipped. An empty result
/// means the region is not a tab block at all.
#[must_use]
pub fn extract_tab_entries(region: &str) -> Vec<TabEntry> {
    let mut entries = Vec::new();
    let mut tracker = FenceTracker::new();
    let mut current: Option<Segment> = None;

    for line in region.lines() {
        if !tracker.in_fence() && line.starts_with("== ") {
            if let Some(done) = current.take() {
                entries.extend(done.into_entry());
            }
            current = Some(Segment::new(&line[3..]));
            continue;
        }

        let class = tracker.classify(line);
        if let Some(ref mut segment) = current {
            segment.feed(line, &class);
        }
    }

    if let Some(done) = current {
        entries.extend(done.into_entry());
    }

    entries
}
