//! Inline formatting for post bodies.
//!
//! A post body is split into lines, and each line into segments: plain text,
//! hashtags and URLs. URLs are located first over the whole line; hashtags are
//! only searched for in the text between URLs, so a `#` inside a URL never
//! becomes its own hashtag.
//!
//! ```text
//! "check #rust at https://x.com#top"
//!  └ Text("check ") Hashtag("rust") Text(" at ") Link("https://x.com#top")
//! ```

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Hashtag links point here, followed by the tag without its `#`.
pub const HASHTAG_BASE_URL: &str = "https://www.linkedin.com/feed/hashtag/";

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("hashtag pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Text(String),
    /// `tag` excludes the leading `#`.
    Hashtag { tag: String, href: String },
    Link { url: String },
}

/// One formatted piece of a line, with its byte range in that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub span: Range<usize>,
}

impl Segment {
    fn text(text: &str, span: Range<usize>) -> Self {
        Self {
            kind: SegmentKind::Text(text.to_string()),
            span,
        }
    }

    fn hashtag(tag: &str, span: Range<usize>) -> Self {
        Self {
            kind: SegmentKind::Hashtag {
                tag: tag.to_string(),
                href: format!("{HASHTAG_BASE_URL}{tag}"),
            },
            span,
        }
    }

    fn link(url: &str, span: Range<usize>) -> Self {
        Self {
            kind: SegmentKind::Link {
                url: url.to_string(),
            },
            span,
        }
    }

    /// The text shown for this segment. Hashtags keep their `#`.
    pub fn display_text(&self) -> String {
        match &self.kind {
            SegmentKind::Text(text) => text.clone(),
            SegmentKind::Hashtag { tag, .. } => format!("#{tag}"),
            SegmentKind::Link { url } => url.clone(),
        }
    }

    /// Destination for clickable segments, `None` for plain text.
    pub fn href(&self) -> Option<&str> {
        match &self.kind {
            SegmentKind::Text(_) => None,
            SegmentKind::Hashtag { href, .. } => Some(href),
            SegmentKind::Link { url } => Some(url),
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.href().is_some()
    }
}

/// The formatted rendering of a single line. An empty line has no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedLine {
    pub segments: Vec<Segment>,
}

impl FormattedLine {
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::display_text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Format a post body into lines of segments.
///
/// Absent or empty input yields no lines. Never fails: anything that does not
/// fully match a hashtag or URL stays plain text.
pub fn format_content(text: Option<&str>) -> Vec<FormattedLine> {
    match text {
        Some(text) if !text.is_empty() => text.split('\n').map(format_line).collect(),
        _ => Vec::new(),
    }
}

/// Format a single line. `line` should not contain `\n`.
pub fn format_line(line: &str) -> FormattedLine {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for url in URL_RE.find_iter(line) {
        push_gap(&mut segments, line, cursor..url.start());
        segments.push(Segment::link(url.as_str(), url.range()));
        cursor = url.end();
    }
    push_gap(&mut segments, line, cursor..line.len());

    FormattedLine { segments }
}

/// Rebuild the original text from formatted lines.
pub fn reassemble(lines: &[FormattedLine]) -> String {
    lines
        .iter()
        .map(FormattedLine::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split the non-URL text in `gap` into hashtags and plain text.
fn push_gap(segments: &mut Vec<Segment>, line: &str, gap: Range<usize>) {
    let offset = gap.start;
    let text = &line[gap];
    let mut cursor = 0;

    for caps in HASHTAG_RE.captures_iter(text) {
        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(segments, text, cursor..whole.start(), offset);
        segments.push(Segment::hashtag(
            tag.as_str(),
            offset + whole.start()..offset + whole.end(),
        ));
        cursor = whole.end();
    }
    push_text(segments, text, cursor..text.len(), offset);
}

fn push_text(segments: &mut Vec<Segment>, text: &str, range: Range<usize>, offset: usize) {
    if range.is_empty() {
        return;
    }
    let span = offset + range.start..offset + range.end;
    segments.push(Segment::text(&text[range], span));
}
