use file_search_protocol::SearchMatch;
use std::borrow::Cow;

/// Substring matcher over comparison keys.
///
/// Case-insensitive matching lowercases both sides before comparing; the stored line is never
/// modified.
#[derive(Debug, Clone)]
pub struct KeywordMatcher<'a> {
    needle: Cow<'a, str>,
    case_sensitive: bool,
}

impl<'a> KeywordMatcher<'a> {
    pub fn new(keyword: &'a str, case_sensitive: bool) -> Self {
        Self {
            needle: comparison_key(keyword, case_sensitive),
            case_sensitive,
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        comparison_key(line, self.case_sensitive).contains(self.needle.as_ref())
    }
}

fn comparison_key(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Scan `content` line by line (split on `\n`) and collect matching lines in order.
///
/// The empty element that follows a terminal line feed (or makes up an empty file) is never
/// reported, even for an empty keyword.
pub fn scan_lines(content: &str, keyword: &str, case_sensitive: bool) -> Vec<SearchMatch> {
    let matcher = KeywordMatcher::new(keyword, case_sensitive);

    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| matcher.is_match(line))
        .map(|(idx, line)| SearchMatch {
            line_number: idx + 1,
            content: line.to_string(),
        })
        .collect()
}
