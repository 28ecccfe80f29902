use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static HEADLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*+\s+(?:(?P<keyword>TODO|DONE)\s+)?(?:<(?P<date>\d{4}-\d{2}-\d{2})(?:\s+\w+)?>\s*)?(?P<title>.*?)\s*$")
        .unwrap()
});

static PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*:(?P<key>[A-Z_]+):\s+(?P<value>.+)$").unwrap()
});

pub struct OrgParser;

/// A parsed org heading with its property drawer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHeading {
    pub keyword: Option<String>,
    /// Active timestamp leading the title, e.g. `<2024-06-18 Tue>`.
    pub date: Option<NaiveDate>,
    pub title: String,
    pub properties: Vec<(String, String)>,
}

impl OrgParser {
    /// Parse an org file string into a list of headings.
    pub fn parse(input: &str) -> Vec<ParsedHeading> {
        let lines: Vec<&str> = input.lines().collect();
        let mut headings = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let Some(captures) = HEADLINE_RE.captures(lines[i]) else {
                i += 1;
                continue;
            };

            let keyword = captures.name("keyword").map(|m| m.as_str().to_string());
            let date = captures
                .name("date")
                .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok());
            let title = captures["title"].to_string();

            i += 1;

            // Properties drawer
            let mut properties = Vec::new();
            if i < lines.len() && lines[i].trim() == ":PROPERTIES:" {
                i += 1;
                while i < lines.len() && lines[i].trim() != ":END:" {
                    if let Some(caps) = PROPERTY_RE.captures(lines[i]) {
                        properties.push((caps["key"].to_string(), caps["value"].trim().to_string()));
                    }
                    i += 1;
                }
                if i < lines.len() {
                    i += 1; // skip :END:
                }
            }

            // Body text is not kept
            while i < lines.len() && !HEADLINE_RE.is_match(lines[i]) {
                i += 1;
            }

            headings.push(ParsedHeading {
                keyword,
                date,
                title,
                properties,
            });
        }

        headings
    }

    /// Extract a property value by key.
    pub fn get_property<'a>(props: &'a [(String, String)], key: &str) -> Option<&'a str> {
        props
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
