//! Web search providers
//!
//! Retrieval of supplementary context about an AI system. Providers are
//! injectable behind [`SearchProvider`] so the classification pipeline
//! never depends on a concrete backend; [`NullSearch`] serves offline or
//! disabled-search operation.

use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::error::{AiActError, Result};

const DUCKDUCKGO_ENDPOINT: &str = "https://html.duckduckgo.com/html/?q=";

/// One search result. Missing fields default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

/// A source of search results for a free-text query.
pub trait SearchProvider {
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}

/// Provider that returns no results. Used when search is disabled.
pub struct NullSearch;

impl SearchProvider for NullSearch {
    fn search(&self, _query: &str, _max_results: usize) -> Result<Vec<SearchHit>> {
        Ok(Vec::new())
    }
}

/// DuckDuckGo HTML endpoint, fetched through curl.
pub struct DuckDuckGo;

impl SearchProvider for DuckDuckGo {
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        let url = format!("{}{}", DUCKDUCKGO_ENDPOINT, encode_query(query));
        let body = fetch_url(&url)?;

        let mut hits = parse_results(&body);
        hits.truncate(max_results);
        Ok(hits)
    }
}

/// Check if curl is available
pub fn check_curl_available() -> bool {
    Command::new("curl")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Fetch URL content via curl
fn fetch_url(url: &str) -> Result<String> {
    let output = Command::new("curl")
        .args(["-sL", "-A", "Mozilla/5.0", url])
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AiActError::CurlNotFound
            } else {
                AiActError::Io(e)
            }
        })?;

    if !output.status.success() {
        return Err(AiActError::SearchFailed {
            message: format!("Failed to fetch: {}", url),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Percent-encode a query for use in a URL query string
fn encode_query(query: &str) -> String {
    let mut encoded = String::with_capacity(query.len());
    for byte in query.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Parse result blocks out of the DuckDuckGo HTML page.
///
/// Each result carries an anchor `class="result__a"` with the link and
/// title, followed by a `result__snippet` element. Hand parsing on marker
/// strings; anything malformed is skipped.
fn parse_results(body: &str) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    let mut rest = body;

    while let Some(anchor_pos) = rest.find("class=\"result__a\"") {
        let block = &rest[anchor_pos..];

        let Some(hit) = parse_result_block(block) else {
            rest = &block[17..];
            continue;
        };

        // Advance past this anchor before scanning for the next one.
        rest = &block[17..];
        if !hit.url.is_empty() {
            hits.push(hit);
        }
    }

    hits
}

fn parse_result_block(block: &str) -> Option<SearchHit> {
    let href_start = block.find("href=\"")? + 6;
    let href_end = block[href_start..].find('"')? + href_start;
    let url = resolve_redirect(&block[href_start..href_end]);

    let title_start = block[href_end..].find('>')? + href_end + 1;
    let title_end = block[title_start..].find("</a>")? + title_start;
    let title = clean_fragment(&block[title_start..title_end]);

    // The snippet element sits after the title anchor; stop at the next
    // result so one block cannot steal its neighbour's snippet.
    let snippet = match block[title_end..].find("result__snippet") {
        Some(pos) => {
            let snippet_region = &block[title_end + pos..];
            let next_result = block[title_end + 4..]
                .find("class=\"result__a\"")
                .map(|p| p + title_end + 4);
            if next_result.is_some_and(|n| title_end + pos > n) {
                String::new()
            } else {
                let start = snippet_region.find('>')? + 1;
                let end = snippet_region[start..]
                    .find("</a>")
                    .or_else(|| snippet_region[start..].find("</div>"))?
                    + start;
                clean_fragment(&snippet_region[start..end])
            }
        }
        None => String::new(),
    };

    Some(SearchHit { title, snippet, url })
}

/// DuckDuckGo links through a redirect (`/l/?uddg=<encoded target>`);
/// recover the target URL. Plain links pass through, protocol-relative
/// ones get https.
fn resolve_redirect(href: &str) -> String {
    if let Some(pos) = href.find("uddg=") {
        let encoded = &href[pos + 5..];
        let encoded = encoded.split('&').next().unwrap_or(encoded);
        return percent_decode(encoded);
    }
    if let Some(stripped) = href.strip_prefix("//") {
        return format!("https://{}", stripped);
    }
    href.to_string()
}

fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            if let Ok(byte) = u8::from_str_radix(&text[i + 1..i + 3], 16) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        if bytes[i] == b'+' {
            decoded.push(b' ');
        } else {
            decoded.push(bytes[i]);
        }
        i += 1;
    }
    String::from_utf8_lossy(&decoded).to_string()
}

/// Strip tags and decode the handful of entities DuckDuckGo emits.
fn clean_fragment(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    let text = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <div class="result">
          <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fmbux&amp;rut=abc">MBUX <b>Assistant</b> overview</a>
          <a class="result__snippet" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fmbux">Voice assistant for <b>drivers</b> &amp; passengers</a>
        </div>
        <div class="result">
          <a rel="nofollow" class="result__a" href="https://example.org/press">Press release</a>
          <a class="result__snippet" href="https://example.org/press">Launch announcement</a>
        </div>
    "#;

    #[test]
    fn test_parse_results_extracts_all_blocks() {
        let hits = parse_results(SAMPLE);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://example.com/mbux");
        assert_eq!(hits[0].title, "MBUX Assistant overview");
        assert_eq!(hits[0].snippet, "Voice assistant for drivers & passengers");
        assert_eq!(hits[1].url, "https://example.org/press");
        assert_eq!(hits[1].title, "Press release");
        assert_eq!(hits[1].snippet, "Launch announcement");
    }

    #[test]
    fn test_parse_results_empty_page() {
        assert!(parse_results("<html><body>No results.</body></html>").is_empty());
    }

    #[test]
    fn test_resolve_redirect_decodes_uddg() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fa%20page&rut=xyz";
        assert_eq!(resolve_redirect(href), "https://example.com/a page");
    }

    #[test]
    fn test_resolve_redirect_plain_url() {
        assert_eq!(
            resolve_redirect("https://example.com/x"),
            "https://example.com/x"
        );
        assert_eq!(
            resolve_redirect("//example.com/x"),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("Acme Nimbus AI system"), "Acme+Nimbus+AI+system");
        assert_eq!(encode_query("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_clean_fragment_strips_tags_and_entities() {
        assert_eq!(
            clean_fragment("  Fast &amp; <b>safe</b> routing "),
            "Fast & safe routing"
        );
    }

    #[test]
    fn test_null_search_returns_nothing() {
        let hits = NullSearch.search("anything", 3).unwrap();
        assert!(hits.is_empty());
    }
}
