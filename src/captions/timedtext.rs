//! Parsing of YouTube timedtext caption documents.
//!
//! A track is served as XML of the form
//! `<transcript><text start="0.5" dur="2.1">words</text>...</transcript>`.
//! Caption bodies are escaped twice by YouTube. The outer `&amp;` layer and
//! the escaped markup (`&lt;font ...&gt;`) are removed here. Entities that
//! belong to the spoken text are left for transcript normalization.

use super::CaptionFragment;
use regex::Regex;
use std::sync::LazyLock;

static TEXT_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<text\b([^>]*?)(?:/>|>(.*?)</text>)").expect("Invalid regex")
});

static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_][\w.-]*)\s*=\s*"([^"]*)""#).expect("Invalid regex"));

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[^>]+(?:>|$)").expect("Invalid regex"));

/// Entities decoded before markup is stripped, so escaped tags are caught.
const MARKUP_ENTITIES: [(&str, &str); 3] = [("&lt;", "<"), ("&gt;", ">"), ("&quot;", "\"")];

fn strip_markup(body: &str) -> String {
    let mut text = body.replace("&amp;", "&");
    for (entity, decoded) in MARKUP_ENTITIES {
        text = text.replace(entity, decoded);
    }
    let text = MARKUP_TAG.replace_all(&text, "");
    text.replace("&nbsp;", " ")
}

/// Parse every `<text>` element of a timedtext document, in document order.
///
/// Missing or malformed `start`/`dur` attributes read as `0.0`.
pub fn parse_timedtext(xml: &str) -> Vec<CaptionFragment> {
    TEXT_ELEMENT
        .captures_iter(xml)
        .map(|caps| {
            let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let body = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

            let mut start = 0.0;
            let mut duration = 0.0;
            for attr in ATTRIBUTE.captures_iter(attrs) {
                let value = attr[2].parse::<f64>().unwrap_or(0.0);
                match &attr[1] {
                    "start" => start = value,
                    "dur" => duration = value,
                    _ => {}
                }
            }

            CaptionFragment::new(strip_markup(body), start, duration)
        })
        .collect()
}
