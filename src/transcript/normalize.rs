//! Caption text cleanup.

/// Entities decoded in caption text, applied in this order.
const ENTITIES: [(&str, &str); 5] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&#39;", "'"),
    ("&quot;", "\""),
];

/// Clean one raw caption fragment for concatenation.
///
/// Trims leading/trailing whitespace and decodes the five entities YouTube
/// leaves in caption text. Unknown entities are kept verbatim, and internal
/// whitespace and casing are never touched.
pub fn normalize_fragment(raw: &str) -> String {
    let mut text = raw.trim().to_string();
    for (entity, literal) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, literal);
        }
    }
    text
}
