//! YAML front matter extraction
//!
//! Documents may open with a `---` fenced YAML block. Only the fields
//! the navigation resolver consumes are deserialized; everything else
//! in the block is ignored.

use serde::Deserialize;

/// Navigation-relevant metadata embedded in a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocMeta {
    /// Generic document title.
    #[serde(default)]
    pub title: Option<String>,

    /// Navigation-specific title, overrides `title` in the sidebar.
    #[serde(default, rename = "nav-title", alias = "nav_title")]
    pub nav_title: Option<String>,

    /// Explicit sort position. Authors write numbers or numeric
    /// strings; both are accepted.
    #[serde(default, rename = "nav-order", alias = "nav_order")]
    pub nav_order: Option<OrderValue>,
}

/// A `nav-order` value as it appears in front matter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OrderValue {
    Number(f64),
    Text(String),
}

impl DocMeta {
    /// Whether no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.nav_title.is_none() && self.nav_order.is_none()
    }

    /// `nav-order` coerced to a finite number, if possible.
    pub fn nav_order_number(&self) -> Option<f64> {
        match &self.nav_order {
            Some(OrderValue::Number(n)) if n.is_finite() => Some(*n),
            Some(OrderValue::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

/// Parse the front matter block of a document, if any.
///
/// Returns empty metadata when the document has no front matter or the
/// block fails to parse; the caller cannot distinguish the two, and per
/// the error model it must not need to.
pub fn parse_front_matter(source: &str) -> DocMeta {
    let Some(block) = extract_block(source) else {
        return DocMeta::default();
    };
    match serde_yaml::from_str::<DocMeta>(block) {
        Ok(meta) => meta,
        Err(e) => {
            tracing::warn!("malformed front matter ignored: {e}");
            DocMeta::default()
        }
    }
}

/// Slice out the YAML between the opening and closing `---` fences.
fn extract_block(source: &str) -> Option<&str> {
    let rest = source.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
    // Closing fence must sit on its own line.
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" || line.trim_end() == "..." {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}
