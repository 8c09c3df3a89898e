//! Name canonicalization: splitting a raw name into sub-names and a chain context.
//!
//! A name has the form `leaf.parent.grandparent@chain`. Sub-names are ordered
//! leaf first, outermost ancestor last. The `@chain` suffix is optional; when
//! absent, the chain context is inferred from the ancestors.

use crate::chain::RootChain;
use crate::error::NameError;

/// Maximum sub-name length, counting a terminator. Sub-names are truncated to
/// `MAX_SUBNAME_LENGTH - 1` bytes before validation.
pub const MAX_SUBNAME_LENGTH: usize = 65;

/// Characters never allowed anywhere in a name.
const INVALID_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Characters additionally rejected when filtering names for display.
const DISPLAY_INVALID_CHARS: &[char] = &['\n', '\t', '\r', '\x08', '\x0b', '\x0c', '\x1b'];

/// A canonicalized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    components: Vec<String>,
    raw: Vec<Vec<u8>>,
    chain: String,
}

impl ParsedName {
    /// Sub-names, leaf first. Never empty.
    ///
    /// A sub-name truncated inside a multi-byte character ends in U+FFFD here;
    /// [`raw_components`](Self::raw_components) keeps the exact bytes.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Sub-names as the bytes that are hashed, leaf first.
    pub fn raw_components(&self) -> &[Vec<u8>] {
        &self.raw
    }

    /// The leaf sub-name in its original case.
    pub fn leaf(&self) -> &str {
        &self.components[0]
    }

    /// The chain context: explicit `@chain` text, or the one inferred from ancestors.
    pub fn chain(&self) -> &str {
        &self.chain
    }
}

/// Strip every leading `ch`.
pub fn trim_leading(name: &str, ch: char) -> &str {
    name.trim_start_matches(ch)
}

/// Strip every trailing `ch`.
pub fn trim_trailing(name: &str, ch: char) -> &str {
    name.trim_end_matches(ch)
}

/// Strip leading and trailing spaces. Other whitespace is kept.
pub fn trim_spaces(name: &str) -> &str {
    trim_trailing(trim_leading(name, ' '), ' ')
}

/// Split and validate a raw name.
///
/// With `add_root_suffix`, a name whose outermost sub-name is not the root
/// chain gets the root chain appended, and a trailing empty sub-name (`"a."`)
/// is dropped. The explicit `@chain` context is always returned as written.
///
/// # Errors
///
/// - [`NameError::InvalidCharacter`] for `\ / : * ? " < > |`, and control
///   characters when `display_filter` is set
/// - [`NameError::MalformedStructure`] for more than one `@`
/// - [`NameError::InvalidComponent`] for an empty sub-name or one with
///   leading or trailing spaces
pub fn parse_sub_names(
    name: &str,
    root: &RootChain,
    display_filter: bool,
    add_root_suffix: bool,
) -> Result<ParsedName, NameError> {
    if let Some(c) = name
        .chars()
        .find(|c| INVALID_CHARS.contains(c) || (display_filter && DISPLAY_INVALID_CHARS.contains(c)))
    {
        return Err(NameError::InvalidCharacter(c));
    }

    let mut at_split = name.split('@');
    let base = at_split.next().unwrap_or_default();
    let explicit_chain = at_split.next();
    if at_split.next().is_some() {
        return Err(NameError::MalformedStructure("more than one '@'".into()));
    }

    let mut components: Vec<String> = base.split('.').map(String::from).collect();
    let root_lower = root.lower_name();

    if add_root_suffix {
        apply_root_suffix(&mut components, &root_lower);
    }

    if components.is_empty() {
        return Err(NameError::InvalidComponent("name has no sub-names".into()));
    }

    let mut raw = Vec::with_capacity(components.len());
    for component in components.iter_mut() {
        let bytes = truncate_sub_name(component.as_bytes()).to_vec();
        if bytes.is_empty() {
            return Err(NameError::InvalidComponent("empty sub-name".into()));
        }
        if bytes.first() == Some(&b' ') || bytes.last() == Some(&b' ') {
            return Err(NameError::InvalidComponent(format!(
                "leading or trailing space in {component:?}"
            )));
        }
        if bytes.len() < component.len() {
            *component = String::from_utf8_lossy(&bytes).into_owned();
        }
        raw.push(bytes);
    }

    let chain = match explicit_chain {
        Some(chain) => chain.to_string(),
        // A lone sub-name other than the root chain refers to an external root chain.
        // The comparison is against the lowercased root name and is case-sensitive.
        None if components.len() == 1 && components[0] != root_lower => components[0].clone(),
        None => components[1..].join("."),
    };

    Ok(ParsedName {
        components,
        raw,
        chain,
    })
}

fn apply_root_suffix(components: &mut Vec<String>, root_lower: &str) {
    let last = components
        .last()
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or_default();

    if last.is_empty() {
        components.pop();
    } else if last != root_lower {
        components.push(root_lower.to_string());
    }
}

/// Cut at `MAX_SUBNAME_LENGTH - 1` bytes, even inside a multi-byte character.
fn truncate_sub_name(component: &[u8]) -> &[u8] {
    &component[..component.len().min(MAX_SUBNAME_LENGTH - 1)]
}
