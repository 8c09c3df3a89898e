//! Proptest generators for property-based testing.

use proptest::prelude::*;

use vdxf_core::{Identifier, MAX_SUBNAME_LENGTH};

/// Generate a random Identifier, possibly null.
pub fn identifier() -> impl Strategy<Value = Identifier> {
    any::<[u8; 20]>().prop_map(Identifier::from_bytes)
}

/// Generate a random non-null Identifier.
pub fn non_null_identifier() -> impl Strategy<Value = Identifier> {
    identifier().prop_filter("non-null", |id| !id.is_null())
}

/// Generate a valid sub-name: mixed case, internal spaces, no edge spaces.
pub fn sub_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]([A-Za-z0-9_ -]{0,14}[A-Za-z0-9_-])?".prop_map(String::from)
}

/// Generate a valid dotted name of one to four sub-names.
pub fn dotted_name() -> impl Strategy<Value = String> {
    prop::collection::vec(sub_name(), 1..=4).prop_map(|parts| parts.join("."))
}

/// Generate a dotted name with no sub-name equal to `root`, ignoring case.
pub fn dotted_name_not_under(root: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(sub_name(), 1..=4)
        .prop_filter("contains root chain", move |parts| {
            parts.iter().all(|p| !p.eq_ignore_ascii_case(root))
        })
        .prop_map(|parts| parts.join("."))
}

/// Generate a sub-name longer than the truncation limit.
pub fn long_sub_name() -> impl Strategy<Value = String> {
    let min = MAX_SUBNAME_LENGTH;
    let max = MAX_SUBNAME_LENGTH * 3;
    prop::collection::vec(prop::char::range('a', 'z'), min..max)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Generate a name containing one always-rejected character.
pub fn name_with_invalid_char() -> impl Strategy<Value = String> {
    (
        sub_name(),
        prop::sample::select(vec!['\\', '/', ':', '*', '?', '"', '<', '>', '|']),
        sub_name(),
    )
        .prop_map(|(a, c, b)| format!("{a}{c}{b}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdxf_core::{
        get_data_key, get_id, get_id_with_parent, parse_sub_names, trim_spaces, RootChain,
    };

    proptest! {
        #[test]
        fn test_dotted_names_parse(name in dotted_name()) {
            let root = RootChain::default();
            let parsed = parse_sub_names(&name, &root, true, false).unwrap();
            prop_assert_eq!(parsed.components().join("."), name);
        }

        #[test]
        fn test_invalid_chars_rejected(name in name_with_invalid_char()) {
            let root = RootChain::default();
            prop_assert!(parse_sub_names(&name, &root, false, false).is_err());
            prop_assert!(get_id(&name, &root).is_err());
        }

        #[test]
        fn test_long_sub_names_truncate(leaf in long_sub_name(), parent in sub_name()) {
            let root = RootChain::default();
            let parsed = parse_sub_names(&format!("{leaf}.{parent}"), &root, false, false).unwrap();
            prop_assert_eq!(parsed.leaf().len(), MAX_SUBNAME_LENGTH - 1);
            prop_assert_eq!(parsed.leaf(), &leaf[..MAX_SUBNAME_LENGTH - 1]);
        }

        #[test]
        fn test_case_invariance(name in dotted_name()) {
            let root = RootChain::default();
            prop_assert_eq!(
                get_id(&name, &root).unwrap(),
                get_id(&name.to_ascii_lowercase(), &root).unwrap()
            );
            prop_assert_eq!(
                get_id(&name, &root).unwrap(),
                get_id(&name.to_ascii_uppercase(), &root).unwrap()
            );
        }

        #[test]
        fn test_parent_scoping(leaf in sub_name(), parent in dotted_name_not_under("VRSC")) {
            let root = RootChain::default();
            let parent_id = get_id(&parent, &root).unwrap();
            let (scoped, _) = get_id_with_parent(&leaf, parent_id, &root).unwrap();
            prop_assert_eq!(scoped, get_id(&format!("{leaf}.{parent}"), &root).unwrap());
        }

        #[test]
        fn test_data_key_never_identity(key in dotted_name(), ns in non_null_identifier()) {
            let root = RootChain::default();
            let (identity, _) = get_id_with_parent(&key, ns, &root).unwrap();
            prop_assert_ne!(get_data_key(&key, ns, &root).unwrap(), identity);
        }

        #[test]
        fn test_trim_idempotent(s in ".{0,32}") {
            prop_assert_eq!(trim_spaces(trim_spaces(&s)), trim_spaces(&s));
        }
    }
}
