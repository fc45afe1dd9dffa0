//! Property-based tests for safety - ensuring the parsers never panic.

use proptest::prelude::*;

use skillcheck::core::frontmatter::{document_body, strip_comment_lines};
use skillcheck::core::links::internal_links;
use skillcheck::core::{LinkKind, extract_links, parse_frontmatter};

fn arb_document() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        Just("---".to_string()),
        Just("# comment".to_string()),
        Just("```".to_string()),
        r"[a-z]{1,8}: [a-zA-Z0-9 ]{0,16}",
        r"\[[a-z ]{0,8}\]\([a-z/.#:]{1,16}\)",
        ".{0,40}",
    ];
    prop::collection::vec(line, 0..24).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn parse_frontmatter_never_panics(content in arb_document()) {
        let _ = parse_frontmatter(&content);
    }

    #[test]
    fn parse_frontmatter_never_panics_on_noise(content in ".{0,400}") {
        let _ = parse_frontmatter(&content);
    }

    #[test]
    fn body_is_a_suffix_of_the_document(content in arb_document()) {
        prop_assert!(content.ends_with(document_body(&content)));
        prop_assert!(content.ends_with(strip_comment_lines(&content)));
    }

    #[test]
    fn internal_links_are_never_external(body in arb_document()) {
        let all = extract_links(&body);
        let internal = internal_links(&body);
        prop_assert!(internal.len() <= all.len());
        prop_assert!(internal.iter().all(|link| link.kind() == LinkKind::Internal));
        prop_assert!(
            internal
                .iter()
                .all(|link| !link.href.starts_with("http://") && !link.href.starts_with("https://"))
        );
    }

    #[test]
    fn documents_without_fence_are_rejected(content in "[^-]{0,200}") {
        prop_assert!(parse_frontmatter(&content).is_err());
    }
}
