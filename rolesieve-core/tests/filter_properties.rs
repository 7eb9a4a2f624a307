// rolesieve-core/tests/filter_properties.rs
//! Property tests for the inclusion policy and the filtering pipeline.

use proptest::prelude::*;

use rolesieve_core::{include, FilterContext, FilterEngine, MarkupEngine, MarkupGrammar, RoleSet};

const ROLES: [&str; 4] = ["qr", "qd", "tech", "soleng"];

/// Well-formed pieces a generated document is assembled from. Every piece has
/// balanced braces; markers may still appear in any order.
const FRAGMENTS: [&str; 13] = [
    "Plain text with {braces} and 50% done",
    "",
    "   ",
    r"\rolecontent{qr}{Kept for {qr} only}",
    r"  \item \rolecontent{tech, qd}{Shared bullet}",
    "\\rolecontent{soleng}{first half\nsecond half}",
    r"\begin{rolecontent}{qr,soleng}",
    r"\end{rolecontent}",
    r"Phone \exclude{hidden}",
    r"\begin{exclude}",
    r"\end{exclude}",
    r"\begin{highlights}",
    r"\end{highlights}",
];

fn engine() -> MarkupEngine {
    MarkupEngine::new(MarkupGrammar::default()).expect("default grammar compiles")
}

fn role() -> impl Strategy<Value = String> {
    prop::sample::select(ROLES.to_vec()).prop_map(str::to_string)
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS.to_vec()), 0..24)
        .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn empty_role_set_includes_every_role(role in "[a-z]{0,12}") {
        prop_assert!(include(&RoleSet::all(), &role));
    }

    #[test]
    fn non_empty_role_set_includes_exactly_its_members(
        members in prop::collection::btree_set("[a-z]{1,6}", 1..5),
        role in "[a-z]{1,6}",
    ) {
        let set: RoleSet = members.iter().cloned().collect();
        prop_assert_eq!(include(&set, &role), members.contains(&role));
    }

    #[test]
    fn parsing_a_joined_list_recovers_the_members(
        members in prop::collection::btree_set("[a-z]{1,6}", 0..5),
    ) {
        let raw = members.iter().cloned().collect::<Vec<_>>().join(" , ");
        let parsed = RoleSet::parse(&raw);
        prop_assert_eq!(parsed.iter().map(str::to_string).collect::<Vec<_>>(),
                        members.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn untagged_input_round_trips(text in "[a-zA-Z0-9 {}%.,:\t\n]{0,200}", role in role()) {
        let (out, summary) = engine().filter(&text, &FilterContext::new(role));
        prop_assert_eq!(out, text);
        prop_assert!(summary.is_noop());
    }

    #[test]
    fn filtering_is_idempotent(doc in document(), role in role()) {
        let engine = engine();
        let ctx = FilterContext::new(role);
        let (once, _) = engine.filter(&doc, &ctx);
        let (twice, _) = engine.filter(&once, &ctx);
        prop_assert_eq!(twice, once);
    }
}
