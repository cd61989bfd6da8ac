//! Property-based tests for the grouper.
//!
//! Comments are drawn from a small vocabulary (with words that are prefixes
//! of each other) so generated histories share prefixes and branch often.

use proptest::prelude::*;

use super::*;

fn arb_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["alpha", "alp", "beta", "be", "gamma", "delta"])
}

fn arb_comment() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 1..5).prop_map(|words| words.join(" "))
}

fn arb_history() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_comment(), 1..12)
}

/// `line` continues past `prefix` on a token boundary (or equals it).
fn extends_on_token_boundary(line: &str, prefix: &str) -> bool {
    line == prefix || line.starts_with(&format!("{prefix} "))
}

proptest! {
    #[test]
    fn learned_comments_reassemble(history in arb_history()) {
        let mut g = CommonPrefixGrouper::new();
        g.learn_all(&history);
        for comment in &history {
            let groups = g.groups_of(comment);
            prop_assert!(groups.iter().all(|gr| gr.kind == GroupKind::Match));
            let joined = groups
                .iter()
                .map(|gr| gr.content.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            prop_assert_eq!(&joined, comment);
        }
    }

    #[test]
    fn learning_twice_changes_nothing(history in arb_history(), probe in arb_comment()) {
        let mut once = CommonPrefixGrouper::new();
        once.learn_all(&history);
        let mut twice = once.clone();
        twice.learn_all(&history);

        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.groups_of(&probe), twice.groups_of(&probe));
        prop_assert_eq!(
            once.get_possible_expansions(&probe),
            twice.get_possible_expansions(&probe)
        );
    }

    #[test]
    fn expansions_lead_into_learned_comments(
        history in arb_history(),
        pick in any::<prop::sample::Index>(),
        cut in any::<prop::sample::Index>(),
    ) {
        let mut g = CommonPrefixGrouper::new();
        g.learn_all(&history);

        let comment = pick.get(&history);
        // vocabulary is ASCII, so every byte offset is a char boundary
        let partial = &comment[..cut.index(comment.len() + 1)];
        let expansions = g.get_possible_expansions(partial);
        prop_assert!(!expansions.is_empty(), "no expansion for {:?}", partial);

        for e in &expansions {
            let extended = format!("{partial}{e}");
            prop_assert!(
                history.iter().any(|line| extends_on_token_boundary(line, &extended)),
                "{:?} does not lead into any learned comment", extended
            );
        }
    }

    #[test]
    fn every_text_is_fully_covered(history in arb_history(), text in "[a-z ]{0,30}") {
        let mut g = CommonPrefixGrouper::new();
        g.learn_all(&history);
        let groups = g.groups_of(&text);
        prop_assert!(!groups.is_empty());
        if text.trim().is_empty() {
            prop_assert_eq!(groups.len(), 1);
            prop_assert_eq!(&groups[0].content, &text);
            return Ok(());
        }
        let joined = groups
            .iter()
            .map(|gr| gr.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(joined, text.split_whitespace().collect::<Vec<_>>().join(" "));
        prop_assert!(groups.iter().filter(|gr| gr.kind == GroupKind::Remainder).count() <= 1);
    }
}
