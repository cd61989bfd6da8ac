//! Grouping by explicit quote characters.
//!
//! Any non-alphabetic, non-whitespace character opens a quote that is closed
//! by the next occurrence of the same character: `'a b' %c% rest`.

use crate::group::{Group, GroupKind, ItemGrouper};

#[derive(Debug, Default, Clone, Copy)]
pub struct QuotedGrouper;

impl ItemGrouper for QuotedGrouper {
    fn groups_of(&self, text: &str) -> Vec<Group> {
        let mut groups = Vec::new();
        let mut pos = 0;
        while let Some(delimiter) = text[pos..].chars().next() {
            if delimiter.is_whitespace() {
                pos += delimiter.len_utf8();
                continue;
            }
            if delimiter.is_alphabetic() {
                groups.push(Group::new(GroupKind::Remainder, &text[pos..], pos..text.len()));
                break;
            }
            let open = pos + delimiter.len_utf8();
            match text[open..].find(delimiter) {
                Some(offset) => {
                    let close = open + offset;
                    groups.push(Group::new(GroupKind::Match, &text[open..close], open..close));
                    pos = close + delimiter.len_utf8();
                }
                None => {
                    // unclosed quote: keep the delimiter
                    groups.push(Group::new(GroupKind::Remainder, &text[pos..], pos..text.len()));
                    break;
                }
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quote() {
        assert_eq!(QuotedGrouper.group_strings("'test'"), vec!["test"]);
    }

    #[test]
    fn unquoted_text_is_one_group() {
        let text = "test with complete string";
        let groups = QuotedGrouper.groups_of(text);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].content, text);
        assert_eq!(groups[0].kind, GroupKind::Remainder);
        assert_eq!(groups[0].range, 0..text.len());
    }

    #[test]
    fn mixed_delimiters() {
        let text = "'group' %sub group% &child group& rest of text";
        assert_eq!(
            QuotedGrouper.group_strings(text),
            vec!["group", "sub group", "child group", "rest of text"]
        );
    }

    #[test]
    fn ranges_exclude_delimiters() {
        let text = "  #abc# tail";
        let groups = QuotedGrouper.groups_of(text);
        assert_eq!(groups[0].range, 3..6);
        assert_eq!(&text[groups[0].range.clone()], "abc");
        assert_eq!(groups[1].kind, GroupKind::Remainder);
        assert_eq!(&text[groups[1].range.clone()], "tail");
    }

    #[test]
    fn unclosed_quote_keeps_rest() {
        assert_eq!(QuotedGrouper.group_strings("'one' \"two"), vec!["one", "\"two"]);
    }

    #[test]
    fn blank_text_has_no_groups() {
        assert!(QuotedGrouper.groups_of("   ").is_empty());
    }
}
