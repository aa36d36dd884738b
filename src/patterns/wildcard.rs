/// Anchored glob match where `*` matches any (possibly empty) run of
/// characters and everything else compares exactly.
pub fn matches(namespace: &str, rule: &str) -> bool {
    if !rule.contains('*') {
        return namespace == rule;
    }

    let mut segments = rule.split('*');

    // split() always yields at least one item, and we know there's a `*`,
    // so there's always a distinct first and last segment
    let first = segments.next().unwrap_or_default();
    let last = segments.next_back().unwrap_or_default();

    let mut remaining = match namespace.strip_prefix(first) {
        Some(remaining) => remaining,
        None => return false,
    };

    for segment in segments {
        if segment.is_empty() {
            continue;
        }

        match remaining.find(segment) {
            Some(start) => remaining = &remaining[start + segment.len()..],
            None => return false,
        }
    }

    remaining.ends_with(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rule_accepts(rule: &str, namespace: &str, should_accept: bool) {
        let did_accept = matches(namespace, rule);
        if did_accept != should_accept {
            let verb = if should_accept { "accept" } else { "reject" };
            assert!(
                false,
                "Expected {:?} to {} {:?} but it did not",
                rule, verb, namespace
            );
        }
    }

    #[test]
    fn literal_test() {
        assert_rule_accepts("test:12345", "test:12345", true);
        assert_rule_accepts("test:12345", "test:67890", false);

        // Not a substring match
        assert_rule_accepts("test", "test:12345", false);
        assert_rule_accepts("12345", "test:12345", false);
    }

    #[test]
    fn full_wildcard_test() {
        assert_rule_accepts("*", "", true);
        assert_rule_accepts("*", "anything:at:all", true);
        assert_rule_accepts("**", "still anything", true);
    }

    #[test]
    fn trailing_wildcard_test() {
        assert_rule_accepts("abc*", "abc", true);
        assert_rule_accepts("abc*", "abcd", true);
        assert_rule_accepts("abc*", "abc:def", true);
        assert_rule_accepts("abc*", "xabc", false);
    }

    #[test]
    fn leading_wildcard_test() {
        assert_rule_accepts("*:worker", "pool:worker", true);
        assert_rule_accepts("*:worker", ":worker", true);
        assert_rule_accepts("*:worker", "pool:worker:1", false);
    }

    #[test]
    fn inner_wildcards_test() {
        assert_rule_accepts("a*b*c", "abc", true);
        assert_rule_accepts("a*b*c", "a:x:b:y:c", true);
        assert_rule_accepts("a*b*c", "a:c:b", false);
        assert_rule_accepts("a*b*c", "abcd", false);

        // The suffix must not overlap with the prefix
        assert_rule_accepts("ab*ba", "aba", false);
        assert_rule_accepts("ab*ba", "abba", true);
    }

    #[test]
    fn case_sensitivity_test() {
        assert_rule_accepts("Foo:*", "foo:bar", false);
        assert_rule_accepts("foo:*", "foo:Bar", true);
    }

    #[test]
    fn no_regex_metacharacters_test() {
        assert_rule_accepts("a.b", "a.b", true);
        assert_rule_accepts("a.b", "axb", false);
        assert_rule_accepts("[x]*", "[x]:y", true);
    }
}
