use super::*;

#[rstest]
#[case::exact_match(NameMatcher::exact("foo"), "foo", true)]
#[case::exact_is_not_substring(NameMatcher::exact("foo"), "foobar", false)]
#[case::pattern_match(NameMatcher::pattern("^kube-"), "kube-system", true)]
#[case::pattern_no_match(NameMatcher::pattern("^kube-"), "not-kube-system", false)]
#[case::pattern_is_unanchored(NameMatcher::pattern("dns"), "kube-dns", true)]
fn test_name_matcher(#[case] matcher: NameMatcher, #[case] value: &str, #[case] expected: bool) {
    assert_eq!(matcher.matches(value).unwrap(), expected);
}

#[rstest]
fn test_name_matcher_bad_pattern() {
    let err = NameMatcher::pattern("[unclosed").matches("anything").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<dh_core::errors::ConfigError>(),
        Some(dh_core::errors::ConfigError::BadPattern { .. })
    ));
}

#[rstest]
fn test_name_match_absent_semantics() {
    let matcher = NameMatcher::exact("foo");

    // no matcher matches anything, including a missing value
    assert!(name_match(Some("anything"), None).unwrap());
    assert!(name_match(None, None).unwrap());

    // a present matcher never matches a missing value, e.g. a namespace
    // predicate against a cluster-scoped object
    assert!(!name_match(None, Some(&matcher)).unwrap());
}

#[rstest]
fn test_kind_match_ignores_api_version(test_deployment: DynamicObject) {
    assert!(kind_match(&test_deployment, Some(&[LEGACY_DEPL_GVK.clone()])));
    assert!(!kind_match(&test_deployment, Some(&[SVC_GVK.clone()])));

    // no kind restriction (or an empty one) matches everything
    assert!(kind_match(&test_deployment, None));
    assert!(kind_match(&test_deployment, Some(&[])));
}

// Bare strings are exact matches, {"pattern": ...} objects are patterns
#[rstest]
fn test_selector_deserialize() {
    let sel: ResourceSelector = serde_json::from_value(json!({
        "action": "exclude",
        "name": "kubernetes",
        "namespace": {"pattern": "^kube-"},
    }))
    .unwrap();

    assert_eq!(sel.action, SelectorAction::Exclude);
    assert!(matches!(sel.name, Some(NameMatcher::Exact(ref n)) if n == "kubernetes"));
    assert!(matches!(sel.namespace, Some(NameMatcher::Pattern { ref pattern }) if pattern == "^kube-"));
    assert_none!(sel.kinds);
}
