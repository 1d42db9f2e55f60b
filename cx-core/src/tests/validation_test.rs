use assertables::*;

use super::*;
use crate::validation::Validator;

#[rstest]
#[case::none_set(false, false)]
#[case::both_set(true, true)]
fn test_exactly_one_fails(#[case] a: bool, #[case] b: bool) {
    let err = Validator::new()
        .exactly_one("spec.sli", &[("requestBased", a), ("windowBased", b)])
        .finish()
        .unwrap_err();
    assert_eq!(err.messages, vec!["spec.sli: exactly one of requestBased or windowBased must be set"]);
}

#[rstest]
fn test_exactly_one_ok() {
    assert_ok!(Validator::new().exactly_one("spec", &[("a", false), ("b", true), ("c", false)]).finish());
}

#[rstest]
fn test_exactly_one_lists_all_names() {
    let err = Validator::new()
        .exactly_one("", &[("a", false), ("b", false), ("c", false)])
        .finish()
        .unwrap_err();
    assert_eq!(err.to_string(), "exactly one of a, b or c must be set");
}

#[rstest]
fn test_at_most_one() {
    let mut v = Validator::new();
    v.at_most_one("spec", &[("parentFolderId", false), ("parentFolderRef", false)]);
    assert_ok!(v.finish());

    v.at_most_one("spec", &[("parentFolderId", true), ("parentFolderRef", true)]);
    assert_err!(v.finish());
}

#[rstest]
fn test_messages_are_collected_and_joined() {
    let mut inner = Validator::new();
    inner.check("spec.inner", false, "is wrong");

    let err = Validator::new()
        .check("spec.name", false, "must not be empty")
        .check("spec.ok", true, "unused")
        .merge(inner.finish())
        .finish()
        .unwrap_err();

    assert_eq!(err.messages.len(), 2);
    assert_eq!(err.to_string(), "spec.name: must not be empty; spec.inner: is wrong");
}

#[rstest]
fn test_finish_resets_validator() {
    let mut v = Validator::new();
    v.check("spec", false, "bad");
    assert_err!(v.finish());
    assert_ok!(v.finish());
}
