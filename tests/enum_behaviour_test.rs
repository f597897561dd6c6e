use option_enum::{CompareMode, EnumError, MultiSelectEnum, SingleSelectEnum, Vocabulary};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_declared_names_resolve_and_others_do_not() {
    let vocabulary = Vocabulary::parse("alpha beta=10 Gamma").unwrap();
    for name in ["alpha", "BETA", "gamma"] {
        assert!(vocabulary.lookup(name).is_ok(), "{name} should resolve");
    }
    assert_eq!(vocabulary.ids(), vec![0, 10, 2]);
    assert!(matches!(
        vocabulary.lookup("delta"),
        Err(EnumError::UnknownOption { .. })
    ));
}

#[test]
fn test_deprecated_default_then_deprecate() {
    let mut choice = SingleSelectEnum::parse("one too three four", Some("too")).unwrap();

    let err = choice.deprecate("too", "two").unwrap_err();
    assert!(err.to_string().contains("is deprecated, consider using"));

    choice.assign("one").unwrap();
    let err = choice.assign("too").unwrap_err();
    assert!(err.to_string().contains("is deprecated, consider using"));
}

#[test]
fn test_error_contract_messages() {
    let mut error_check = MultiSelectEnum::parse("one two three", None).unwrap();
    let err = error_check.assign("four").unwrap_err();
    assert!(err.to_string().contains("Invalid option"), "{err}");

    let err = MultiSelectEnum::parse("one= 1 two three", None).unwrap_err();
    assert!(
        err.to_string()
            .contains("You cannot place whitespace around the '=' character"),
        "{err}"
    );
}

#[test]
fn test_compare_by_name_and_by_id_diverge() {
    let a = SingleSelectEnum::parse("a=1 b=2", Some("a")).unwrap();
    let c = SingleSelectEnum::parse("a=2 b=1", Some("a")).unwrap();

    assert!(a.compare_current(&c, CompareMode::ByName));
    assert!(!a.compare_current(&c, CompareMode::ById));
    assert!(!a.compare_current(&c, CompareMode::ByBoth));
}

#[test]
fn test_iteration_reproduces_canonical_selection() {
    let mut choices = MultiSelectEnum::parse("red green blue", None).unwrap();
    choices.assign("Blue red").unwrap();
    choices.push_back("blue").unwrap();

    let iterated: Vec<&str> = choices.iter().collect();
    assert_eq!(iterated, vec!["BLUE", "RED", "BLUE"]);

    // Indexed access keeps the caller's spelling, iteration does not.
    let indexed: Vec<&str> = (0..choices.len()).map(|i| choices.get(i).unwrap()).collect();
    assert_eq!(indexed, vec!["Blue", "red", "blue"]);
}

#[test]
fn test_shared_vocabulary_across_threads() {
    let vocabulary = Vocabulary::shared("low medium high").unwrap();
    vocabulary.deprecate("medium", "high").unwrap();

    let handles: Vec<_> = ["low", "high", "medium"]
        .into_iter()
        .map(|value| {
            let vocabulary = Arc::clone(&vocabulary);
            thread::spawn(move || SingleSelectEnum::new(vocabulary, Some(value)).is_ok())
        })
        .collect();

    let accepted: HashSet<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(accepted, HashSet::from([true, false]));
}
