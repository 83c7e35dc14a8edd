// tests/rewriting.rs
use lsystem_raster::{Configuration, Error, LSystem, RewriteEngine, RuleTable};

fn fibonacci() -> RewriteEngine {
    RewriteEngine::new("A", RuleTable::new([('A', "AB"), ('B', "A")]))
}

#[test]
fn test_fibonacci_word_generations() {
    let engine = fibonacci();
    let mut state = engine.initial_state();
    assert_eq!(state.current(), "A");
    assert_eq!(state.generation(), 0);

    let expected = ["AB", "ABA", "ABAAB", "ABAABABA"];
    for (i, word) in expected.iter().enumerate() {
        engine.advance(&mut state, 1);
        assert_eq!(state.current(), *word, "generation {}", i + 1);
        assert_eq!(state.generation(), i + 1);
    }
}

#[test]
fn test_rewriting_is_length_compositional() {
    let engine = RewriteEngine::new("F-F-F-F", RuleTable::new([('F', "F-F+F+FF-F-F+F")]));

    let mut whole = engine.initial_state();
    engine.advance(&mut whole, 3);

    for split in 0..=3 {
        let mut parts = engine.initial_state();
        engine.advance(&mut parts, split);
        engine.advance(&mut parts, 3 - split);
        assert_eq!(parts, whole, "split at {split}");
    }
}

#[test]
fn test_symbols_without_rules_are_invariant() {
    let engine = RewriteEngine::new("X", RuleTable::default());
    let mut state = engine.initial_state();
    for _ in 0..5 {
        engine.advance(&mut state, 1);
        assert_eq!(state.current(), "X");
    }
    assert_eq!(state.generation(), 5);

    let rules = RuleTable::new([('F', "FF")]);
    assert_eq!(rules.lookup('+'), "+");
    assert_eq!(rules.lookup('F'), "FF");
    assert_eq!(rules.get('+'), None);
}

#[test]
fn test_rewrite_pass_is_simultaneous() {
    // A -> B and B -> A swap in one pass rather than cascading.
    let engine = RewriteEngine::new("AAB", RuleTable::new([('A', "B"), ('B', "A")]));
    assert_eq!(engine.rewrite("AAB"), "BBA");

    let erase = RewriteEngine::new("XFX", RuleTable::new([('X', "")]));
    assert_eq!(erase.rewrite("XFX"), "F");
}

#[test]
fn test_advance_to_never_rewinds() {
    let engine = fibonacci();
    let mut state = engine.initial_state();

    engine.advance_to(&mut state, 3).unwrap();
    assert_eq!(state.current(), "ABAAB");

    // Same generation is a no-op.
    engine.advance_to(&mut state, 3).unwrap();
    assert_eq!(state.generation(), 3);

    let err = engine.advance_to(&mut state, 1).unwrap_err();
    assert_eq!(err, Error::Ordering { current: 3, target: 1 });
    assert_eq!(state.current(), "ABAAB", "failed call must not touch the state");

    engine.reset(&mut state);
    assert_eq!(state, engine.initial_state());
    engine.advance_to(&mut state, 1).unwrap();
    assert_eq!(state.current(), "AB");
}

#[test]
fn test_facade_reports_generation_context() {
    let mut system = LSystem::new(Configuration::new("A", [('A', "AB"), ('B', "A")]));
    system.step_to(4).unwrap();

    let err = system.render_generation(2).unwrap_err();
    assert_eq!(err.root(), &Error::Ordering { current: 4, target: 2 });
    assert!(matches!(err, Error::AtGeneration { generation: 2, .. }));

    system.reset();
    assert_eq!(system.generation(), 0);
    assert_eq!(system.symbols(), "A");
}
