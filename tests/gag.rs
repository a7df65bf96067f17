//! Integration tests for the GAg predictor.

use gag::*;
use gag::sim::evaluate;
use Outcome::*;

fn key(s: &str) -> BitVector {
    bits::parse(s).unwrap()
}

/// A periodic branch is learned exactly once the history covers the period.
#[test]
fn learns_periodic_pattern() {
    let mut p = GAgPredictor::new(4, 2).unwrap();
    let mut generator = TraceGenerator::new(0, 0.0);
    generator.add_branch(0x1000, &[N, N, N, T]);
    let records = generator.generate(64);

    let stat = evaluate(&mut p, &records).unwrap();

    // One miss while the history is still all zeros, then two while the
    // counter for "1000" climbs to "10".
    assert_eq!(stat.global_miss(), 3);
    assert_eq!(bits::to_string(p.pht().get(&key("1000")).unwrap()), "11");
    assert_eq!(bits::to_string(p.pht().get(&key("0001")).unwrap()), "00");
}

/// Prediction ignores the branch address entirely.
#[test]
fn address_is_ignored() {
    let mut a = GAgPredictor::new(3, 2).unwrap();
    let mut b = GAgPredictor::new(3, 2).unwrap();
    let outcomes = [T, T, N, T, N, N, T, T, T, N];
    for (i, outcome) in outcomes.into_iter().enumerate() {
        assert_eq!(a.predict(0x1000).unwrap(), b.predict(0x2000 + i).unwrap());
        a.update(0x1000, outcome).unwrap();
        b.update(0x2000 + i, outcome).unwrap();
    }
    assert_eq!(a.monitor(), b.monitor());
}

/// Independent instances never share state.
#[test]
fn instances_are_independent() {
    let mut a = GAgPredictor::new(2, 2).unwrap();
    let b = GAgPredictor::new(2, 2).unwrap();
    let before = b.monitor();
    for _ in 0..4 {
        a.predict(0).unwrap();
        a.update(0, T).unwrap();
    }
    assert_eq!(b.monitor(), before);
    assert_ne!(a.monitor(), before);
}

/// The first outcome is recorded at the least-significant end of history.
#[test]
fn history_convention() {
    let mut p = GAgPredictor::new(4, 2).unwrap();
    p.predict(0).unwrap();
    p.update(0, T).unwrap();
    assert_eq!(p.history().read(), &key("0001"));
    p.predict(0).unwrap();
    p.update(0, N).unwrap();
    assert_eq!(p.history().read(), &key("0010"));
}

/// Counters in the table stay within their width no matter the input.
#[test]
fn counters_keep_width() {
    let mut p = GAgPredictor::new(3, 3).unwrap();
    let mut generator = TraceGenerator::new(7, 0.25);
    generator.add_random_branch(0x10, 5).add_random_branch(0x20, 9);
    evaluate(&mut p, &generator.generate(2000)).unwrap();

    assert_eq!(p.pht().len(), 8);
    for (k, v) in p.pht().iter() {
        assert_eq!(k.len(), 3);
        assert_eq!(v.len(), 3);
    }
}

/// Works through the trait object as well.
#[test]
fn trait_object() {
    let mut p: Box<dyn BranchPredictor> = Box::new(GAgPredictor::new(2, 2).unwrap());
    assert_eq!(p.name(), "GAgPredictor");
    assert_eq!(p.predict(0).unwrap(), N);
    p.update(0, T).unwrap();
    assert!(p.monitor().starts_with("GAg predictor snapshot:\n"));
}

/// Repeated taken outcomes on a settled history saturate its counter.
#[test]
fn counter_saturates_through_update() {
    let mut p = GAgPredictor::new(2, 3).unwrap();
    for _ in 0..2 {
        p.predict(0).unwrap();
        p.update(0, T).unwrap();
    }
    assert_eq!(p.history().read(), &key("11"));

    for n in 1..=12 {
        p.predict(0).unwrap();
        p.update(0, T).unwrap();
        let expected = bits::from_usize(n.min(7), 3);
        assert_eq!(p.pht().get(&key("11")).unwrap(), &expected);
        assert_eq!(p.history().read(), &key("11"));
    }
    assert_eq!(p.predict(0).unwrap(), T);

    // A not-taken outcome steps the counter down and leaves "11"
    p.update(0, N).unwrap();
    assert_eq!(p.pht().get(&key("11")).unwrap(), &key("110"));
    assert_eq!(p.history().read(), &key("10"));
}
