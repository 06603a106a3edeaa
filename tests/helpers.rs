use std::cell::Cell;
use std::collections::{BTreeMap, HashSet, VecDeque};

use ironfold::testing::*;
use ironfold::*;

#[test]
fn transduce_initializes_from_the_reducing_function() -> anyhow::Result<()> {
    let mut recorder = Recorder::new();
    let out = transduce(&map(|n: i32| n * 2), &mut recorder, [1, 2])?;

    assert_eq!(out, vec![2, 4]);
    assert_eq!(
        recorder.calls(),
        &[Call::Init, Call::Step(2), Call::Step(4), Call::Complete]
    );
    Ok(())
}

#[test]
fn transduce_rejects_a_bare_step_function() {
    let pulled = Cell::new(0);
    let source = (0..5).inspect(|_| pulled.set(pulled.get() + 1));
    let rf = completing(|acc: i32, n: i32, _: &mut TerminationSignal| acc + n);

    let result = transduce(&identity(), rf, source);

    assert_eq!(result, Err(TransduceError::UnsupportedInit));
    assert_eq!(pulled.get(), 0);
}

#[test]
fn unsupported_init_error_message() {
    let message = TransduceError::UnsupportedInit.to_string();
    assert!(message.contains("initial"), "unexpected message: {message}");
}

#[test]
fn transduce_with_skips_init() {
    let mut recorder = Recorder::new();
    let xf = filter(|c: &char| c.is_alphabetic());
    let out = transduce_with(&xf, &mut recorder, vec!['>'], "a1b2".chars());

    assert_eq!(out, vec!['>', 'a', 'b']);
    assert!(!recorder.calls().contains(&Call::Init));
    assert_eq!(recorder.completions(), 1);
}

#[test]
fn transduce_step_promotes_a_closure() {
    let xf = take_while(|n: &u32| *n < 5);
    let product = transduce_step(&xf, |acc: u32, n, _| acc * (n + 1), 1, 0..);
    assert_eq!(product, 120);
}

#[test]
fn step_closure_may_request_termination() {
    let out = transduce_step(
        &map(|n: i32| n * n),
        |mut acc: Vec<i32>, n, signal| {
            acc.push(n);
            if n > 10 {
                signal.stop();
            }
            acc
        },
        Vec::new(),
        1..,
    );
    assert_eq!(out, vec![1, 4, 9, 16]);
}

#[test]
fn into_appends_to_existing_contents() {
    let out = into(&map(|n: u8| n + 1), vec![0], [1, 2]);
    assert_eq!(out, vec![0, 2, 3]);

    let queue = into(&identity(), VecDeque::from([7]), [8, 9]);
    assert_eq!(queue, VecDeque::from([7, 8, 9]));
}

#[test]
fn into_fills_sets_maps_and_strings() {
    let set: HashSet<_> = into(&map(|n: i32| n % 3), HashSet::new(), 0..10);
    assert_eq!(set, HashSet::from([0, 1, 2]));

    let lengths = into(
        &map(|w: &'static str| (w, w.len())),
        BTreeMap::new(),
        ["fold", "map", "fold"],
    );
    assert_eq!(lengths, BTreeMap::from([("fold", 4), ("map", 3)]));

    let text = into(&remove(|c: &char| c.is_whitespace()), String::new(), "a b\tc".chars());
    assert_eq!(text, "abc");
}

#[test]
fn append_builds_a_fresh_container() -> anyhow::Result<()> {
    let out: Vec<u32> = transduce(&take(3), Append, 10..)?;
    assert_eq!(out, vec![10, 11, 12]);
    Ok(())
}

#[test]
fn sum_and_count_fold_numbers() -> anyhow::Result<()> {
    let evens = filter(|n: &i64| n % 2 == 0);
    assert_eq!(transduce(&evens, Sum::new(), 1..=10)?, 30);
    assert_eq!(transduce(&evens, Count, 1..=10)?, 5);
    assert_eq!(transduce(&evens, Count, std::iter::empty())?, 0);
    Ok(())
}

#[test]
fn extension_methods_read_left_to_right() {
    let xf = dedupe().compose(map(|c: char| c.to_ascii_uppercase()));

    let word = "bookkeeper".chars().transduce_into(&xf, String::new());
    assert_eq!(word, "BOKEPER");

    let total = vec![1, 1, 2, 2, 3].transduce_with(&dedupe(), Sum::new(), 0);
    assert_eq!(total, 6);
}
