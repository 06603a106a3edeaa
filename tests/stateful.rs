use ironfold::testing::*;
use ironfold::*;

#[test]
fn take_forwards_first_n() {
    let out = into(&take(5), Vec::new(), 0..20);
    assert_collections_equal(&out, &[0, 1, 2, 3, 4]);
}

#[test]
fn take_more_than_available_returns_everything() {
    let out = into(&take(50), Vec::new(), 0..3);
    assert_collections_equal(&out, &[0, 1, 2]);
}

#[test]
fn take_zero_forwards_nothing_and_stops_on_first_item() {
    let mut pulled = 0;
    let source = (0..10).inspect(|_| pulled += 1);
    let out = into(&take(0), Vec::new(), source);

    assert!(out.is_empty());
    assert_eq!(pulled, 1);
}

#[test]
fn take_stops_pulling_from_an_infinite_source() {
    let mut pulled = 0u64;
    let source = (0u64..).inspect(|_| pulled += 1);
    let out = into(&take(4), Vec::new(), source);

    assert_collections_equal(&out, &[0, 1, 2, 3]);
    // the fifth item trips the limit and is not forwarded
    assert_eq!(pulled, 5);
}

#[test]
fn take_while_stops_at_first_failure() {
    let out = into(&take_while(|n: &i32| *n < 10), Vec::new(), 0..20);
    assert_collections_equal(&out, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn take_while_does_not_resume_after_failure() {
    let out = into(&take_while(|n: &i32| *n != 3), Vec::new(), [1, 2, 3, 1, 2]);
    assert_collections_equal(&out, &[1, 2]);
}

#[test]
fn drop_suppresses_first_n() {
    let out = into(&drop(5), Vec::new(), 0..10);
    assert_collections_equal(&out, &[5, 6, 7, 8, 9]);
}

#[test]
fn drop_more_than_available_yields_nothing() {
    let out: Vec<i32> = into(&drop(50), Vec::new(), 0..10);
    assert!(out.is_empty());
}

#[test]
fn take_then_drop_partition_the_input() {
    let input: Vec<u32> = (0..17).collect();
    for n in 0..=17u64 {
        let head = into(&take(n), Vec::new(), input.iter().copied());
        let tail = into(&drop(n), Vec::new(), input.iter().copied());

        assert_eq!(head.len() as u64, n);
        assert_eq!(tail.len() as u64, 17 - n);
        let rejoined: Vec<u32> = head.into_iter().chain(tail).collect();
        assert_collections_equal(&rejoined, &input);
    }
}

#[test]
fn drop_while_forwards_from_first_failure() {
    let out = into(&drop_while(|n: &i32| *n < 10), Vec::new(), 0..20);
    assert_collections_equal(&out, &(10..20).collect::<Vec<_>>());
}

#[test]
fn drop_while_stops_consulting_predicate() {
    let out = into(&drop_while(|n: &i32| *n < 3), Vec::new(), [0, 1, 5, 0, 1, 7]);
    assert_collections_equal(&out, &[5, 0, 1, 7]);
}

#[test]
fn take_nth_forwards_every_other_item() {
    let out = into(&take_nth(2), Vec::new(), 0..10);
    assert_collections_equal(&out, &[0, 2, 4, 6, 8]);
}

#[test]
fn take_nth_one_is_pass_through() {
    let out = into(&take_nth(1), Vec::new(), 0..5);
    assert_collections_equal(&out, &[0, 1, 2, 3, 4]);
}

#[test]
fn take_nth_three() {
    let out = into(&take_nth(3), Vec::new(), 0..10);
    assert_collections_equal(&out, &[0, 3, 6, 9]);
}

#[test]
#[should_panic(expected = "stride")]
fn take_nth_rejects_zero() {
    let _ = take_nth::<u8>(0);
}

#[test]
fn dedupe_collapses_runs() {
    let input = vec![1, 2, 2, 3, 4, 5, 5, 5, 5, 5, 5, 5, 0];
    let out = into(&dedupe(), Vec::new(), input);
    assert_collections_equal(&out, &[1, 2, 3, 4, 5, 0]);
}

#[test]
fn dedupe_uses_value_equality_for_owned_items() {
    let input = ["a", "a", "b", "a"].map(String::from);
    let out = into(&dedupe(), Vec::new(), input);
    assert_collections_equal(&out, &["a", "b", "a"].map(String::from));
}

#[test]
fn dedupe_output_has_no_adjacent_duplicates_and_is_idempotent() {
    let input = TestDataBuilder::new()
        .add_repeated(7, 4)
        .add_range(1..=3)
        .add_repeated(3, 2)
        .add_value(7)
        .add_repeated(0, 5)
        .build();

    let once = into(&dedupe(), Vec::new(), input);
    assert_no_adjacent_duplicates(&once);
    assert_collections_equal(&once, &[7, 1, 2, 3, 7, 0]);

    let twice = into(&dedupe().compose(dedupe()), Vec::new(), once.clone());
    assert_collections_equal(&twice, &once);
}

#[test]
fn partition_by_groups_consecutive_keys() {
    let input = [1, 1, 1, 2, 2, 3, 4, 5, 5];
    let out = into(&partition_by(|n: &i32| *n), Vec::new(), input);

    assert_eq!(
        out,
        vec![vec![1, 1, 1], vec![2, 2], vec![3], vec![4], vec![5, 5]]
    );
    assert_groups_cover(&out, &input);
}

#[test]
fn partition_by_on_empty_input_emits_nothing() {
    let out: Vec<Vec<i32>> = into(&partition_by(|n: &i32| *n), Vec::new(), []);
    assert!(out.is_empty());
}

#[test]
fn partition_by_flushes_single_trailing_group_once() {
    let mut recorder = Recorder::new();
    let out = transduce_with(
        &partition_by(|s: &&str| s.len()),
        &mut recorder,
        Vec::new(),
        ["ab", "cd", "efg"],
    );

    assert_eq!(out, vec![vec!["ab", "cd"], vec!["efg"]]);
    assert_eq!(recorder.steps(), 2);
    assert_eq!(recorder.completions(), 1);
    assert!(recorder.completed_last());
}

#[test]
fn partition_by_does_not_buffer_item_after_downstream_stops() {
    // downstream stops after its first group; the item that closed that group
    // must not be flushed as a second group on completion
    let mut recorder = Recorder::stopping_after(1);
    let out = transduce_with(
        &partition_by(|n: &i32| *n / 10),
        &mut recorder,
        Vec::new(),
        [1, 2, 11, 12, 21],
    );

    assert_eq!(out, vec![vec![1, 2]]);
    assert_eq!(
        recorder.calls(),
        &[Call::Step(vec![1, 2]), Call::Complete]
    );
}

#[test]
fn partition_all_chunks_and_flushes_short_tail() {
    let out = into(&partition_all(3), Vec::new(), 0..8);
    assert_eq!(out, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7]]);
}

#[test]
fn partition_all_group_counts_and_sizes() {
    for m in 0..25usize {
        for n in 1..7usize {
            let input: Vec<usize> = (0..m).collect();
            let groups = into(&partition_all(n), Vec::new(), input.iter().copied());

            assert_eq!(groups.len(), m.div_ceil(n), "m={m} n={n}");
            if let Some((last, full)) = groups.split_last() {
                assert_all(full, |g| g.len() == n);
                let tail = if m % n == 0 { n } else { m % n };
                assert_eq!(last.len(), tail, "m={m} n={n}");
            }
            assert_groups_cover(&groups, &input);
        }
    }
}

#[test]
fn partition_all_flushes_even_after_take_stops_the_reduction() {
    let xf = take(5).compose(partition_all(2));
    let out = into(&xf, Vec::new(), 0..);
    assert_eq!(out, vec![vec![0, 1], vec![2, 3], vec![4]]);
}

#[test]
#[should_panic(expected = "group size")]
fn partition_all_rejects_zero() {
    let _ = partition_all::<u8>(0);
}

#[test]
fn stateful_stages_get_fresh_state_per_application() {
    let xf = take(2).compose(dedupe());
    let first = into(&xf, Vec::new(), [1, 1, 2, 3]);
    let second = into(&xf, Vec::new(), [1, 1, 2, 3]);

    assert_collections_equal(&first, &[1]);
    assert_collections_equal(&second, &first);
}

#[test]
fn glob_import_keeps_mem_drop_reachable() {
    let buffer = vec![10, 20, 30, 40];
    let out = into(&drop(3), Vec::new(), buffer.iter().copied());
    std::mem::drop(buffer);
    assert_eq!(out, vec![40]);
}
