use ironfold::testing::*;
use ironfold::*;

fn sample_inputs() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![4],
        (0..10).collect(),
        vec![3, 3, 1, 8, 8, 8, -2, 5, 5, 0, 9, 9],
        (0..100).map(|n| (n * 37) % 11).collect(),
    ]
}

#[test]
fn filter_then_map_runs_in_written_order() {
    let xf = filter(|n: &u32| n % 2 != 0).compose(map(|n: u32| n.to_string()));
    let out = into(&xf, Vec::new(), 0..10);
    assert_collections_equal(&out, &["1", "3", "5", "7", "9"].map(String::from));
}

#[test]
fn compose_function_matches_method() {
    let method = filter(|n: &i64| *n > 2).compose(map(|n: i64| n * 10));
    let function = compose(filter(|n: &i64| *n > 2), map(|n: i64| n * 10));
    assert_collections_equal(
        &into(&method, Vec::new(), 0..6),
        &into(&function, Vec::new(), 0..6),
    );
}

#[test]
fn left_stage_sees_items_before_right_stage() {
    // take runs on the raw items, so it counts before filtering
    let take_first = take(4).compose(filter(|n: &i32| n % 2 == 0));
    // filter runs first, so take counts only even items
    let filter_first = filter(|n: &i32| n % 2 == 0).compose(take(4));

    assert_collections_equal(&into(&take_first, Vec::new(), 0..20), &[0, 2]);
    assert_collections_equal(&into(&filter_first, Vec::new(), 0..20), &[0, 2, 4, 6]);
}

#[test]
fn identity_is_a_left_and_right_unit() {
    for input in sample_inputs() {
        let base = into(&dedupe().compose(partition_all(2)), Vec::new(), input.clone());
        let left = into(
            &identity().compose(dedupe()).compose(partition_all(2)),
            Vec::new(),
            input.clone(),
        );
        let right = into(
            &dedupe().compose(partition_all(2)).compose(identity()),
            Vec::new(),
            input.clone(),
        );
        assert_eq!(left, base);
        assert_eq!(right, base);
    }
}

#[test]
fn identity_equals_map_identity() {
    for input in sample_inputs() {
        let a = into(&identity(), Vec::new(), input.clone());
        let b = into(&map(|n: i32| n), Vec::new(), input.clone());
        assert_collections_equal(&a, &input);
        assert_collections_equal(&b, &input);
    }
}

#[test]
fn compose_is_associative() {
    let a = || drop_while(|n: &i32| *n > 2);
    let b = || map(|n: i32| n * 3);
    let c = || partition_by(|n: &i32| n % 2 == 0);

    for input in sample_inputs() {
        let grouped_left = compose(compose(a(), b()), c());
        let grouped_right = compose(a(), compose(b(), c()));
        assert_eq!(
            into(&grouped_left, Vec::new(), input.clone()),
            into(&grouped_right, Vec::new(), input.clone()),
        );
    }
}

#[test]
fn composed_transducer_is_reusable_across_reductions() {
    let xf = map(|n: u32| n + 1)
        .compose(filter(|n: &u32| n % 3 == 0))
        .compose(take(3));

    let first = into(&xf, Vec::new(), 0..100);
    let second = into(&xf, Vec::new(), 0..100);
    let summed = transduce(&xf, Sum::new(), 0..100);

    assert_collections_equal(&first, &[3, 6, 9]);
    assert_collections_equal(&second, &first);
    assert_eq!(summed, Ok(18));
}

#[test]
fn cloned_transducer_shares_callbacks_but_not_state() {
    let xf = keep_indexed(|i: u64, c: char| (i % 2 == 1).then_some(c));
    let copy = xf.clone();
    assert_eq!(into(&xf, String::new(), "abcdef".chars()), "ace");
    assert_eq!(into(&copy, String::new(), "abcdef".chars()), "ace");
}

#[test]
fn transducer_is_usable_from_several_threads() {
    let xf = filter(|n: &u64| n % 7 == 0).compose(map(|n: u64| n * 2));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let xf = &xf;
                scope.spawn(move || into(xf, Vec::new(), (t * 100)..(t * 100 + 100)))
            })
            .collect();

        for (t, handle) in handles.into_iter().enumerate() {
            let out = handle.join().expect("worker thread panicked");
            let expected: Vec<u64> = ((t as u64 * 100)..(t as u64 * 100 + 100))
                .filter(|n| n % 7 == 0)
                .map(|n| n * 2)
                .collect();
            assert_collections_equal(&out, &expected);
        }
    });
}

#[test]
fn deep_pipeline_mixes_every_stage_kind() {
    let xf = mapcat(|n: u32| vec![n; n as usize % 3])
        .compose(dedupe())
        .compose(remove(|n: &u32| n % 5 == 0))
        .compose(keep(|n: u32| (n < 40).then_some(n * 2)))
        .compose(partition_all(3))
        .compose(take(2));

    let out = into(&xf, Vec::new(), 0..);
    assert_eq!(out, vec![vec![2, 4, 8], vec![14, 16, 22]]);
}
