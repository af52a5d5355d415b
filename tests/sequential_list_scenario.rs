use simplegraph::{
    SequentialList,
    tracing_support::{dump_span_timings, info_span, init_tracing},
};

const NUMBER_OF_TRIES: i32 = 100;

#[test]
fn append_then_index() {
    let mut list = SequentialList::new();
    assert_eq!(list.len(), 0);
    for value in 1..=5 {
        list.append(value);
        assert_eq!(list[list.len() - 1], value);
        assert_eq!(list.len() as i32, value);
    }
}

#[test]
fn append_reduce_contains_drain() {
    init_tracing();
    let span = info_span!("sequential_list_workload").entered();

    let mut list = SequentialList::new();
    for i in 1..=NUMBER_OF_TRIES {
        list.append(i);
    }
    assert_eq!(list.reduce(0, |acc, x| acc + x), 5050);

    for i in 1..=NUMBER_OF_TRIES {
        if i % 10 == 0 {
            assert!(list.contains(&i));
        }
    }

    for i in 1..=NUMBER_OF_TRIES {
        if i % 2 == 0 {
            list.remove_first();
        } else {
            list.remove_last();
        }
    }

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());

    drop(span);
    dump_span_timings();
}
