// Integration tests for the linked list and its node heap

use crustguide::errors::GuideError;
use crustguide::memory::heap::BlockState;
use crustguide::memory::list::LinkedList;
use crustguide::snapshot::Transcript;

#[test]
fn test_documented_scenario() {
    let mut list = LinkedList::new();
    let mut out = Transcript::new();

    list.print(&mut out, 11);
    list.insert_front(10).expect("insert 10");
    list.print(&mut out, 11);
    list.insert_front(20).expect("insert 20");
    list.print(&mut out, 11);
    list.insert_front(30).expect("insert 30");
    list.print(&mut out, 11);
    list.destroy().expect("destroy");
    list.print(&mut out, 11);

    assert_eq!(
        out.get_output(),
        vec![
            "List: [ NULL ]",
            "List: [ 10 -> NULL ]",
            "List: [ 20 -> 10 -> NULL ]",
            "List: [ 30 -> 20 -> 10 -> NULL ]",
            "List: [ NULL ]",
        ]
    );
}

#[test]
fn test_insertions_come_back_reversed() {
    let values: Vec<i32> = (1..=50).map(|i| i * 7 - 100).collect();
    let mut list = LinkedList::new();
    for v in &values {
        list.insert_front(*v).unwrap();
    }

    let expected: Vec<i32> = values.iter().rev().copied().collect();
    assert_eq!(list.iter().collect::<Vec<_>>(), expected);

    let rendered = list.render();
    assert!(rendered.starts_with("List: [ 250 -> 243 -> "));
    assert!(rendered.ends_with("-93 -> NULL ]"));
}

#[test]
fn test_each_insert_grows_length_by_one_and_keeps_payloads() {
    let mut list = LinkedList::new();
    let mut before: Vec<i32> = Vec::new();

    for v in [5, -3, 0, i32::MAX, i32::MIN] {
        list.insert_front(v).unwrap();
        let after: Vec<i32> = list.iter().collect();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0], v);
        assert_eq!(&after[1..], before.as_slice());
        before = after;
    }
    assert_eq!(list.len(), 5);
}

#[test]
fn test_destroy_twice_on_empty_and_populated() {
    let mut empty = LinkedList::new();
    assert_eq!(empty.destroy().unwrap(), 0);
    assert_eq!(empty.destroy().unwrap(), 0);
    assert!(empty.is_empty());

    let mut list = LinkedList::new();
    for v in 0..10 {
        list.insert_front(v).unwrap();
    }
    assert_eq!(list.destroy().unwrap(), 10);
    assert_eq!(list.destroy().unwrap(), 0);
    assert!(list.is_empty());
    assert_eq!(list.head(), None);
    assert_eq!(list.heap().live_count(), 0);
}

#[test]
fn test_every_node_released_exactly_once_in_order() {
    let mut list = LinkedList::new();
    let mut addresses = Vec::new();
    for v in 0..6 {
        addresses.push(list.insert_front(v).unwrap());
    }
    list.destroy().unwrap();

    // Head to tail is the reverse of insertion order
    addresses.reverse();
    assert_eq!(list.heap().release_log(), addresses.as_slice());
    assert!(list
        .heap()
        .blocks()
        .iter()
        .all(|(_, block)| block.state == BlockState::Tombstone));
}

#[test]
fn test_allocation_failure_is_surfaced() {
    let mut list = LinkedList::with_max_nodes(3);
    for v in [1, 2, 3] {
        list.insert_front(v).unwrap();
    }
    let before = list.render();

    match list.insert_front(4) {
        Err(GuideError::OutOfMemory { limit, .. }) => assert_eq!(limit, 3),
        other => panic!("expected OutOfMemory, got {:?}", other),
    }
    assert_eq!(list.render(), before);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_zero_capacity_heap_refuses_first_node() {
    let mut list = LinkedList::with_max_nodes(0);
    let err = list.insert_front(1).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Out of memory: requested 12 bytes, limit is 0 nodes"
    );
    assert!(list.is_empty());
    assert_eq!(list.render(), "List: [ NULL ]");
}

#[test]
fn test_repeated_build_and_teardown_keeps_heap_bounded() {
    let mut list = LinkedList::with_max_nodes(1);
    for i in 0..100_000 {
        list.insert_front(i).unwrap();
        assert_eq!(list.destroy().unwrap(), 1);
    }

    let heap = list.heap();
    assert_eq!(heap.live_count(), 0);
    assert_eq!(heap.blocks().len(), 1, "only the latest teardown is kept");
    assert_eq!(heap.release_log().len(), 1);
    assert!(list.is_empty());
}
