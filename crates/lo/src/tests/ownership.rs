//! Observes the consume/lend rules through element drops.

use crate::{each, filter, length, map, own_list, sum, take, List};
use std::cell::Cell;
use std::rc::Rc;

/// An element that reports its own drop, so a test can tell when a
/// container's contents are freed.
#[derive(Debug, Clone)]
struct Tracked {
    id: i32,
    dropped: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(id: i32, dropped: &Rc<Cell<usize>>) -> Self {
        Tracked {
            id,
            dropped: Rc::clone(dropped),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

fn tracked_list(ids: &[i32], dropped: &Rc<Cell<usize>>) -> List<Tracked> {
    ids.iter().map(|&id| Tracked::new(id, dropped)).collect()
}

#[test]
fn test_plain_input_is_freed_by_the_call() {
    let dropped = Rc::new(Cell::new(0));
    let xs = tracked_list(&[1, 2, 3], &dropped);
    assert_eq!(dropped.get(), 0);
    assert_eq!(length(xs), 3);
    assert_eq!(dropped.get(), 3);
}

#[test]
fn test_rejected_elements_are_freed_during_filter() {
    let dropped = Rc::new(Cell::new(0));
    let xs = tracked_list(&[1, 2, 3], &dropped);
    let odd = filter(|t| t.id % 2 == 1, xs);
    assert_eq!(odd.len(), 2);
    assert_eq!(dropped.get(), 1);
}

#[test]
fn test_owned_elements_outlive_the_calls() {
    let dropped = Rc::new(Cell::new(0));
    let xs = own_list(tracked_list(&[1, 2], &dropped));

    let ids = map(|t| t.id, &xs);
    assert_eq!(ids.items, vec![1, 2]);
    // only the per-call clones have been freed
    assert_eq!(dropped.get(), 2);
    assert_eq!(xs.len(), 2);

    drop(xs);
    assert_eq!(dropped.get(), 4);
}

#[test]
fn test_take_on_owned_clones_only_what_it_keeps() {
    let dropped = Rc::new(Cell::new(0));
    let xs = own_list(tracked_list(&[1, 2, 3], &dropped));

    let front = take(1, &xs);
    assert_eq!(front.len(), 1);
    assert_eq!(dropped.get(), 0);

    drop(front);
    assert_eq!(dropped.get(), 1);
    assert_eq!(xs.len(), 3);
}

#[test]
fn test_lent_callable_survives_several_calls() {
    let mut seen = Vec::new();
    let mut log = |t: i32| seen.push(t);
    each(&mut log, List::from(vec![1, 2]));
    each(&mut log, List::from(vec![3]));
    log(4);
    assert_eq!(seen, vec![1, 2, 3, 4]);
}

#[test]
fn test_release_hands_the_container_back() {
    let xs = own_list(List::from(vec![1, 2, 3]));
    let back = xs.release();
    assert_eq!(sum(back), 6);
}
