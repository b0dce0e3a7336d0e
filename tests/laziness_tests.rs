//! Laziness and single-consumption contract tests.

use std::cell::RefCell;
use std::rc::Rc;

use lazyseq::seq::from_iter;
use lazyseq::{sequence_of, SeqIterator, Sequence};

#[test]
fn test_generate_sequence_terminates_on_none() {
    let result = Sequence::iterate(1, |&x| if x < 5 { Some(x + 1) } else { None }).to_vec();
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_take_limits_an_infinite_generator() {
    let result = Sequence::iterate(1, |&x| Some(x + 1)).take(3).to_vec();
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_take_while_limits_an_infinite_generator() {
    let mut n = 0;
    let result = Sequence::generate(move || {
        n += 1;
        Some(n)
    })
    .take_while(|&x| x < 4)
    .to_vec();
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_intermediate_operations_defer_all_work() {
    let touched = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&touched);

    let chain = sequence_of([1, 2, 3, 4])
        .on_each(move |&x| sink.borrow_mut().push(x))
        .map(|x| x * 2)
        .filter(|&x| x > 2);

    // Building the chain pulled nothing.
    assert!(touched.borrow().is_empty());

    let result = chain.take(2).to_vec();
    assert_eq!(result, vec![4, 6]);
    // The filter discarded 1's mapped value, so the two results cost
    // three upstream pulls; 4 was never touched.
    assert_eq!(*touched.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_abandoned_chain_performs_no_work() {
    let touched = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&touched);
    {
        let _chain = sequence_of([1, 2, 3]).on_each(move |_| *sink.borrow_mut() += 1);
        // Dropped without a terminal operation.
    }
    assert_eq!(*touched.borrow(), 0);
}

#[test]
fn test_exhausted_protocol_instance_stays_exhausted() {
    let mut iter = from_iter(vec![1, 2]);
    while iter.has_next() {
        iter.next();
    }
    assert!(!iter.has_next());
    assert!(!iter.has_next());
}

#[test]
fn test_sequence_protocol_can_be_driven_manually() {
    let mut seq = sequence_of([1, 2]);
    assert!(seq.has_next());
    assert_eq!(seq.next(), 1);
    assert_eq!(seq.next(), 2);
    assert!(!seq.has_next());
}

#[test]
fn test_iterate_with_absent_seed_yields_empty_sequence() {
    let result = Sequence::iterate_with(|| None::<i32>, |&x| Some(x + 1)).to_vec();
    assert!(result.is_empty());
}

#[test]
fn test_iterate_with_present_seed() {
    let result = Sequence::iterate_with(|| Some(2), |&x| if x < 20 { Some(x * x) } else { None }).to_vec();
    assert_eq!(result, vec![2, 4, 16, 256]);
}
