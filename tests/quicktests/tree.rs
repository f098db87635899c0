use std::collections::{BTreeSet, VecDeque};

use compendium::traversal::TraversalOrder;
use compendium::tree::Tree;
use compendium::Error;
use rand::prelude::*;

use crate::{init_logger, Op};

/// A naive recursive BST to check traversals against.
enum Reference {
    Leaf,
    Node(Box<Reference>, i32, Box<Reference>),
}

impl Reference {
    fn add(self, x: i32) -> Self {
        match self {
            Reference::Leaf => {
                Reference::Node(Box::new(Reference::Leaf), x, Box::new(Reference::Leaf))
            }
            Reference::Node(left, value, right) => {
                if x < value {
                    Reference::Node(Box::new(left.add(x)), value, right)
                } else {
                    Reference::Node(left, value, Box::new(right.add(x)))
                }
            }
        }
    }

    fn pre_order(&self, out: &mut Vec<i32>) {
        if let Reference::Node(left, value, right) = self {
            out.push(*value);
            left.pre_order(out);
            right.pre_order(out);
        }
    }

    fn in_order(&self, out: &mut Vec<i32>) {
        if let Reference::Node(left, value, right) = self {
            left.in_order(out);
            out.push(*value);
            right.in_order(out);
        }
    }

    fn post_order(&self, out: &mut Vec<i32>) {
        if let Reference::Node(left, value, right) = self {
            left.post_order(out);
            right.post_order(out);
            out.push(*value);
        }
    }

    fn level_order(&self, out: &mut Vec<i32>) {
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            if let Reference::Node(left, value, right) = node {
                out.push(*value);
                queue.push_back(left);
                queue.push_back(right);
            }
        }
    }

    fn traverse(&self, order: TraversalOrder) -> Vec<i32> {
        let mut out = Vec::new();
        match order {
            TraversalOrder::PreOrder => self.pre_order(&mut out),
            TraversalOrder::InOrder => self.in_order(&mut out),
            TraversalOrder::PostOrder => self.post_order(&mut out),
            TraversalOrder::LevelOrder => self.level_order(&mut out),
        }
        out
    }
}

fn shuffled(size: i32, rng: &mut impl Rng) -> Vec<i32> {
    let mut array: Vec<i32> = (0..size).collect();
    array.shuffle(rng);
    array
}

#[test]
fn traversals_match_reference_tree() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for order in TraversalOrder::ALL {
        for size in 1..100 {
            let array = shuffled(size, &mut rng);

            let mut tree = Tree::new();
            let mut reference = Reference::Leaf;
            for &x in &array {
                assert!(tree.add(x));
                reference = reference.add(x);
            }

            let expected = reference.traverse(order);
            let iterated: Vec<i32> = tree.iter(order).copied().collect();
            assert_eq!(iterated, expected, "{order:?} of {array:?}");

            let mut traversal = tree.traverse(order);
            let mut stepped = Vec::new();
            while let Some(value) = traversal.next(&tree) {
                stepped.push(*value.unwrap());
            }
            assert_eq!(stepped, expected, "{order:?} of {array:?}");
        }
    }
}

#[test]
fn removing_during_traversal_fails() {
    init_logger();

    for order in TraversalOrder::ALL {
        let mut tree: Tree<_> = [1, 2, 3].into_iter().collect();
        let mut traversal = tree.traverse(order);

        let mut failure = None;
        while let Some(step) = traversal.next(&tree) {
            match step {
                Ok(_) => {
                    tree.remove(&2);
                }
                Err(err) => failure = Some(err),
            }
        }
        assert_eq!(
            failure,
            Some(Error::ConcurrentModification {
                expected: 3,
                found: 2
            }),
            "{order:?}"
        );
    }
}

#[test]
fn randomized_removing() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = Tree::new();

    for size in 0..100 {
        let mut array = shuffled(size, &mut rng);
        for &x in &array {
            tree.add(x);
        }

        array.shuffle(&mut rng);
        for (j, x) in array.iter().enumerate() {
            assert!(tree.remove(x));
            assert!(!tree.contains(x));
            assert_eq!(tree.size(), array.len() - j - 1);
        }

        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }
}

quickcheck::quickcheck! {
    fn in_order_is_strictly_increasing(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        for op in ops {
            match op {
                Op::Add(x) => assert_eq!(tree.add(x), set.insert(x)),
                Op::Remove(x) => assert_eq!(tree.remove(&x), set.remove(&x)),
                Op::Poll => {
                    if let Some(min) = set.pop_first() {
                        assert!(tree.remove(&min));
                    }
                }
            }
        }

        let sorted: Vec<_> = tree.iter(TraversalOrder::InOrder).collect();
        sorted.windows(2).all(|w| w[0] < w[1])
            && sorted.into_iter().eq(set.iter())
            && tree.size() == set.len()
    }
}

quickcheck::quickcheck! {
    fn duplicate_add_is_a_no_op(xs: Vec<u8>, x: u8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        tree.add(x);
        let size = tree.size();

        !tree.add(x) && tree.size() == size
    }
}
