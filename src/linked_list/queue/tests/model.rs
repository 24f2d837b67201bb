extern crate std;

use std::{collections::VecDeque, string::String, vec::Vec};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::queue::{list::Queue, order::cmp_ignore_ascii_case};

const ALPHABET: &[u8] = b"aAbBcCzZ_09";

fn random_value(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..6);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

fn assert_matches(queue: &Queue, model: &VecDeque<String>) {
    assert_eq!(queue.size(), model.len());
    assert_eq!(queue.is_empty(), model.is_empty());
    assert_eq!(queue.head(), model.front().map(String::as_str));
    assert_eq!(queue.tail(), model.back().map(String::as_str));
    assert!(queue.iter().eq(model.iter().map(String::as_str)));
}

#[test]
fn test_random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut queue = Queue::new();
    let mut model: VecDeque<String> = VecDeque::new();
    let mut buf = [0u8; 4];

    for _ in 0..5_000 {
        match rng.random_range(0..10) {
            0..=2 => {
                let value = random_value(&mut rng);
                queue.insert_head(&value).unwrap();
                model.push_front(value);
            }
            3..=5 => {
                let value = random_value(&mut rng);
                queue.insert_tail(&value).unwrap();
                model.push_back(value);
            }
            6 | 7 => match model.pop_front() {
                Some(expected) => {
                    queue.remove_head(Some(&mut buf[..])).unwrap();
                    let len = expected.len().min(buf.len() - 1);
                    assert_eq!(&buf[..len], &expected.as_bytes()[..len]);
                    assert!(buf[len..].iter().all(|&b| b == 0));
                }
                None => assert!(queue.remove_head(Some(&mut buf[..])).is_err()),
            },
            8 => {
                queue.reverse();
                model.make_contiguous().reverse();
            }
            _ => {
                queue.sort();
                model
                    .make_contiguous()
                    .sort_by(|a, b| cmp_ignore_ascii_case(a, b));
            }
        }
        assert_matches(&queue, &model);
    }
}

#[test]
fn test_sort_matches_stable_sort() {
    let mut rng = StdRng::seed_from_u64(42);

    for n in [2, 3, 7, 16, 33, 250] {
        let input: Vec<String> = (0..n).map(|_| random_value(&mut rng)).collect();
        let mut queue = Queue::new();
        for value in &input {
            queue.insert_tail(value).unwrap();
        }

        queue.sort();
        let mut expected = input.clone();
        expected.sort_by(|a, b| cmp_ignore_ascii_case(a, b));

        assert!(queue.iter().eq(expected.iter().map(String::as_str)));
        assert!(
            queue
                .iter()
                .zip(queue.iter().skip(1))
                .all(|(a, b)| cmp_ignore_ascii_case(a, b).is_le())
        );
        assert_eq!(queue.tail(), expected.last().map(String::as_str));
        assert_eq!(queue.size(), n);
    }
}
