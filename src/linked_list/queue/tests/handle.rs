extern crate std;

use std::{vec, vec::Vec};

use crate::linked_list::queue::handle;

#[test]
fn test_absent_queue() {
    assert!(!handle::insert_head(None, Some("a")));
    assert!(!handle::insert_tail(None, Some("a")));

    let mut buf = [0xaa; 4];
    assert!(!handle::remove_head(None, Some(&mut buf[..])));
    assert_eq!(buf, [0xaa; 4]);

    assert_eq!(handle::size(None), 0);
    handle::reverse(None);
    handle::sort(None);
    handle::destroy(None);
}

#[test]
fn test_absent_value_is_rejected() {
    let mut queue = handle::new().unwrap();
    assert!(!handle::insert_head(Some(&mut *queue), None));
    assert!(!handle::insert_tail(Some(&mut *queue), None));
    assert_eq!(handle::size(Some(&*queue)), 0);
    handle::destroy(Some(queue));
}

#[test]
fn test_insert_head_order() {
    let mut queue = handle::new().unwrap();
    assert!(handle::insert_head(Some(&mut *queue), Some("a")));
    assert!(handle::insert_head(Some(&mut *queue), Some("b")));
    assert!(handle::insert_head(Some(&mut *queue), Some("c")));

    assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["c", "b", "a"]);
    assert_eq!(handle::size(Some(&*queue)), 3);
    handle::destroy(Some(queue));
}

#[test]
fn test_sort_through_handle() {
    let mut queue = handle::new().unwrap();
    for value in ["banana", "Apple", "cherry"] {
        assert!(handle::insert_tail(Some(&mut *queue), Some(value)));
    }

    handle::sort(Some(&mut *queue));
    assert_eq!(
        queue.iter().collect::<Vec<_>>(),
        vec!["Apple", "banana", "cherry"]
    );

    handle::reverse(Some(&mut *queue));
    assert_eq!(
        queue.iter().collect::<Vec<_>>(),
        vec!["cherry", "banana", "Apple"]
    );
    handle::destroy(Some(queue));
}

#[test]
fn test_remove_until_empty() {
    let mut queue = handle::new().unwrap();
    assert!(handle::insert_tail(Some(&mut *queue), Some("xy")));

    let mut buf = [0xaa; 2];
    assert!(handle::remove_head(Some(&mut *queue), Some(&mut buf[..])));
    assert_eq!(&buf, b"x\0");
    assert_eq!(handle::size(Some(&*queue)), 0);

    assert!(!handle::remove_head(Some(&mut *queue), None));
    assert_eq!(handle::size(Some(&*queue)), 0);
    handle::destroy(Some(queue));
}

#[test]
fn test_destroy_with_values() {
    let mut queue = handle::new().unwrap();
    for i in 0..32 {
        let value = std::format!("value-{}", i);
        assert!(handle::insert_tail(Some(&mut *queue), Some(value.as_str())));
    }
    assert_eq!(handle::size(Some(&*queue)), 32);
    handle::destroy(Some(queue));
}
