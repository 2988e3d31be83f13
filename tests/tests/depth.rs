use tests::prelude::*;
use tests::prelude::assert_eq;

use std::collections::BTreeMap;

const DEPTH_EXCEEDED: &str = "maximum nesting depth exceeded (possible circular reference)";

#[derive(Debug, Default, PartialEq, Record)]
struct Node {
    pub value: i64,
    pub next: Option<Box<Self>>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct NodeView {
    pub value: i64,
    pub next: Option<Box<NodeView>>,
}

/// A linked list of `len` nodes holding `0..len`.
fn chain(len: i64) -> Node {
    let mut head = Node {
        value: len - 1,
        next: None,
    };

    for value in (0..len - 1).rev() {
        head = Node {
            value,
            next: Some(Box::new(head)),
        };
    }

    head
}

fn values(mut node: &NodeView) -> Vec<i64> {
    let mut values = vec![node.value];
    while let Some(next) = &node.next {
        values.push(next.value);
        node = &**next;
    }
    values
}

#[test]
fn self_referential_records_are_mapped() {
    let mut dst = NodeView::default();

    assert_ok!(map(&mut dst, &chain(4)));
    assert_eq!(values(&dst), vec![0, 1, 2, 3]);
}

#[test]
fn each_node_spends_the_record_and_the_optional_level() {
    // Three nodes reach the last record at level five.
    let mut dst = NodeView::default();
    assert_ok!(map_with_options(
        &mut dst,
        &chain(3),
        &MapOptions::new().max_depth(5)
    ));
    assert_eq!(values(&dst), vec![0, 1, 2]);

    let mut dst = NodeView::default();
    let err = assert_err!(map_with_options(
        &mut dst,
        &chain(3),
        &MapOptions::new().max_depth(4)
    ));
    assert!(err.is_depth_exceeded());
    assert_failure(&err, "next.next", DEPTH_EXCEEDED);
    assert_eq!(dst, NodeView::default());
}

#[test]
fn default_limit_stops_long_chains() {
    setup();

    let mut dst = NodeView::default();
    let err = assert_err!(map(&mut dst, &chain(100)));

    assert!(err.is_depth_exceeded());
    assert_eq!(err.path().len(), 32);
    assert_failure(&err, &vec!["next"; 32].join("."), DEPTH_EXCEEDED);
}

#[test]
fn zero_limit_keeps_the_default() {
    let mut dst = NodeView::default();
    assert_ok!(map_with_options(
        &mut dst,
        &chain(20),
        &MapOptions::new().max_depth(0)
    ));
    assert_eq!(values(&dst).len(), 20);
}

#[derive(Debug, Default, Record)]
struct Flat {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Default, Record)]
struct FlatView {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Default, Record)]
struct Batch {
    pub ids: Vec<u32>,
}

#[derive(Debug, Default, Record)]
struct BatchView {
    pub ids: Vec<u64>,
}

#[test]
fn limit_of_one_allows_only_flat_records() {
    let options = MapOptions::new().max_depth(1);

    let mut dst = FlatView::default();
    assert_ok!(map_with_options(
        &mut dst,
        &Flat {
            id: 3,
            name: "x".to_string(),
        },
        &options
    ));
    assert_eq!(dst.id, 3);

    let mut dst = BatchView::default();
    let err = assert_err!(map_with_options(
        &mut dst,
        &Batch { ids: vec![1, 2] },
        &options
    ));
    assert_failure(&err, "ids", DEPTH_EXCEEDED);

    assert_ok!(map_with_options(
        &mut dst,
        &Batch { ids: vec![1, 2] },
        &MapOptions::new().max_depth(2)
    ));
    assert_eq!(dst.ids, vec![1, 2]);
}

#[derive(Debug, Default, Record)]
struct Cube {
    pub cells: Vec<Vec<Vec<i32>>>,
}

#[derive(Debug, Default, Record)]
struct WideCube {
    pub cells: Vec<Vec<Vec<i64>>>,
}

fn cube() -> Cube {
    Cube {
        cells: vec![vec![vec![1, 2], vec![3]], vec![vec![4]]],
    }
}

#[test]
fn nested_sequences_spend_one_level_each() {
    // The record and three sequences make four levels.
    let mut dst = WideCube::default();
    assert_ok!(map_with_options(
        &mut dst,
        &cube(),
        &MapOptions::new().max_depth(4)
    ));
    assert_eq!(dst.cells, vec![vec![vec![1, 2], vec![3]], vec![vec![4]]]);

    let mut dst = WideCube::default();
    let err = assert_err!(map_with_options(
        &mut dst,
        &cube(),
        &MapOptions::new().max_depth(3)
    ));
    assert!(err.is_depth_exceeded());
    assert_failure(&err, "cells[0][0]", DEPTH_EXCEEDED);
    assert!(dst.cells.is_empty());
}

#[derive(Debug, Default, Record)]
struct Groups {
    pub members: BTreeMap<String, BTreeMap<String, i32>>,
}

#[derive(Debug, Default, Record)]
struct WideGroups {
    pub members: BTreeMap<String, BTreeMap<String, i64>>,
}

fn groups() -> Groups {
    Groups {
        members: BTreeMap::from([(
            "admins".to_string(),
            BTreeMap::from([("ada".to_string(), 1)]),
        )]),
    }
}

#[test]
fn nested_maps_spend_one_level_each() {
    // The record and two maps make three levels.
    let mut dst = WideGroups::default();
    assert_ok!(map_with_options(
        &mut dst,
        &groups(),
        &MapOptions::new().max_depth(3)
    ));
    assert_eq!(dst.members["admins"]["ada"], 1);

    let mut dst = WideGroups::default();
    let err = assert_err!(map_with_options(
        &mut dst,
        &groups(),
        &MapOptions::new().max_depth(2)
    ));
    assert!(err.is_depth_exceeded());
    assert_failure(&err, "members[admins]", DEPTH_EXCEEDED);
    assert!(dst.members.is_empty());
}

#[derive(Debug, Default, Record)]
struct Schedule {
    pub slots: Vec<BTreeMap<String, Option<u8>>>,
}

#[derive(Debug, Default, Record)]
struct ScheduleView {
    pub slots: Vec<BTreeMap<String, Option<u16>>>,
}

#[test]
fn mixed_chains_count_every_step() {
    // Record, sequence, map, and optional make four levels.
    let src = Schedule {
        slots: vec![BTreeMap::from([("mon".to_string(), Some(9))])],
    };

    let mut dst = ScheduleView::default();
    assert_ok!(map_with_options(
        &mut dst,
        &src,
        &MapOptions::new().max_depth(4)
    ));
    assert_eq!(dst.slots[0]["mon"], Some(9));

    let mut dst = ScheduleView::default();
    let err = assert_err!(map_with_options(
        &mut dst,
        &src,
        &MapOptions::new().max_depth(3)
    ));
    assert_failure(&err, "slots[0][mon]", DEPTH_EXCEEDED);
}
