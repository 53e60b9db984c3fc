//! Property tests: the table against a slot-accurate reference model.

use proptest::prelude::*;
use ramfs_core::StorageError;
use ramfs_table::{FileTable, SlotState};
use ramfs_test_utils::table_with_heap;

#[derive(Clone, Debug)]
enum Op {
    Write(String, Vec<u8>),
    Delete(String),
}

fn arb_name() -> impl Strategy<Value = String> {
    // A small pool so writes collide with existing names often.
    prop_oneof![
        4 => (0u8..40).prop_map(|i| format!("n{i}")),
        1 => "[a-z]{60,66}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (arb_name(), proptest::collection::vec(any::<u8>(), 0..64))
            .prop_map(|(n, c)| Op::Write(n, c)),
        1 => arb_name().prop_map(Op::Delete),
    ]
}

/// Slot-indexed model of the table, without a heap.
struct Model {
    slots: Vec<Option<(String, Vec<u8>)>>,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|(n, _)| n == name))
    }

    fn names(&self) -> Vec<String> {
        self.slots.iter().flatten().map(|(n, _)| n.clone()).collect()
    }
}

fn check_consistent(table: &FileTable, model: &Model) -> Result<(), TestCaseError> {
    let mut listed = Vec::new();
    table.list(|name, size| listed.push((name.to_owned(), size)));
    let expected: Vec<_> = model
        .slots
        .iter()
        .flatten()
        .map(|(n, c)| (n.clone(), c.len()))
        .collect();
    prop_assert_eq!(&listed, &expected);
    prop_assert_eq!(table.count(), model.names().len());

    for (index, slot) in model.slots.iter().enumerate() {
        let actual = table.slot(index).unwrap();
        prop_assert_ne!(actual.state(), SlotState::Staged);
        match slot {
            Some((name, content)) => {
                prop_assert_eq!(table.position(name), Some(index));
                prop_assert_eq!(table.read(name), Some(content.as_slice()));
            }
            None => prop_assert!(actual.is_free()),
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn table_matches_model(ops in proptest::collection::vec(arb_op(), 1..120)) {
        let mut table = table_with_heap(1 << 20);
        let mut model = Model::new(table.capacity());

        for op in ops {
            match op {
                Op::Write(name, content) => {
                    let result = table.write(&name, &content);
                    if name.len() >= 64 {
                        let is_too_long = matches!(result, Err(StorageError::NameTooLong { .. }));
                        prop_assert!(is_too_long);
                    } else if let Some(i) = model.position(&name) {
                        prop_assert_eq!(result, Ok(()));
                        model.slots[i] = Some((name, content));
                    } else if let Some(i) = model.slots.iter().position(Option::is_none) {
                        prop_assert_eq!(result, Ok(()));
                        model.slots[i] = Some((name, content));
                    } else {
                        prop_assert_eq!(result, Err(StorageError::StorageFull { capacity: 32 }));
                    }
                }
                Op::Delete(name) => {
                    let result = table.delete(&name);
                    match model.position(&name) {
                        Some(i) => {
                            prop_assert_eq!(result, Ok(()));
                            model.slots[i] = None;
                        }
                        None => prop_assert!(result.is_err()),
                    }
                }
            }
            check_consistent(&table, &model)?;
        }
    }

    #[test]
    fn count_equals_number_of_existing_names(
        names in proptest::collection::vec("[a-d]{1,2}", 0..60),
    ) {
        let mut table = table_with_heap(1 << 16);
        for name in &names {
            let _ = table.write(name, name.as_bytes());
        }
        let existing = names
            .iter()
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .filter(|n| table.exists(n))
            .count();
        prop_assert_eq!(table.count(), existing);
    }

    #[test]
    fn heap_exhaustion_never_leaves_partial_files(
        ops in proptest::collection::vec(arb_op(), 1..80),
    ) {
        // Tiny heap: most non-empty writes eventually fail.
        let mut table = table_with_heap(256);
        for op in ops {
            match op {
                Op::Write(name, content) => {
                    let existed = table.exists(&name);
                    let before = table.read(&name).map(<[u8]>::to_vec);
                    match table.write(&name, &content) {
                        Ok(()) => prop_assert_eq!(table.read(&name), Some(content.as_slice())),
                        Err(_) => {
                            prop_assert_eq!(table.exists(&name), existed);
                            prop_assert_eq!(table.read(&name).map(<[u8]>::to_vec), before);
                        }
                    }
                }
                Op::Delete(name) => {
                    let _ = table.delete(&name);
                }
            }
            prop_assert!(table.arena().used() <= table.arena().capacity());
            for index in 0..table.capacity() {
                prop_assert_ne!(table.slot(index).unwrap().state(), SlotState::Staged);
            }
        }
    }
}
