//! Whole sessions driven through the console, against the mock store and
//! a real table.

use ramfs_core::{FileStore, StorageError};
use ramfs_shell::{seed_samples, Shell, StdConsole, BANNER, SAMPLE_FILES};
use ramfs_table::FileTable;
use ramfs_test_utils::{filled_table, table_with_heap, MockFileStore};

fn session<S: FileStore>(shell: &mut Shell<S>, input: &str) -> String {
    let mut console = StdConsole::new(input.as_bytes(), Vec::new());
    shell.run(&mut console).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();
    out.strip_prefix(BANNER).unwrap().to_owned()
}

#[test]
fn seeded_session_lists_samples_in_order() {
    let mut table = table_with_heap(1 << 20);
    seed_samples(&mut table).unwrap();
    let mut shell = Shell::new(table);

    let out = session(&mut shell, "ls\ncat about.txt\n");
    let mut expected = String::from("ramfs> Files:\n");
    for (name, content) in SAMPLE_FILES {
        expected.push_str(&format!("  {name} ({} bytes)\n", content.len()));
    }
    expected.push_str("ramfs> Built for learning OS development concepts.\n");
    expected.push_str("ramfs> \n");
    assert_eq!(out, expected);
}

#[test]
fn storage_errors_reach_the_console() {
    let mut store = MockFileStore::new();
    store.fail_next(StorageError::OutOfMemory {
        requested: 32,
        remaining: 0,
    });
    let mut shell = Shell::new(store);

    let out = session(&mut shell, "edit a.txt big\nedit a.txt small\n");
    assert_eq!(
        out,
        "ramfs> Error: Could not save file: out of memory: requested 32 bytes, \
         0 bytes remaining.\n\
         ramfs> File 'a.txt' saved.\n\
         ramfs> \n"
    );
    assert_eq!(shell.store().writes(), ["a.txt", "a.txt"]);
    assert_eq!(shell.store().read("a.txt"), Some(&b"small"[..]));
}

#[test]
fn full_table_is_reported_and_recoverable() {
    let mut shell = Shell::new(filled_table(32));
    let out = session(&mut shell, "edit f32 x\nrm f0\nedit f32 x\n");
    assert_eq!(
        out,
        "ramfs> Error: Could not save file: file table full (32 files).\n\
         ramfs> File 'f0' deleted.\n\
         ramfs> File 'f32' saved.\n\
         ramfs> \n"
    );
    let table: FileTable = shell.into_store();
    assert_eq!(table.position("f32"), Some(0));
}

#[test]
fn mock_and_table_agree_on_command_output() {
    let script = "ls\nedit a one\nedit b two words\nedit a again\nls\nrm b\nrm b\ncat a\ncat b\nls\n";

    let mut mock = Shell::new(MockFileStore::new());
    let mut table = Shell::new(table_with_heap(1 << 16));
    assert_eq!(session(&mut mock, script), session(&mut table, script));
}

#[test]
fn rejected_names_do_not_create_files() {
    let mut shell = Shell::new(table_with_heap(1 << 16));
    let long = "n".repeat(80);
    let out = session(&mut shell, &format!("edit {long} x\nls\n"));
    assert!(out.contains("Error: Could not save file: file name is 80 bytes"));
    assert!(out.contains("ramfs> No files.\n"));
}

#[test]
fn backspace_editing_applies_before_dispatch() {
    let mut shell = Shell::new(MockFileStore::new());
    let out = session(&mut shell, "edit a.txx\x08t hi\ncat a.txt\n");
    assert!(out.contains("File 'a.txt' saved."));
    assert!(out.contains("ramfs> hi\n"));
}

#[test]
fn heap_exhaustion_through_the_shell() {
    // Two 16-byte buffers.
    let mut shell = Shell::new(table_with_heap(32));
    let out = session(&mut shell, "edit a 1\nedit a 2\nedit a 3\ncat a\nstat\n");
    assert!(out.contains("Error: Could not save file: out of memory"));
    assert!(out.contains("ramfs> 2\n"));
    assert!(out.contains("Heap: 32/32 bytes used (0 free)"));
}

#[test]
fn prepopulated_mock_files_are_listed_and_readable() {
    let mut store = MockFileStore::new();
    store.insert("first.txt", b"one");
    store.insert("second.txt", b"");
    let mut shell = Shell::new(store);

    let out = session(&mut shell, "ls\ncat first.txt\nrm second.txt\nls\n");
    assert_eq!(
        out,
        "ramfs> Files:\n  first.txt (3 bytes)\n  second.txt (0 bytes)\n\
         ramfs> one\n\
         ramfs> File 'second.txt' deleted.\n\
         ramfs> Files:\n  first.txt (3 bytes)\n\
         ramfs> \n"
    );
    assert!(shell.store().writes().is_empty());
}
