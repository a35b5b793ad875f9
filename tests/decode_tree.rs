use bit_object::raw::{MemoryEntry, MemoryTree};
use bit_object::{Entry, ObjectError, ObjectId, ObjectType, Tree};
use pretty_assertions::assert_eq;

mod common;

#[test]
fn duplicate_names_keep_the_last_entry() {
    let raw = MemoryTree::new(
        common::digest("tree"),
        vec![
            MemoryEntry::new(0o100644, ObjectType::Blob, common::digest("first"), "a"),
            MemoryEntry::new(0o100644, ObjectType::Blob, common::digest("other"), "b"),
            MemoryEntry::new(0o100755, ObjectType::Blob, common::digest("last"), "a"),
        ],
    );

    let tree = Tree::decode(&raw).unwrap();

    assert_eq!(tree.len(), 2);
    let expected = Entry::new(
        0o100755,
        ObjectType::Blob,
        ObjectId::from_bytes(&common::digest("last")).unwrap(),
        "a".to_string(),
    );
    assert_eq!(tree.entry("a"), Some(&expected));
}

#[test]
fn mixed_entry_kinds_decode() {
    let raw = MemoryTree::new(
        common::digest("root"),
        vec![
            MemoryEntry::new(0o040000, ObjectType::Tree, common::digest("src"), "src"),
            MemoryEntry::new(0o100644, ObjectType::Blob, common::digest("readme"), "README"),
            MemoryEntry::new(0o120000, ObjectType::Blob, common::digest("link"), "latest"),
            MemoryEntry::new(
                0o160000,
                ObjectType::Commit,
                common::digest("submodule"),
                "vendored",
            ),
        ],
    );

    let tree = Tree::decode(&raw).unwrap();

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.entry("src").unwrap().object_type(), ObjectType::Tree);
    assert_eq!(tree.entry("src").unwrap().mode(), 0o040000);
    assert_eq!(tree.entry("latest").unwrap().mode(), 0o120000);
    assert_eq!(
        tree.entry("vendored").unwrap().object_type(),
        ObjectType::Commit
    );
    assert_eq!(
        tree.entry("README").unwrap().oid(),
        &ObjectId::from_bytes(&common::digest("readme")).unwrap()
    );
}

#[test]
fn an_entry_with_an_unknown_tag_fails_the_whole_tree() {
    let mut corrupt = MemoryEntry::new(0o100644, ObjectType::Blob, common::digest("x"), "x");
    corrupt.type_tag = 7;
    let raw = MemoryTree::new(
        common::digest("tree"),
        vec![
            MemoryEntry::new(0o100644, ObjectType::Blob, common::digest("fine"), "fine"),
            corrupt,
        ],
    );

    assert!(matches!(
        Tree::decode(&raw),
        Err(ObjectError::InvalidObject(_))
    ));
}

#[test]
fn trees_sharing_an_id_are_equal_whatever_their_entries_say() {
    let id = common::digest("identity");
    let populated = Tree::decode(&MemoryTree::new(
        id,
        vec![MemoryEntry::new(
            0o100644,
            ObjectType::Blob,
            common::digest("file"),
            "file",
        )],
    ))
    .unwrap();
    let empty = Tree::decode(&MemoryTree::new(id, Vec::new())).unwrap();

    assert_eq!(populated, empty);
}
