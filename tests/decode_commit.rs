use bit_object::raw::MemoryCommit;
use bit_object::{Commit, ObjectError, ObjectId, ObjectType};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

mod common;

#[test]
fn merge_commit_preserves_mainline_parent_order() {
    let first_parent = common::digest("parent-1");
    let second_parent = common::digest("parent-2");
    let raw = MemoryCommit::new(
        common::digest("merge"),
        common::digest("tree"),
        vec![first_parent.to_vec(), second_parent.to_vec()],
        common::fake_signature(),
        common::fake_signature(),
        &common::fake_message(),
    );

    let commit = Commit::decode(&raw).unwrap();

    assert_eq!(commit.parents().len(), 2);
    assert_eq!(
        commit.parents()[0],
        ObjectId::from_bytes(&first_parent).unwrap()
    );
    assert_eq!(
        commit.parents()[1],
        ObjectId::from_bytes(&second_parent).unwrap()
    );
    assert_eq!(
        commit.parent(),
        Some(&ObjectId::from_bytes(&first_parent).unwrap())
    );
}

#[test]
fn root_commit_has_no_parents() {
    let raw = MemoryCommit::new(
        common::digest("root"),
        common::digest("tree"),
        Vec::new(),
        common::fake_signature(),
        common::fake_signature(),
        &common::fake_message(),
    );

    let commit = Commit::decode(&raw).unwrap();

    assert!(commit.parents().is_empty());
    assert_eq!(commit.parent(), None);
}

#[test]
fn commits_sharing_an_id_are_equal_whatever_their_fields_say() {
    // A well-formed store cannot produce two commits with the same id and
    // different content, which is exactly why the divergence is hand-built.
    let id = common::digest("identity");
    let first = Commit::decode(&MemoryCommit::new(
        id,
        common::digest("tree-a"),
        Vec::new(),
        common::fake_signature(),
        common::fake_signature(),
        "one message",
    ))
    .unwrap();
    let second = Commit::decode(&MemoryCommit::new(
        id,
        common::digest("tree-b"),
        vec![common::digest("parent").to_vec()],
        common::fake_signature(),
        common::fake_signature(),
        "a different message",
    ))
    .unwrap();

    assert_eq!(first, second);

    let mut seen = HashSet::new();
    seen.insert(first);
    assert!(seen.contains(&second));
}

#[test]
fn decoding_through_a_wrong_kind_handle_fails() {
    let mut raw = MemoryCommit::new(
        common::digest("commit"),
        common::digest("tree"),
        Vec::new(),
        common::fake_signature(),
        common::fake_signature(),
        &common::fake_message(),
    );
    raw.type_tag = ObjectType::Tag.native_tag();

    assert!(matches!(
        Commit::decode(&raw),
        Err(ObjectError::InvalidObject(_))
    ));
}

#[test]
fn author_and_committer_are_decoded_independently() {
    let author = common::fake_signature();
    let committer = common::fake_signature();
    let raw = MemoryCommit::new(
        common::digest("commit"),
        common::digest("tree"),
        Vec::new(),
        author.clone(),
        committer.clone(),
        &common::fake_message(),
    );

    let commit = Commit::decode(&raw).unwrap();

    assert_eq!(
        commit.author().name().as_bytes(),
        author.name.as_deref().unwrap()
    );
    assert_eq!(
        commit.committer().email().as_bytes(),
        committer.email.as_deref().unwrap()
    );
}
