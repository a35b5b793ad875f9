#![allow(dead_code)]

use bit_object::raw::MemorySignature;
use fake::Fake;
use fake::faker::internet::en::FreeEmail;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use sha1::{Digest, Sha1};

/// Derive a deterministic 20-byte digest from a seed
pub fn digest(seed: &str) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(seed.as_bytes());
    hasher.finalize().into()
}

/// Signature record with a generated identity and an in-range offset
pub fn fake_signature() -> MemorySignature {
    MemorySignature::new(
        &Name().fake::<String>(),
        &FreeEmail().fake::<String>(),
        (1_000_000_000..1_700_000_000_i64).fake::<i64>(),
        (-720..=840).fake::<i32>(),
    )
}

/// Generated commit message body
pub fn fake_message() -> String {
    Words(5..10).fake::<Vec<String>>().join(" ")
}
