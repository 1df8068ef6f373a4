//! Transaction identifiers.
//!
//! A transaction id is the hex-encoded Blake2b-256 digest of the peer's
//! nonce, the peer-local sequence number, the function name and each
//! argument, with every part length-prefixed so that distinct calls never
//! hash the same bytes.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

pub fn transaction_id(nonce: u64, sequence: u64, function: &str, args: &[String]) -> String {
    let mut hasher = Blake2b256::new();
    hasher.update(nonce.to_be_bytes());
    hasher.update(sequence.to_be_bytes());
    for part in std::iter::once(function).chain(args.iter().map(String::as_str)) {
        hasher.update((part.len() as u64).to_be_bytes());
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}
