#![forbid(unsafe_code)]

//! Unique id generation for blocks, variables, and comments.
//!
//! Ids travel through serialized workspaces, so the alphabet avoids
//! characters that conflict with XML or JSON. 87 characters at length 20
//! gives more than 128 bits, better than a UUID.

use rand::Rng;

/// Legal characters for a unique id. All on a US keyboard, none needing
/// escapes in XML or JSON.
const UID_SOUP: &[u8] = b"!#$%()*+,-./:;=?@[]^_`{|}~\
ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated id.
const UID_LENGTH: usize = 20;

/// Generate a globally unique id using the thread-local generator.
#[must_use]
pub fn gen_uid() -> String {
    gen_uid_with(&mut rand::rng())
}

/// Generate a unique id from the supplied generator.
///
/// Seam for deterministic tests; [`gen_uid`] is the everyday entry
/// point.
pub fn gen_uid_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..UID_LENGTH)
        .map(|_| char::from(UID_SOUP[rng.random_range(0..UID_SOUP.len())]))
        .collect()
}
