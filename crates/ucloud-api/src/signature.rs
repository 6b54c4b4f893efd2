//! Deterministic request signature.
//!
//! The API authenticates calls with a SHA-1 digest over the sorted request
//! parameters followed by the account's private key. This is a plain hash
//! over an ordered concatenation, not an HMAC: the scheme's only security
//! property is that the private key is appended and never disclosed. That is
//! a constraint of the wire protocol, kept as-is.

use crate::params::ParameterSet;
use sha1::{Digest, Sha1};

/// Compute the signature for a parameter set.
///
/// Parameter names are taken in byte-wise sorted order (values for one name
/// in insertion order) and each `name` then `value` is fed to the hash with
/// no delimiter; the raw private key comes last. The 20-byte digest is
/// rendered as 40 lowercase hex characters.
///
/// Identical `(parameters, private_key)` pairs always produce the identical
/// signature regardless of how the set was built.
pub fn sign(params: &ParameterSet, private_key: &str) -> String {
    let mut hasher = Sha1::new();
    for (name, value) in params.iter() {
        hasher.update(name.as_bytes());
        hasher.update(value.as_bytes());
    }
    hasher.update(private_key.as_bytes());
    hex::encode(hasher.finalize())
}
