pub mod digest;

pub use digest::{SHARE_HASH_HEX_LEN, sha256_hex, verify_sha256_hex};
