//! Identity domain module.
//!
//! An identity is a named key pair representing the local user. The module
//! defines the key pair record produced by remote validation and the
//! overwrite guard protecting the single active pair of a form.

pub mod key_pair;
pub mod key_slot;

pub use key_pair::KeyPair;
pub use key_slot::{KeyOffer, KeySlot};
