//! Movement domain: system modules for input and locomotion.

pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use input::read_input;
pub(crate) use locomotion::{apply_walk, sync_facing_sprites, update_facing};
