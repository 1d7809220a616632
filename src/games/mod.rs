//! Game implementations built on `core`.

pub mod unscramble;
