//! Everything that touches the on-disk image tree.
//!
//! - `layout`: where assets, the pairing record and the output artifact live.
//! - `normalize`: in-place resize of a stored asset to the canonical resolution.
//! - `inline`: reads the output artifact back as a base64 payload for a data URI.
//!
//! The paths here are shared by every request. Two submissions running at the
//! same time write to the same pairing record and output artifact, and the last
//! writer wins. Nothing here locks.

pub mod inline;
pub mod layout;
pub mod normalize;
