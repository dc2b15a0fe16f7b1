//! Invite Module
//!
//! Short, human-shareable invite codes for savings vaults and the share links
//! that carry them.

mod codec;
mod share;

#[cfg(test)]
mod property_tests;

pub use codec::{
    decode_vault_id, is_valid_format, parse, InviteCodec, ParsedInvite, VaultId, INVITE_PREFIX,
    MIN_TRAILING_LEN, RANDOM_SUFFIX_LEN, TIMESTAMP_SEGMENT_LEN,
};
pub use share::{build_share_url, JOIN_PATH};
