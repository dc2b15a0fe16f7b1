//! Invite Code Codec
//!
//! Layout of a code, read left to right:
//!
//! | segment   | length   | content                                   |
//! |-----------|----------|-------------------------------------------|
//! | prefix    | 4        | literal `GOAL`                            |
//! | vault id  | variable | decimal digits                            |
//! | timestamp | 4        | last four base-36 digits of issue seconds |
//! | salt      | 4        | random base-36 digits                     |
//!
//! Decoding only recovers a *candidate* vault id. Nothing here proves the
//! vault exists or that the code was ever issued.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::clock::{Clock, SystemClock};

// == Constants ==
/// Literal every invite code starts with.
pub const INVITE_PREFIX: &str = "GOAL";

/// Length of the base-36 timestamp segment.
pub const TIMESTAMP_SEGMENT_LEN: usize = 4;

/// Length of the random suffix produced by the encoder.
pub const RANDOM_SUFFIX_LEN: usize = 4;

/// Minimum characters after the vault id for [`parse`] to accept a code.
pub const MIN_TRAILING_LEN: usize = TIMESTAMP_SEGMENT_LEN + RANDOM_SUFFIX_LEN;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// On-chain vault identifier.
pub type VaultId = u64;

// == Parsed Invite ==
/// The fields recovered from a structurally complete invite code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedInvite {
    /// Candidate vault id; must be checked against chain state before use
    pub vault_id: VaultId,
    /// Base-36 value of the timestamp segment (approximate, not the issue time)
    pub timestamp: u64,
    /// Everything after the timestamp segment
    pub random_suffix: String,
}

// == Invite Codec ==
/// Mints invite codes.
///
/// Generic over the clock so tests can pin the timestamp segment; the random
/// suffix is pinned by passing a seeded RNG to [`InviteCodec::encode_with_rng`].
#[derive(Debug, Clone, Default)]
pub struct InviteCodec<C: Clock = SystemClock> {
    clock: C,
}

impl InviteCodec<SystemClock> {
    /// Creates a codec reading the wall clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> InviteCodec<C> {
    /// Creates a codec reading the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    // == Encode ==
    /// Builds a fresh invite code for `vault_id` using the thread-local RNG.
    ///
    /// Two calls for the same vault almost always differ.
    pub fn encode(&self, vault_id: VaultId) -> String {
        self.encode_with_rng(vault_id, &mut rand::thread_rng())
    }

    /// Builds an invite code drawing the salt from `rng`.
    pub fn encode_with_rng<R: Rng + ?Sized>(&self, vault_id: VaultId, rng: &mut R) -> String {
        let id = vault_id.to_string();
        let mut code = String::with_capacity(INVITE_PREFIX.len() + id.len() + MIN_TRAILING_LEN);

        code.push_str(INVITE_PREFIX);
        code.push_str(&id);
        code.push_str(&timestamp_segment(self.clock.now_secs()));
        code.extend(
            (0..RANDOM_SUFFIX_LEN).map(|_| BASE36_DIGITS[rng.gen_range(0..BASE36_DIGITS.len())] as char),
        );

        debug!(vault_id, code = %code, "Minted invite code");
        code
    }
}

// == Decode ==
/// Extracts the candidate vault id from `code`.
///
/// Returns `None` when the prefix is missing, no digits follow it, or the
/// digit run does not fit a [`VaultId`]. Trailing length is not checked; see
/// [`parse`] for the stricter form.
pub fn decode_vault_id(code: &str) -> Option<VaultId> {
    split_vault_id(code).map(|(vault_id, _)| vault_id)
}

/// True iff [`decode_vault_id`] finds a vault id.
///
/// A code can pass this check and still fail [`parse`].
pub fn is_valid_format(code: &str) -> bool {
    decode_vault_id(code).is_some()
}

// == Parse ==
/// Splits a complete invite code into its fields.
///
/// Requires at least [`MIN_TRAILING_LEN`] characters after the vault id and an
/// alphanumeric timestamp segment.
pub fn parse(code: &str) -> Option<ParsedInvite> {
    let (vault_id, trailing) = split_vault_id(code)?;
    if trailing.chars().count() < MIN_TRAILING_LEN {
        return None;
    }

    let (split_at, _) = trailing.char_indices().nth(TIMESTAMP_SEGMENT_LEN)?;
    let (segment, random_suffix) = trailing.split_at(split_at);
    let timestamp = decode_base36(segment)?;

    Some(ParsedInvite {
        vault_id,
        timestamp,
        random_suffix: random_suffix.to_string(),
    })
}

// == Helpers ==
/// Returns the vault id and whatever follows its digit run.
fn split_vault_id(code: &str) -> Option<(VaultId, &str)> {
    let rest = code.strip_prefix(INVITE_PREFIX)?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let vault_id = rest[..digits_end].parse().ok()?;
    Some((vault_id, &rest[digits_end..]))
}

/// Last four upper-case base-36 digits of `secs`, left-padded with zeros.
///
/// A leading decimal digit would be swallowed into the vault id on decode, so
/// it is shifted into the letter range (`0..=9` becomes `A..=J`).
fn timestamp_segment(secs: u64) -> String {
    let mut segment = [b'0'; TIMESTAMP_SEGMENT_LEN];
    let mut n = secs;
    for slot in segment.iter_mut().rev() {
        *slot = BASE36_DIGITS[(n % 36) as usize];
        n /= 36;
    }

    if segment[0].is_ascii_digit() {
        segment[0] = b'A' + (segment[0] - b'0');
    }

    segment.iter().map(|&b| b as char).collect()
}

fn decode_base36(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    u64::from_str_radix(segment, 36).ok()
}
