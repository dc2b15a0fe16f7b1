//! Property-Based Tests for Invite Module

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::ManualClock;
use crate::invite::{decode_vault_id, is_valid_format, parse, InviteCodec, INVITE_PREFIX};

// == Strategies ==
/// Unix milliseconds between 2001 and 2286
fn issue_time_strategy() -> impl Strategy<Value = u64> {
    1_000_000_000_000u64..9_999_999_999_999u64
}

/// Strings that look like codes some of the time
fn code_like_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,20}".prop_map(|s| s),
        "GOAL[0-9]{0,6}[A-Z0-9]{0,10}".prop_map(|s| s),
        "GOAL[0-9]{1,3}.{0,10}".prop_map(|s| s),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every minted code decodes back to the vault it was minted for.
    #[test]
    fn prop_encode_decode_round_trip(
        vault_id in any::<u64>(),
        now_ms in issue_time_strategy(),
        seed in any::<u64>()
    ) {
        let codec = InviteCodec::with_clock(ManualClock::new(now_ms));
        let code = codec.encode_with_rng(vault_id, &mut StdRng::seed_from_u64(seed));

        prop_assert!(code.starts_with(INVITE_PREFIX));
        prop_assert_eq!(decode_vault_id(&code), Some(vault_id));
    }

    // Minted codes always carry enough trailing characters to parse.
    #[test]
    fn prop_encoded_codes_parse(
        vault_id in any::<u64>(),
        now_ms in issue_time_strategy(),
        seed in any::<u64>()
    ) {
        let codec = InviteCodec::with_clock(ManualClock::new(now_ms));
        let code = codec.encode_with_rng(vault_id, &mut StdRng::seed_from_u64(seed));

        let parsed = parse(&code);
        prop_assert!(parsed.is_some(), "minted code {} did not parse", code);
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.vault_id, vault_id);
        prop_assert!(!parsed.random_suffix.is_empty());
        prop_assert!(parsed.timestamp < 36u64.pow(4));
    }

    // Format validity is exactly "a vault id can be decoded".
    #[test]
    fn prop_valid_format_matches_decode(code in code_like_strategy()) {
        prop_assert_eq!(is_valid_format(&code), decode_vault_id(&code).is_some());
    }

    // Anything parse accepts also passes the looser format check.
    #[test]
    fn prop_parse_implies_valid_format(code in code_like_strategy()) {
        if let Some(parsed) = parse(&code) {
            prop_assert!(is_valid_format(&code));
            prop_assert_eq!(decode_vault_id(&code), Some(parsed.vault_id));
        }
    }
}
