//! Cache key builders
//!
//! Keys are `kind:identifier` so entries for different entity kinds never collide.

use crate::invite::VaultId;

/// Indexed vault record.
pub fn vault(vault_id: VaultId) -> String {
    format!("vault:{}", vault_id)
}

/// Member list of a vault.
pub fn vault_members(vault_id: VaultId) -> String {
    format!("vault_members:{}", vault_id)
}

/// Vaults a wallet belongs to. Addresses are case-insensitive, so the key is lower-cased.
pub fn user_vaults(address: &str) -> String {
    format!("user_vaults:{}", address.to_ascii_lowercase())
}
