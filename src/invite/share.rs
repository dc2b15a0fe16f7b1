//! Share links for invite codes.

use super::codec::VaultId;

/// Path segment the frontend mounts the join flow under.
pub const JOIN_PATH: &str = "join";

/// Builds the link a member sends to a friend: `{base_url}/join/{vault_id}?invite={code}`.
///
/// `base_url` is used verbatim; pass the origin without a trailing slash.
pub fn build_share_url(vault_id: VaultId, code: &str, base_url: &str) -> String {
    format!("{base_url}/{JOIN_PATH}/{vault_id}?invite={code}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_share_url() {
        assert_eq!(
            build_share_url(888, "GOAL888ABC123XYZ", "https://example.com"),
            "https://example.com/join/888?invite=GOAL888ABC123XYZ"
        );
    }

    #[test]
    fn test_build_share_url_with_path_base() {
        assert_eq!(
            build_share_url(0, "GOAL0ABCDWXYZ", "http://localhost:5173/app"),
            "http://localhost:5173/app/join/0?invite=GOAL0ABCDWXYZ"
        );
    }
}
