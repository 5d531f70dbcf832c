//! Sender -> system -> member resolution.
//!
//! Each stage gates the next: a sender without a system never has its member
//! list requested.

use pluralkit_types::Member;

use crate::error::ResolveError;
use crate::pluralkit::IdentityRegistry;

/// Uppercase the first character and leave the rest alone.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Find `member_name` in the sender's system.
///
/// A member matches on its exact name, or on the name with only the first
/// character uppercased. With duplicate names the first listed wins.
pub async fn resolve_member(
    registry: &dyn IdentityRegistry,
    sender_id: &str,
    member_name: &str,
) -> Result<Member, ResolveError> {
    let system = registry
        .resolve_sender(sender_id)
        .await
        .map_err(|_| ResolveError::SenderUnregistered)?;

    let members = match registry.list_members(sender_id, &system.id).await {
        Ok(members) => members,
        Err(_) => {
            log::debug!(
                "Resolve: Could not connect to member list of system {} (sender {})",
                system.id,
                sender_id
            );
            return Err(ResolveError::RegistryUnavailable);
        }
    };

    let capitalized = capitalize_first(member_name);
    match members
        .into_iter()
        .find(|m| m.name == member_name || m.name == capitalized)
    {
        Some(member) => {
            log::info!(
                "Resolve: {} obtained member {} of system {}",
                sender_id,
                member.name,
                system.id
            );
            Ok(member)
        }
        None => {
            log::debug!(
                "Resolve: {} not found in member list of system {} (sender {})",
                capitalized,
                system.id,
                sender_id
            );
            Err(ResolveError::MemberNotFound(capitalized))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRegistry, capture_logs, captured_logs, logs_mention};

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("alice"), "Alice");
        assert_eq!(capitalize_first("aLICE"), "ALICE");
        assert_eq!(capitalize_first("Alice"), "Alice");
        assert_eq!(capitalize_first("émile"), "Émile");
        assert_eq!(capitalize_first("1st"), "1st");
        assert_eq!(capitalize_first(""), "");
    }

    #[tokio::test]
    async fn test_unregistered_sender_skips_member_list() {
        let registry = FakeRegistry::new().with_system("1001", "exmpl", &["Alice"]);

        let result = resolve_member(&registry, "9999", "Alice").await;
        assert_eq!(result, Err(ResolveError::SenderUnregistered));
        assert_eq!(registry.member_calls(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_member_list() {
        let registry = FakeRegistry::new().with_unlisted_system("1001", "exmpl");

        let result = resolve_member(&registry, "1001", "Alice").await;
        assert_eq!(result, Err(ResolveError::RegistryUnavailable));
        assert_eq!(registry.member_calls(), 1);
    }

    #[tokio::test]
    async fn test_member_list_requested_for_sender() {
        let registry = FakeRegistry::new().with_system("1001", "exmpl", &["Alice"]);

        resolve_member(&registry, "1001", "Alice").await.unwrap();
        assert_eq!(
            registry.member_requests(),
            vec![("1001".to_string(), "exmpl".to_string())]
        );
    }

    #[tokio::test]
    async fn test_outcomes_logged_with_sender() {
        capture_logs();
        let registry = FakeRegistry::new()
            .with_system("4101", "sysaa", &["Alice"])
            .with_unlisted_system("4102", "sysbb");

        resolve_member(&registry, "4101", "zed").await.unwrap_err();
        resolve_member(&registry, "4102", "Alice").await.unwrap_err();
        resolve_member(&registry, "4101", "alice").await.unwrap();

        let logs = captured_logs();
        assert!(logs_mention(&logs, &["Zed", "sysaa", "4101"]));
        assert!(logs_mention(&logs, &["sysbb", "4102"]));
        assert!(logs_mention(&logs, &["Alice", "sysaa", "4101"]));
    }

    #[tokio::test]
    async fn test_exact_match() {
        let registry = FakeRegistry::new().with_system("1001", "exmpl", &["bob", "Alice"]);

        assert_eq!(resolve_member(&registry, "1001", "bob").await.unwrap().name, "bob");
        assert_eq!(resolve_member(&registry, "1001", "Alice").await.unwrap().name, "Alice");
    }

    #[tokio::test]
    async fn test_capitalized_fallback() {
        let registry = FakeRegistry::new().with_system("1001", "exmpl", &["Alice"]);

        let member = resolve_member(&registry, "1001", "alice").await.unwrap();
        assert_eq!(member.name, "Alice");
    }

    #[tokio::test]
    async fn test_no_other_normalization() {
        let registry = FakeRegistry::new().with_system("1001", "exmpl", &["Alice", "bob"]);

        // only the first character is changed
        assert_eq!(
            resolve_member(&registry, "1001", "ALICE").await,
            Err(ResolveError::MemberNotFound("ALICE".to_string()))
        );
        // no lowercase fallback
        assert_eq!(
            resolve_member(&registry, "1001", "Bob").await,
            Err(ResolveError::MemberNotFound("Bob".to_string()))
        );
        // no trimming
        assert!(resolve_member(&registry, "1001", " Alice").await.is_err());
    }

    #[tokio::test]
    async fn test_member_not_found_reports_capitalized_name() {
        let registry = FakeRegistry::new().with_system("1001", "exmpl", &["Alice"]);

        assert_eq!(
            resolve_member(&registry, "1001", "zed").await,
            Err(ResolveError::MemberNotFound("Zed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_duplicate_names_first_wins() {
        let mut first = Member::named("Alice");
        first.extra.insert("id".to_string(), "aaaaa".into());
        let mut second = Member::named("Alice");
        second.extra.insert("id".to_string(), "bbbbb".into());

        struct Dupes(Vec<Member>);

        #[async_trait::async_trait]
        impl IdentityRegistry for Dupes {
            async fn resolve_sender(
                &self,
                _sender_id: &str,
            ) -> Result<pluralkit_types::System, crate::error::RegistryError> {
                Ok(pluralkit_types::System { id: "exmpl".to_string() })
            }
            async fn list_members(
                &self,
                _sender_id: &str,
                _system_id: &str,
            ) -> Result<Vec<Member>, crate::error::RegistryError> {
                Ok(self.0.clone())
            }
            async fn list_fronters(
                &self,
                _sender_id: &str,
                _system_id: &str,
            ) -> Result<Vec<Member>, crate::error::RegistryError> {
                Ok(Vec::new())
            }
        }

        let registry = Dupes(vec![first, second]);
        let member = resolve_member(&registry, "1001", "alice").await.unwrap();
        assert_eq!(member.extra.get("id"), Some(&serde_json::Value::from("aaaaa")));
    }
}
