//! Specialized listings over the generic paginator, and the capability
//! trait the join-request flow depends on.

use async_trait::async_trait;

use crate::{
    client::SlackClient,
    error::ApiResult,
    pagination::collect_pages,
};

/// A selectable channel (id plus display name) for the join modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOption {
    pub id: String,
    pub name: String,
}

impl SlackClient {
    /// Every private channel the bot belongs to, as modal options.
    pub async fn list_private_channel_options(&self) -> ApiResult<Vec<ChannelOption>> {
        let channels = collect_pages(|cursor| self.private_channels_page(cursor)).await?;
        Ok(channels
            .into_iter()
            .map(|c| ChannelOption {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// Ids of every private channel the bot belongs to.
    pub async fn list_private_channel_ids(&self) -> ApiResult<Vec<String>> {
        let channels = collect_pages(|cursor| self.private_channels_page(cursor)).await?;
        Ok(channels.into_iter().map(|c| c.id).collect())
    }

    /// Ids of every member of the given channel.
    pub async fn list_member_ids(&self, channel: &str) -> ApiResult<Vec<String>> {
        collect_pages(|cursor| self.members_page(channel, cursor)).await
    }
}

/// The conversation operations the join-request flow needs.
///
/// Handlers take this instead of the full client so the decision logic can
/// be exercised against a recording fake.
#[async_trait]
pub trait ConversationApi: Send + Sync {
    /// All member ids of a channel, paginated to exhaustion.
    async fn member_ids(&self, channel: &str) -> ApiResult<Vec<String>>;

    /// Invite a user into a channel.
    async fn invite_user(&self, channel: &str, user: &str) -> ApiResult<()>;

    /// Direct-message a user.
    async fn notify(&self, user: &str, text: &str) -> ApiResult<()>;
}

#[async_trait]
impl ConversationApi for SlackClient {
    async fn member_ids(&self, channel: &str) -> ApiResult<Vec<String>> {
        self.list_member_ids(channel).await
    }

    async fn invite_user(&self, channel: &str, user: &str) -> ApiResult<()> {
        self.invite(channel, user).await
    }

    async fn notify(&self, user: &str, text: &str) -> ApiResult<()> {
        self.post_message(user, text).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use {mockito::Matcher, secrecy::Secret};

    use {super::*, crate::error::ApiError};

    fn client(server: &mockito::ServerGuard) -> SlackClient {
        SlackClient::with_base_url(Secret::new("xoxb-test".into()), server.url())
    }

    #[tokio::test]
    async fn walks_channel_pages_to_exhaustion() {
        let mut server = mockito::Server::new_async().await;
        // Mocks match LIFO, so the cursor-bearing page is declared second.
        let first = server
            .mock("GET", "/users.conversations")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("types".into(), "private_channel".into()),
                Matcher::UrlEncoded("limit".into(), "100".into()),
            ]))
            .with_body(
                r#"{"ok": true, "channels": [{"id": "G1", "name": "alpha"}],
                    "response_metadata": {"next_cursor": "cur1"}}"#,
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", "/users.conversations")
            .match_query(Matcher::UrlEncoded("cursor".into(), "cur1".into()))
            .with_body(
                r#"{"ok": true, "channels": [{"id": "G2", "name": "beta"}],
                    "response_metadata": {"next_cursor": ""}}"#,
            )
            .create_async()
            .await;

        let options = client(&server).list_private_channel_options().await.unwrap();
        assert_eq!(options, vec![
            ChannelOption {
                id: "G1".into(),
                name: "alpha".into()
            },
            ChannelOption {
                id: "G2".into(),
                name: "beta".into()
            },
        ]);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn channel_ids_project_id_only() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users.conversations")
            .match_query(Matcher::Any)
            .with_body(r#"{"ok": true, "channels": [{"id": "G7", "name": "x"}]}"#)
            .create_async()
            .await;

        let ids = client(&server).list_private_channel_ids().await.unwrap();
        assert_eq!(ids, vec!["G7"]);
    }

    #[tokio::test]
    async fn failed_first_page_reports_error_not_empty_list() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users.conversations")
            .match_query(Matcher::Any)
            .with_body(r#"{"ok": false, "error": "invalid_auth"}"#)
            .create_async()
            .await;

        let err = client(&server).list_private_channel_ids().await.unwrap_err();
        assert!(matches!(err, ApiError::Slack(code) if code == "invalid_auth"));
    }

    #[tokio::test]
    async fn member_ids_span_pages() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/conversations.members")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("channel".into(), "C0".into()),
                Matcher::UrlEncoded("limit".into(), "1000".into()),
            ]))
            .with_body(
                r#"{"ok": true, "members": ["U1"],
                    "response_metadata": {"next_cursor": "m2"}}"#,
            )
            .create_async()
            .await;
        server
            .mock("GET", "/conversations.members")
            .match_query(Matcher::UrlEncoded("cursor".into(), "m2".into()))
            .with_body(r#"{"ok": true, "members": ["U2"]}"#)
            .create_async()
            .await;

        let members = client(&server).member_ids("C0").await.unwrap();
        assert_eq!(members, vec!["U1", "U2"]);
    }
}
