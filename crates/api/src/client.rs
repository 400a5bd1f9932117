//! Thin reqwest wrapper over the Slack Web API.
//!
//! Read methods go out as GET with query parameters, write methods as POST
//! with JSON bodies, all bearer-authenticated. Every response is decoded
//! through the platform's `{ok, error, ...}` envelope.

use {
    secrecy::{ExposeSecret, Secret},
    serde::de::DeserializeOwned,
    serde_json::json,
    tracing::debug,
};

use crate::{
    error::{ApiError, ApiResult},
    pagination::Page,
    types::{
        Ack, Conversation, ConversationDetail, ConversationInfoResponse,
        ConversationsListResponse, MembersResponse,
    },
};

/// Slack Web API base URL.
const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Page size for channel listings (`users.conversations`).
pub const CHANNEL_PAGE_LIMIT: u32 = 100;

/// Page size for membership listings (`conversations.members` maximum).
pub const MEMBER_PAGE_LIMIT: u32 = 1000;

/// Authenticated Slack Web API client.
#[derive(Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    base_url: String,
    token: Secret<String>,
}

impl SlackClient {
    pub fn new(token: Secret<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Point the client at a different API root (used by tests).
    pub fn with_base_url(token: Secret<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    async fn get<R: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> ApiResult<R> {
        let resp = self
            .http
            .get(format!("{}/{method}", self.base_url))
            .bearer_auth(self.token.expose_secret())
            .query(query)
            .send()
            .await?;
        Ok(resp.json::<R>().await?)
    }

    async fn post<R: DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> ApiResult<R> {
        let resp = self
            .http
            .post(format!("{}/{method}", self.base_url))
            .bearer_auth(self.token.expose_secret())
            .json(&body)
            .send()
            .await?;
        Ok(resp.json::<R>().await?)
    }

    /// POST a write method and check only the `ok` envelope.
    async fn post_ack(&self, method: &str, body: serde_json::Value) -> ApiResult<()> {
        let ack: Ack = self.post(method, body).await?;
        if !ack.ok {
            return Err(ApiError::slack(ack.error));
        }
        debug!(method, "slack call ok");
        Ok(())
    }

    /// One page of `users.conversations`, filtered to private channels.
    pub async fn private_channels_page(
        &self,
        cursor: Option<String>,
    ) -> ApiResult<Page<Conversation>> {
        let mut query = vec![
            ("types", "private_channel".to_string()),
            ("limit", CHANNEL_PAGE_LIMIT.to_string()),
        ];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor));
        }
        let resp: ConversationsListResponse = self.get("users.conversations", &query).await?;
        if !resp.ok {
            return Err(ApiError::slack(resp.error));
        }
        Ok(Page::new(
            resp.channels,
            resp.response_metadata.map(|m| m.next_cursor),
        ))
    }

    /// One page of `conversations.members` for the given channel.
    pub async fn members_page(
        &self,
        channel: &str,
        cursor: Option<String>,
    ) -> ApiResult<Page<String>> {
        let mut query = vec![
            ("channel", channel.to_string()),
            ("limit", MEMBER_PAGE_LIMIT.to_string()),
        ];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor));
        }
        let resp: MembersResponse = self.get("conversations.members", &query).await?;
        if !resp.ok {
            return Err(ApiError::slack(resp.error));
        }
        Ok(Page::new(
            resp.members,
            resp.response_metadata.map(|m| m.next_cursor),
        ))
    }

    /// Channel metadata with member counts via `conversations.info`.
    pub async fn conversation_info(&self, channel: &str) -> ApiResult<ConversationDetail> {
        let query = vec![
            ("channel", channel.to_string()),
            ("include_num_members", "true".to_string()),
        ];
        let resp: ConversationInfoResponse = self.get("conversations.info", &query).await?;
        if !resp.ok {
            return Err(ApiError::slack(resp.error));
        }
        resp.channel.ok_or(ApiError::Malformed("channel"))
    }

    /// Invite a user into a channel via `conversations.invite`.
    pub async fn invite(&self, channel: &str, user: &str) -> ApiResult<()> {
        self.post_ack(
            "conversations.invite",
            json!({ "channel": channel, "users": user }),
        )
        .await
    }

    /// Leave a channel via `conversations.leave`.
    pub async fn leave(&self, channel: &str) -> ApiResult<()> {
        self.post_ack("conversations.leave", json!({ "channel": channel }))
            .await
    }

    /// Post a message via `chat.postMessage`. A user id as the channel
    /// delivers a direct message.
    pub async fn post_message(&self, channel: &str, text: &str) -> ApiResult<()> {
        self.post_ack(
            "chat.postMessage",
            json!({ "channel": channel, "text": text }),
        )
        .await
    }

    /// Add an emoji reaction to a message via `reactions.add`.
    pub async fn add_reaction(&self, channel: &str, timestamp: &str, name: &str) -> ApiResult<()> {
        self.post_ack(
            "reactions.add",
            json!({ "channel": channel, "timestamp": timestamp, "name": name }),
        )
        .await
    }

    /// Open a modal via `views.open`.
    pub async fn open_view(&self, trigger_id: &str, view: serde_json::Value) -> ApiResult<()> {
        self.post_ack(
            "views.open",
            json!({ "trigger_id": trigger_id, "view": view }),
        )
        .await
    }

    /// Publish a home view via `views.publish`.
    pub async fn publish_view(&self, user_id: &str, view: serde_json::Value) -> ApiResult<()> {
        self.post_ack(
            "views.publish",
            json!({ "user_id": user_id, "view": view }),
        )
        .await
    }
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use {mockito::Matcher, secrecy::Secret, serde_json::json};

    use super::*;

    fn client(server: &mockito::ServerGuard) -> SlackClient {
        SlackClient::with_base_url(Secret::new("xoxb-test".into()), server.url())
    }

    #[tokio::test]
    async fn invite_posts_channel_and_user() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/conversations.invite")
            .match_header("authorization", "Bearer xoxb-test")
            .match_body(Matcher::Json(json!({ "channel": "G1", "users": "U1" })))
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        client(&server).invite("G1", "U1").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn invite_surfaces_platform_error_code() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/conversations.invite")
            .with_body(r#"{"ok": false, "error": "already_in_channel"}"#)
            .create_async()
            .await;

        let err = client(&server).invite("G1", "U1").await.unwrap_err();
        assert!(matches!(err, ApiError::Slack(code) if code == "already_in_channel"));
    }

    #[tokio::test]
    async fn conversation_info_decodes_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/conversations.info")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("channel".into(), "G9".into()),
                Matcher::UrlEncoded("include_num_members".into(), "true".into()),
            ]))
            .with_body(
                r#"{"ok": true, "channel": {"id": "G9", "name": "ops",
                    "topic": {"value": "on-call"}, "purpose": {"value": "incidents"},
                    "num_members": 12}}"#,
            )
            .create_async()
            .await;

        let detail = client(&server).conversation_info("G9").await.unwrap();
        assert_eq!(detail.name, "ops");
        assert_eq!(detail.topic.value, "on-call");
        assert_eq!(detail.num_members, 12);
    }

    #[tokio::test]
    async fn conversation_info_missing_channel_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/conversations.info")
            .match_query(Matcher::Any)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let err = client(&server).conversation_info("G9").await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed("channel")));
    }

    #[tokio::test]
    async fn members_page_carries_cursor() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/conversations.members")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("channel".into(), "C0".into()),
                Matcher::UrlEncoded("limit".into(), "1000".into()),
                Matcher::UrlEncoded("cursor".into(), "tok".into()),
            ]))
            .with_body(
                r#"{"ok": true, "members": ["U1", "U2"],
                    "response_metadata": {"next_cursor": ""}}"#,
            )
            .create_async()
            .await;

        let page = client(&server)
            .members_page("C0", Some("tok".into()))
            .await
            .unwrap();
        assert_eq!(page.items, vec!["U1", "U2"]);
        assert_eq!(page.next_cursor.as_deref(), Some(""));
    }
}
