//! HTTP surface: liveness plus the three Slack delivery routes.
//!
//! Every Slack route verifies the signature headers against the raw body
//! before parsing. Deliveries are acknowledged with 200 immediately; the
//! actual API work runs on spawned tasks so the platform's response-time
//! contract is met. Handler failures are logged, never returned — a non-200
//! would only make Slack redeliver.

use std::time::{SystemTime, UNIX_EPOCH};

use {
    axum::{
        Router,
        body::Bytes,
        extract::State,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
        routing::{get, post},
    },
    secrecy::ExposeSecret,
    tower_http::trace::TraceLayer,
    tracing::{debug, error, warn},
};

use concierge_blocks::modal::JOIN_CALLBACK_ID;

use crate::{
    context::AppContext,
    events::{Event, EventsPayload, Interaction},
    handlers::{home, mention, modal, submission},
    signature,
};

/// Build the application router.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/slack/events", post(events))
        .route("/slack/interactivity", post(interactivity))
        .route("/slack/commands", post(commands))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn liveness() -> &'static str {
    "concierge is running"
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Check the signature headers against the raw body; `None` means reject.
fn verified_body(ctx: &AppContext, headers: &HeaderMap, body: Bytes) -> Option<Bytes> {
    let timestamp = headers.get(signature::TIMESTAMP_HEADER)?.to_str().ok()?;
    let sig = headers.get(signature::SIGNATURE_HEADER)?.to_str().ok()?;
    signature::verify(
        ctx.config.signing_secret.expose_secret(),
        timestamp,
        sig,
        &body,
        now_secs(),
    )
    .then_some(body)
}

/// Dump the raw inbound payload when request logging is enabled.
fn dump_request(ctx: &AppContext, route: &str, body: &[u8]) {
    if ctx.config.request_log_enabled {
        debug!(route, body = %String::from_utf8_lossy(body), "inbound slack request");
    }
}

/// Decode one field of a form-encoded body.
fn form_field(body: &[u8], name: &str) -> Option<String> {
    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

async fn events(State(ctx): State<AppContext>, headers: HeaderMap, body: Bytes) -> Response {
    let Some(body) = verified_body(&ctx, &headers, body) else {
        warn!("rejecting events delivery with bad signature");
        return StatusCode::UNAUTHORIZED.into_response();
    };
    dump_request(&ctx, "events", &body);

    let payload: EventsPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "undecodable events payload");
            return StatusCode::OK.into_response();
        },
    };

    match payload {
        EventsPayload::UrlVerification { challenge } => challenge.into_response(),
        EventsPayload::EventCallback { event } => {
            dispatch_event(ctx, event);
            StatusCode::OK.into_response()
        },
        EventsPayload::Other => StatusCode::OK.into_response(),
    }
}

/// Ack the delivery and run the handler on a spawned task.
fn dispatch_event(ctx: AppContext, event: Event) {
    tokio::spawn(async move {
        let result = match &event {
            Event::AppMention(event) => mention::handle_mention(&ctx, event).await,
            Event::AppHomeOpened(event) => home::handle_home_opened(&ctx, event).await,
            Event::Other => Ok(()),
        };
        if let Err(e) = result {
            error!(error = %e, "event handler failed");
        }
    });
}

async fn interactivity(State(ctx): State<AppContext>, headers: HeaderMap, body: Bytes) -> Response {
    let Some(body) = verified_body(&ctx, &headers, body) else {
        warn!("rejecting interactivity delivery with bad signature");
        return StatusCode::UNAUTHORIZED.into_response();
    };
    dump_request(&ctx, "interactivity", &body);

    let Some(payload) = form_field(&body, "payload") else {
        warn!("interactivity delivery without payload field");
        return StatusCode::OK.into_response();
    };
    let interaction: Interaction = match serde_json::from_str(&payload) {
        Ok(interaction) => interaction,
        Err(e) => {
            warn!(error = %e, "undecodable interaction payload");
            return StatusCode::OK.into_response();
        },
    };

    match interaction {
        Interaction::Shortcut { trigger_id } => {
            tokio::spawn(async move {
                if let Err(e) = modal::open_join_modal(&ctx, &trigger_id).await {
                    error!(error = %e, "modal open failed");
                }
            });
            StatusCode::OK.into_response()
        },
        Interaction::ViewSubmission { user, view } => {
            if view.callback_id != JOIN_CALLBACK_ID {
                return StatusCode::OK.into_response();
            }
            let Some(selected) = view.selected_channel() else {
                warn!(callback_id = %view.callback_id, "submission without a selection");
                return StatusCode::OK.into_response();
            };
            // Ack first: the empty 200 goes out as soon as this handler
            // returns, and the decision flow runs on its own task.
            tokio::spawn(async move {
                submission::process_submission(
                    ctx.api.as_ref(),
                    &ctx.config.master_channel_id,
                    &user.id,
                    &selected,
                )
                .await;
            });
            StatusCode::OK.into_response()
        },
        Interaction::Other => StatusCode::OK.into_response(),
    }
}

async fn commands(State(ctx): State<AppContext>, headers: HeaderMap, body: Bytes) -> Response {
    let Some(body) = verified_body(&ctx, &headers, body) else {
        warn!("rejecting command delivery with bad signature");
        return StatusCode::UNAUTHORIZED.into_response();
    };
    dump_request(&ctx, "commands", &body);

    let Some(trigger_id) = form_field(&body, "trigger_id") else {
        warn!("command delivery without trigger_id");
        return StatusCode::OK.into_response();
    };

    tokio::spawn(async move {
        if let Err(e) = modal::open_join_modal(&ctx, &trigger_id).await {
            error!(error = %e, "modal open failed");
        }
    });
    StatusCode::OK.into_response()
}
