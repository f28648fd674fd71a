use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};
use validator::Validate;

use crate::backend::SlotStore;
use crate::configuration::Configuration;
use crate::error::SlotError;
use crate::notifications::NotificationHub;
use crate::service::SlotService;
use crate::types::{ClientDetails, NewSlot, Slot};

#[derive(Clone)]
pub struct AppState<S: SlotStore, C: Configuration> {
    service: SlotService<S>,
    hub: NotificationHub,
    configuration: C,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct CreateSlotRequest {
    #[validate(length(min = 1, message = "date must not be empty"))]
    date: String,
    #[validate(length(min = 1, message = "time must not be empty"))]
    time: String,
    #[serde(default)]
    is_booked: bool,
    client_name: Option<String>,
    client_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct BookingRequest {
    #[validate(length(min = 1, message = "client_name must not be empty"))]
    client_name: String,
    #[validate(length(min = 1, message = "client_email must not be empty"))]
    client_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteResponse {
    ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteAllResponse {
    ok: bool,
    deleted: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingResponse {
    ok: bool,
    message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginResponse {
    success: bool,
    token: String,
}

pub fn create_app<S: SlotStore, C: Configuration>(store: S, configuration: C) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let hub = NotificationHub::new();
    let service = SlotService::new(store, hub.clone());
    let state = AppState {
        service,
        hub,
        configuration,
    };

    Router::new()
        .route("/slots/", post(create_slot).get(list_all_slots))
        .route("/slots/:key", get(list_slots_by_date).delete(delete_slot))
        .route("/slots_all/", delete(delete_all_slots))
        .route("/book/:id", post(book_slot))
        .route("/login", post(login))
        .route("/ws", get(subscribe_notifications))
        .with_state(state)
        .layer(cors)
}

async fn create_slot<S: SlotStore, C: Configuration>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<CreateSlotRequest>,
) -> Result<Json<Slot>, SlotError> {
    request
        .validate()
        .map_err(|err| SlotError::InvalidRequest(err.to_string()))?;

    let client = request
        .client_name
        .zip(request.client_email)
        .map(|(client_name, client_email)| ClientDetails {
            client_name,
            client_email,
        });
    let slot = state.service.create_slot(NewSlot {
        date: request.date,
        time: request.time,
        is_booked: request.is_booked,
        client,
    })?;
    Ok(Json(slot))
}

async fn list_all_slots<S: SlotStore, C: Configuration>(
    State(state): State<AppState<S, C>>,
) -> Result<Json<Vec<Slot>>, SlotError> {
    let slots = state.service.list_slots(None)?;
    Ok(Json(slots))
}

async fn list_slots_by_date<S: SlotStore, C: Configuration>(
    State(state): State<AppState<S, C>>,
    Path(slot_date): Path<String>,
) -> Result<Json<Vec<Slot>>, SlotError> {
    let slots = state.service.list_slots(Some(&slot_date))?;
    Ok(Json(slots))
}

async fn delete_slot<S: SlotStore, C: Configuration>(
    State(state): State<AppState<S, C>>,
    Path(slot_id): Path<i32>,
) -> Result<Json<DeleteResponse>, SlotError> {
    state.service.delete_slot(slot_id)?;
    Ok(Json(DeleteResponse { ok: true }))
}

async fn delete_all_slots<S: SlotStore, C: Configuration>(
    State(state): State<AppState<S, C>>,
) -> Result<Json<DeleteAllResponse>, SlotError> {
    let deleted = state.service.delete_all_slots()?;
    Ok(Json(DeleteAllResponse { ok: true, deleted }))
}

async fn book_slot<S: SlotStore, C: Configuration>(
    State(state): State<AppState<S, C>>,
    Path(slot_id): Path<i32>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, SlotError> {
    request
        .validate()
        .map_err(|err| SlotError::InvalidRequest(err.to_string()))?;

    state.service.book_slot(
        slot_id,
        ClientDetails {
            client_name: request.client_name,
            client_email: request.client_email,
        },
    )?;
    Ok(Json(BookingResponse {
        ok: true,
        message: "Slot booked".into(),
    }))
}

async fn login<S: SlotStore, C: Configuration>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, SlotError> {
    if request.username != state.configuration.admin_username()
        || request.password != state.configuration.admin_password()
    {
        return Err(SlotError::InvalidCredentials);
    }
    Ok(Json(LoginResponse {
        success: true,
        token: state.configuration.access_token(),
    }))
}

async fn subscribe_notifications<S: SlotStore, C: Configuration>(
    ws: WebSocketUpgrade,
    State(state): State<AppState<S, C>>,
) -> impl IntoResponse {
    let hub = state.hub.clone();
    ws.on_upgrade(move |socket| notification_session(socket, hub))
}

async fn notification_session(socket: WebSocket, hub: NotificationHub) {
    let (mut sink, mut remote) = socket.split();
    let mut events = BroadcastStream::new(hub.subscribe());
    info!(viewers = hub.subscriber_count(), "notification viewer connected");

    let mut forward = tokio::spawn(async move {
        while let Some(event) = events.next().await {
            // A lagged viewer skips dropped events; it catches up
            // through its next slot-list fetch.
            let Ok(event) = event else { continue };
            let Ok(payload) = serde_json::to_string(&event) else {
                continue;
            };
            if sink.send(Message::Text(payload)).await.is_err() {
                break;
            }
        }
    });

    // Viewers send no meaningful data; reading serves only to detect
    // the peer going away.
    let mut liveness = tokio::spawn(async move {
        while let Some(Ok(message)) = remote.next().await {
            match message {
                Message::Close(_) => break,
                _ => debug!("ignoring viewer payload on notification channel"),
            }
        }
    });

    // Whichever side finishes first, tear the session down so the
    // hub subscription is dropped right away.
    tokio::select! {
        _ = &mut forward => liveness.abort(),
        _ = &mut liveness => forward.abort(),
    }
    info!("notification viewer disconnected");
}
