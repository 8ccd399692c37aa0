//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::error::ApiError;
use crate::logic::*;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(ws, state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "zahlen_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "zahlen_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply = reply_to_text(&txt, &state).await;
        if let Err(e) = socket.send(Message::Text(reply)).await {
          error!(target: "zahlen_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "zahlen_backend", "WebSocket disconnected");
}

/// Parse, dispatch and serialize one text frame.
pub async fn reply_to_text(txt: &str, state: &AppState) -> String {
  let reply_msg = match serde_json::from_str::<ClientWsMessage>(txt) {
    Ok(incoming) => {
      debug!(target: "zahlen_backend", "WS received: {:?}", &incoming);
      handle_client_ws(incoming, state).await
    }
    Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
  };

  serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  let result: Result<ServerWsMessage, ApiError> = match msg {
    ClientWsMessage::Ping => Ok(ServerWsMessage::Pong),

    ClientWsMessage::Encode { value } => {
      let out = do_encode(value);
      Ok(ServerWsMessage::Encoded { value: out.value, german: out.german })
    }

    ClientWsMessage::Decode { text } => {
      let out = do_decode(text);
      Ok(ServerWsMessage::Decoded { text: out.text, value: out.value })
    }

    ClientWsMessage::StartSession { difficulty } => start_session(state, difficulty.as_deref())
      .await
      .map(|session| ServerWsMessage::Session { session }),

    ClientWsMessage::SubmitAnswer { session_id, answer } => submit_answer(state, &session_id, &answer)
      .await
      .map(|out| ServerWsMessage::AnswerResult { correct: out.correct, expected: out.expected, session: out.session }),

    ClientWsMessage::NextQuestion { session_id } => next_question(state, &session_id)
      .await
      .map(|session| ServerWsMessage::Session { session }),

    ClientWsMessage::ChangeDifficulty { session_id, difficulty } => change_difficulty(state, &session_id, &difficulty)
      .await
      .map(|session| ServerWsMessage::Session { session }),

    ClientWsMessage::ResetScore { session_id } => reset_score(state, &session_id)
      .await
      .map(|session| ServerWsMessage::Session { session }),
  };

  result.unwrap_or_else(|e| ServerWsMessage::Error { message: e.to_string() })
}
