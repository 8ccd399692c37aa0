//! Zahlen · German number trainer backend
//!
//! - German number words: integer ↔ word codec (`codec`, `lexicon`)
//! - Arithmetic exercises rendered in German, with free-text answer checking
//!   (`exercise`, `session`)
//! - Axum HTTP + WebSocket API over the above (`routes`)

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod exercise;
pub mod lexicon;
pub mod logic;
pub mod protocol;
pub mod routes;
pub mod session;
pub mod state;
pub mod telemetry;

pub use codec::{decode_german_word, encode_number, normalize_answer};
pub use domain::{ArithmeticQuestion, Operator, Tier};
pub use exercise::{generate_question, operator_to_german, validate_answer};
pub use routes::build_router;
pub use state::AppState;
