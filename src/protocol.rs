//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{ArithmeticQuestion, Operator, Tier};
use crate::exercise::Reveal;
use crate::session::{Phase, Score, Session};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Encode {
        value: i64,
    },
    Decode {
        text: String,
    },
    StartSession {
        #[serde(default)]
        difficulty: Option<String>,
    },
    SubmitAnswer {
        #[serde(rename = "sessionId")]
        session_id: String,
        answer: String,
    },
    NextQuestion {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
    ChangeDifficulty {
        #[serde(rename = "sessionId")]
        session_id: String,
        difficulty: String,
    },
    ResetScore {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Encoded {
        value: i64,
        german: String,
    },
    Decoded {
        text: String,
        value: Option<i64>,
    },
    Session {
        session: SessionOut,
    },
    AnswerResult {
        correct: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        expected: Option<Reveal>,
        session: SessionOut,
    },
    Error {
        message: String,
    },
}

/// Question as shown to the learner. The answer is not included.
#[derive(Debug, Serialize)]
pub struct QuestionOut {
    pub prompt: String,
    pub first: i64,
    pub second: i64,
    pub operator: Operator,
    pub symbol: &'static str,
}

impl From<&ArithmeticQuestion> for QuestionOut {
    fn from(q: &ArithmeticQuestion) -> Self {
        QuestionOut {
            prompt: q.rendered_prompt.clone(),
            first: q.display_first_operand,
            second: q.display_second_operand,
            operator: q.operator,
            symbol: q.operator.symbol(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreOut {
    pub correct: u32,
    pub total: u32,
    pub accuracy_percent: Option<u32>,
}

impl From<Score> for ScoreOut {
    fn from(s: Score) -> Self {
        ScoreOut { correct: s.correct, total: s.total, accuracy_percent: s.accuracy_percent() }
    }
}

/// DTO used by both WS and HTTP for session delivery.
#[derive(Debug, Serialize)]
pub struct SessionOut {
    pub id: String,
    pub difficulty: Tier,
    pub question: QuestionOut,
    pub phase: Phase,
    pub score: ScoreOut,
    /// Present once the current question has been answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Reveal>,
}

pub fn to_out(s: &Session) -> SessionOut {
    let expected = match s.phase {
        Phase::ShowingResult { .. } => crate::exercise::reveal(&s.question),
        Phase::AwaitingAnswer => None,
    };
    SessionOut {
        id: s.id.clone(),
        difficulty: s.difficulty,
        question: QuestionOut::from(&s.question),
        phase: s.phase.clone(),
        score: s.score.into(),
        expected,
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct EncodeQuery {
    pub value: i64,
}
#[derive(Debug, Serialize)]
pub struct EncodeOut {
    pub value: i64,
    pub german: String,
}

#[derive(Debug, Deserialize)]
pub struct DecodeIn {
    pub text: String,
}
#[derive(Debug, Serialize)]
pub struct DecodeOut {
    pub text: String,
    pub value: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DifficultyQuery {
    pub difficulty: Option<String>,
}

/// Stateless question: the full question is returned so the client can
/// send it back to `/validate`.
#[derive(Debug, Serialize)]
pub struct StatelessQuestionOut {
    pub difficulty: Tier,
    pub question: ArithmeticQuestion,
}

#[derive(Debug, Deserialize)]
pub struct ValidateIn {
    pub question: ArithmeticQuestion,
    pub answer: String,
}
#[derive(Debug, Serialize)]
pub struct ValidateOut {
    pub correct: bool,
    /// Absent when the submitted question has no integer result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Reveal>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StartSessionIn {
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerIn {
    pub answer: String,
}
#[derive(Debug, Serialize)]
pub struct AnswerOut {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Reveal>,
    pub session: SessionOut,
}

#[derive(Debug, Deserialize)]
pub struct ChangeDifficultyIn {
    pub difficulty: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
