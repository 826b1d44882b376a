use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

use crate::engine::grading;
use crate::models::{BatchId, Question, QuestionId};

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Errors raised while reading the question document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse question document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Question {n} appears more than once (batches {first} and {second})")]
    DuplicateQuestion {
        n: QuestionId,
        first: BatchId,
        second: BatchId,
    },
}

#[derive(Deserialize)]
struct BankDocument {
    lotes: Vec<BatchDocument>,
}

#[derive(Deserialize)]
struct BatchDocument {
    lote_id: BatchId,
    preguntas: Vec<QuestionDocument>,
}

#[derive(Deserialize)]
struct QuestionDocument {
    n: QuestionId,
    pregunta: String,
    respuesta_a: String,
    respuesta_b: String,
    respuesta_c: String,
    correcta: serde_json::Value,
}

impl QuestionDocument {
    fn into_question(self, batch_id: BatchId) -> Question {
        let correct = match self.correcta {
            serde_json::Value::String(text) => Some(text),
            _ => None,
        };

        Question {
            n: self.n,
            batch_id,
            prompt: self.pregunta,
            options: [self.respuesta_a, self.respuesta_b, self.respuesta_c],
            correct,
        }
    }
}

/// The flattened, read-only list of questions in load order.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    /// Builds a bank from already flattened questions, rejecting duplicate ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        let mut positions = HashMap::with_capacity(questions.len());

        for (index, question) in questions.iter().enumerate() {
            if let Some(&previous) = positions.get(&question.n) {
                let first: &Question = &questions[previous];
                return Err(LoadError::DuplicateQuestion {
                    n: question.n,
                    first: first.batch_id,
                    second: question.batch_id,
                });
            }
            positions.insert(question.n, index);
        }

        Ok(Self {
            questions,
            positions,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, n: QuestionId) -> Option<&Question> {
        self.positions.get(&n).map(|&index| &self.questions[index])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn batch(&self, batch_id: BatchId) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.batch_id == batch_id)
    }
}

pub fn load_bank_from_str(json: &str) -> Result<QuestionBank, LoadError> {
    let document: BankDocument = serde_json::from_str(json)?;

    let questions: Vec<Question> = document
        .lotes
        .into_iter()
        .flat_map(|batch| {
            let batch_id = batch.lote_id;
            batch
                .preguntas
                .into_iter()
                .map(move |question| question.into_question(batch_id))
        })
        .collect();

    for question in &questions {
        if grading::resolve_letter(question).is_none() {
            tracing::warn!(
                n = question.n,
                correcta = question.correct.as_deref().unwrap_or("<not a string>"),
                "answer key matches no letter or option, falling back to A"
            );
        }
    }

    QuestionBank::new(questions)
}

pub fn load_bank_from_path<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = load_bank_from_str(&json_content)?;
    tracing::info!(
        path = %path.display(),
        questions = bank.len(),
        "question bank loaded"
    );
    Ok(bank)
}

static BANK: OnceCell<QuestionBank> = OnceCell::new();

/// Process-wide bank, read from `path` on the first call only.
///
/// Later calls return the cached bank and ignore `path`.
pub fn bank<P: AsRef<Path>>(path: P) -> Result<&'static QuestionBank, LoadError> {
    BANK.get_or_try_init(|| load_bank_from_path(path))
}
