mod loader;

pub use loader::{
    DEFAULT_QUESTIONS_PATH, LoadError, QuestionBank, bank, load_bank_from_path,
    load_bank_from_str,
};
