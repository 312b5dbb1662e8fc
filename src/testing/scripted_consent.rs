use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::AppError;
use crate::ports::ConsentPrompt;

pub struct ScriptedConsent {
    answer: bool,
    asked: AtomicUsize,
}

impl ScriptedConsent {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: AtomicUsize::new(0) }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl ConsentPrompt for ScriptedConsent {
    fn confirm(&self, _question: &str) -> Result<bool, AppError> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}
