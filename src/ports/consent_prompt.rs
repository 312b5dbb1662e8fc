use crate::domain::AppError;

/// Port for asking the operator a yes/no question.
pub trait ConsentPrompt {
    /// Ask `question`; `Ok(false)` means declined.
    fn confirm(&self, question: &str) -> Result<bool, AppError>;
}
