mod consent_prompt;
mod project_store;
mod python_runtime;

pub use consent_prompt::ConsentPrompt;
pub use project_store::ProjectStore;
pub use python_runtime::PythonRuntime;
