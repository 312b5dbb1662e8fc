use crate::ports::{ConsentPrompt, ProjectStore, PythonRuntime};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProjectStore, P: PythonRuntime, C: ConsentPrompt> {
    store: S,
    python: P,
    consent: C,
}

impl<S: ProjectStore, P: PythonRuntime, C: ConsentPrompt> AppContext<S, P, C> {
    /// Create a new application context.
    pub fn new(store: S, python: P, consent: C) -> Self {
        Self { store, python, consent }
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the Python runtime.
    pub fn python(&self) -> &P {
        &self.python
    }

    /// Get a reference to the consent prompt.
    pub fn consent(&self) -> &C {
        &self.consent
    }
}
