mod fake_python;
mod read_only_permissions_store;
mod scripted_consent;

pub use fake_python::FakePython;
pub use read_only_permissions_store::ReadOnlyPermissionsStore;
pub use scripted_consent::ScriptedConsent;
