use crate::domain::{AppError, SMOKE_TEST_SNIPPET};
use crate::ports::PythonRuntime;

/// Exercise pandas, matplotlib and streamlit once; any failure is `SmokeTestFailure`.
pub(crate) fn run_basic_tests<P: PythonRuntime>(python: &P) -> Result<(), AppError> {
    println!("\n🧪 Running basic tests...");

    match python.run_snippet(SMOKE_TEST_SNIPPET) {
        Ok(()) => {
            println!("   ✅ Pandas working");
            println!("   ✅ Matplotlib working");
            println!("   ✅ Streamlit working");
            Ok(())
        }
        Err(err) => {
            let details = match err {
                AppError::CommandFailed { details, .. } => details,
                other => other.to_string(),
            };
            println!("   ❌ Test failed: {}", details);
            Err(AppError::SmokeTestFailure(details))
        }
    }
}
