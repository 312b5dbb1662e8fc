use crate::domain::{AppError, DependencyRequirement};
use crate::ports::{ConsentPrompt, PythonRuntime};

/// Probe each requirement and return the packages that failed to import, in order.
pub(crate) fn check_dependencies<P: PythonRuntime>(
    python: &P,
    requirements: &[DependencyRequirement],
) -> Result<Vec<String>, AppError> {
    println!("\n📦 Checking dependencies...");

    let mut missing = Vec::new();
    for requirement in requirements {
        if python.has_module(requirement.module)? {
            println!("   ✅ {}", requirement.package);
        } else {
            println!("   ❌ {} (missing)", requirement.package);
            missing.push(requirement.package.to_string());
        }
    }
    Ok(missing)
}

/// Install `missing` after operator consent.
///
/// Returns the installed packages (empty when nothing was missing). Declining,
/// or a failing pip run, is `DependencyResolutionIncomplete`.
pub(crate) fn install_missing<P, C>(
    python: &P,
    consent: &C,
    missing: &[String],
) -> Result<Vec<String>, AppError>
where
    P: PythonRuntime,
    C: ConsentPrompt,
{
    if missing.is_empty() {
        return Ok(Vec::new());
    }

    println!();
    if !consent.confirm("Install missing packages?")? {
        println!("⚠️  Please install missing packages manually before proceeding.");
        println!("   pip install {}", missing.join(" "));
        return Err(AppError::DependencyResolutionIncomplete {
            missing: missing.to_vec(),
            reason: "installation declined".to_string(),
        });
    }

    println!("\n🔧 Installing missing packages: {}", missing.join(", "));
    match python.install(missing) {
        Ok(()) => {
            println!("✅ All packages installed successfully!");
            Ok(missing.to_vec())
        }
        Err(AppError::CommandFailed { details, .. }) => {
            println!("❌ Failed to install packages. Please install manually:");
            println!("   pip install {}", missing.join(" "));
            Err(AppError::DependencyResolutionIncomplete {
                missing: missing.to_vec(),
                reason: format!("installation failed: {}", details),
            })
        }
        Err(err) => Err(err),
    }
}
