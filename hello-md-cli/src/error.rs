use thiserror::Error;

use hello_md_lib::GenerateError;

/// Errors that can occur during CLI execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Writing the markdown file failed
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
