use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::document::{ConfigDocument, SOURCE_FILE_NAME};
use crate::emit::{env_file_name, Emitter};
use crate::error::{Error, Result, WriteFailure};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Every file written, in environment discovery order.
    pub created_files: Vec<PathBuf>,

    /// The file of the first discovered environment, `None` when the
    /// document names no environments at all.
    pub first_created_file: Option<PathBuf>,
}

/// Convert `<workspace>/env.json` into one `.env.<environment>` file per
/// environment named anywhere in the document.
///
/// The workspace directory is an explicit parameter so the caller stays in
/// charge of where the tool reads and writes. Existing output files are
/// overwritten in place. A document that names no environments writes
/// nothing, which is not an error. A failed write does not stop the
/// remaining environments; every failure ends up in [`Error::Write`].
pub fn convert(workspace: &Path) -> Result<Conversion> {
    let source = workspace.join(SOURCE_FILE_NAME);
    let doc = ConfigDocument::load_from_path(&source)?;

    let environments = doc.environment_names();
    debug!(count = environments.len(), "discovered environments");

    let emitter = Emitter::new();
    let mut created_files = Vec::with_capacity(environments.len());
    let mut failures = Vec::new();

    for environment in &environments {
        let target = workspace.join(env_file_name(environment));
        let body = emitter.render(&doc, environment);

        match fs::write(&target, &body) {
            Ok(()) => {
                info!(path = %target.display(), "wrote environment file");
                created_files.push(target);
            }
            Err(source) => failures.push(WriteFailure {
                path: target,
                source,
            }),
        }
    }

    if !failures.is_empty() {
        return Err(Error::Write { failures });
    }

    let first_created_file = created_files.first().cloned();
    Ok(Conversion {
        created_files,
        first_created_file,
    })
}
