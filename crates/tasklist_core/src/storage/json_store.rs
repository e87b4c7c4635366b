use crate::error::AppError;
use crate::model::Task;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "tasklist.json";
const STORE_ENV_VAR: &str = "TASKLIST_STORE_PATH";

/// `TASKLIST_STORE_PATH` when set, otherwise `tasklist.json` in the working
/// directory.
pub fn store_path() -> PathBuf {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }
    PathBuf::from(STORE_FILE_NAME)
}

/// Reads the whole snapshot. A missing file is an empty list; anything that
/// does not decode into fully valid tasks is `invalid_data`.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no task store yet");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_data(format!("invalid task store {}: {}", path.display(), err))
    })?;

    tracing::info!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Overwrites the file with the full list.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content = serde_json::to_string_pretty(tasks)
        .map_err(|err| AppError::invalid_data(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions).map_err(|err| AppError::io(err.to_string()))?;
    }

    tracing::info!(path = %path.display(), count = tasks.len(), "saved tasks");
    Ok(())
}
