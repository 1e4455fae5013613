use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::errors::PipelineError;

/// Write `document` as pretty-printed UTF-8 JSON.
///
/// Non-ASCII text is written as-is. The file is written next to its final
/// location first and renamed into place, so a failed run never leaves a
/// truncated document behind. Returns the number of bytes written.
pub async fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<usize, PipelineError> {
    let bytes = serde_json::to_vec_pretty(document)?;
    let tmp_path = tmp_path_for(path);

    let io_err = |source| PipelineError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let result = async {
        let mut file = File::create(&tmp_path).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&tmp_path, path).await
    }
    .await;

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(io_err(e));
    }

    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_tmp_path_for() {
        assert_eq!(
            tmp_path_for(Path::new("out/events.json")),
            PathBuf::from("out/events.json.tmp")
        );
    }

    #[tokio::test]
    async fn test_write_keeps_non_ascii_literal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");

        let doc = json!({"description": "Evento sin título", "country": "España"});
        write_json(&path, &doc).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Evento sin título"));
        assert!(text.contains("España"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  \"country\""));
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), doc);
        assert!(!tmp_path_for(&path).exists());
    }

    #[tokio::test]
    async fn test_write_creates_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.json");

        write_json(&path, &json!({"v": 1})).await.unwrap();
        write_json(&path, &json!({"v": 2})).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!({"v": 2}));
    }

    #[tokio::test]
    async fn test_write_into_file_as_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let err = write_json(&blocker.join("out.json"), &json!({})).await.unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
