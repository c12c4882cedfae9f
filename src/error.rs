//! Asset errors.
//!
//! A missing model stops the game before the window loop starts; a missing
//! sound is reported and the cue is left silent.
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("model file '{}' not found", .path.display())]
    MissingAsset { path: PathBuf },
    #[error("audio file '{}' not found", .path.display())]
    MissingAudio { path: PathBuf },
    #[error("failed to load '{}': {reason}", .path.display())]
    LoadFailed { path: PathBuf, reason: String },
}

/// Check that a model file exists before handing it to the loader.
pub fn require_model_file(path: &Path) -> Result<(), AssetError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AssetError::MissingAsset {
            path: path.to_path_buf(),
        })
    }
}

/// Check that a sound file exists before queueing it for loading.
pub fn require_audio_file(path: &Path) -> Result<(), AssetError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AssetError::MissingAudio {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_are_reported_by_kind() {
        let err = require_model_file(Path::new("nope/doll.glb")).unwrap_err();
        assert!(matches!(err, AssetError::MissingAsset { .. }));
        assert_eq!(err.to_string(), "model file 'nope/doll.glb' not found");

        let err = require_audio_file(Path::new("nope/red_light.mp3")).unwrap_err();
        assert!(matches!(err, AssetError::MissingAudio { .. }));
        assert_eq!(err.to_string(), "audio file 'nope/red_light.mp3' not found");
    }

    #[test]
    fn existing_file_passes() {
        let path = std::env::temp_dir().join(format!("redlight-asset-{}", std::process::id()));
        std::fs::write(&path, b"x").unwrap();
        assert!(require_model_file(&path).is_ok());
        assert!(require_audio_file(&path).is_ok());
        let _ = std::fs::remove_file(path);
    }
}
