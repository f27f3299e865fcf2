use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::Serialize;
use serde_json::Value;

use crate::core::KanadrillError;

const APP_NAME: &str = "kanadrill";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, path: &Path) -> Result<(), KanadrillError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    println!("Data saved to: {}", path.display());
    Ok(())
}

/// Reads a JSON document as an untyped value so callers can merge it
/// field by field. Missing or unreadable files yield `None`.
pub fn load_value(path: &Path) -> Option<Value> {
    if !path.exists() {
        return None;
    }

    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to read {}: {}. Using defaults.", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(value) => {
            println!("Data loaded from: {}", path.display());
            Some(value)
        }
        Err(e) => {
            eprintln!("Failed to parse {}: {}. Using defaults.", path.display(), e);
            None
        }
    }
}
