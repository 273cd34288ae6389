use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use super::domain::{room_id_from_value, RawApplicant};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NotAnArray { what: &'static str },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read import file: {}", err),
            ImportError::Json(err) => write!(f, "import file is not valid JSON: {}", err),
            ImportError::NotAnArray { what } => {
                write!(f, "{} file must contain a JSON array", what)
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Json(err) => Some(err),
            ImportError::NotAnArray { .. } => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

fn read_array<R: Read>(reader: R, what: &'static str) -> Result<Vec<Value>, ImportError> {
    match serde_json::from_reader(reader)? {
        Value::Array(items) => Ok(items),
        _ => Err(ImportError::NotAnArray { what }),
    }
}

/// Loads applicant records from a JSON array. Entries that are not objects, or whose
/// fields have the wrong JSON type, are skipped.
pub fn read_applicants<R: Read>(reader: R) -> Result<Vec<RawApplicant>, ImportError> {
    let mut applicants = Vec::new();

    for (position, item) in read_array(reader, "applicants")?.into_iter().enumerate() {
        if !item.is_object() {
            warn!(position, "skipping non-object applicant entry");
            continue;
        }
        match serde_json::from_value::<RawApplicant>(item) {
            Ok(applicant) => applicants.push(applicant),
            Err(error) => warn!(position, %error, "skipping malformed applicant entry"),
        }
    }

    Ok(applicants)
}

/// Loads room ids from a JSON array. Strings and numbers are kept, anything else is dropped.
pub fn read_rooms<R: Read>(reader: R) -> Result<Vec<String>, ImportError> {
    let rooms = read_array(reader, "rooms")?
        .into_iter()
        .filter_map(room_id_from_value)
        .collect();

    Ok(rooms)
}

pub fn read_applicants_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<RawApplicant>, ImportError> {
    let file = std::fs::File::open(path)?;
    read_applicants(std::io::BufReader::new(file))
}

pub fn read_rooms_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ImportError> {
    let file = std::fs::File::open(path)?;
    read_rooms(std::io::BufReader::new(file))
}
