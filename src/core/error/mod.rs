use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    SidecarMissing,
    SidecarInvalidYaml,

    ProjectsRootMissing,
    AssetsScanFailed,

    DatabaseUnavailable,
    DatabaseSchema,
    DatabaseQuery,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::SidecarMissing => "sidecar.missing",
            ErrorCode::SidecarInvalidYaml => "sidecar.invalid_yaml",

            ErrorCode::ProjectsRootMissing => "projects.root_missing",
            ErrorCode::AssetsScanFailed => "assets.scan_failed",

            ErrorCode::DatabaseUnavailable => "database.unavailable",
            ErrorCode::DatabaseSchema => "database.schema",
            ErrorCode::DatabaseQuery => "database.query",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(error) = self.details.get("error").and_then(Value::as_str) {
            write!(f, ": {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathErrorDetails {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn sidecar_missing(dir: impl Into<String>, tried: &[String]) -> Self {
        Self::new(
            ErrorCode::SidecarMissing,
            "No metadata file found",
            serde_json::json!({ "path": dir.into(), "tried": tried }),
        )
        .with_hint(format!("Add one of: {}", tried.join(", ")))
    }

    pub fn sidecar_invalid_yaml(path: impl Into<String>, err: impl ToString) -> Self {
        let details = to_details(PathErrorDetails {
            path: path.into(),
            error: Some(err.to_string()),
        });

        Self::new(
            ErrorCode::SidecarInvalidYaml,
            "Invalid YAML in metadata file",
            details,
        )
    }

    pub fn projects_root_missing(path: impl Into<String>) -> Self {
        let details = to_details(PathErrorDetails {
            path: path.into(),
            error: None,
        });

        Self::new(
            ErrorCode::ProjectsRootMissing,
            "Projects directory not found",
            details,
        )
        .with_hint("Set projects_dir in folio.json or pass --projects-dir")
    }

    pub fn assets_scan_failed(path: impl Into<String>, err: impl ToString) -> Self {
        let details = to_details(PathErrorDetails {
            path: path.into(),
            error: Some(err.to_string()),
        });

        Self::new(
            ErrorCode::AssetsScanFailed,
            "Failed to scan project assets",
            details,
        )
    }

    pub fn database_unavailable(path: impl Into<String>, err: impl ToString) -> Self {
        let details = to_details(PathErrorDetails {
            path: path.into(),
            error: Some(err.to_string()),
        });

        Self::new(
            ErrorCode::DatabaseUnavailable,
            "Database unavailable",
            details,
        )
    }

    pub fn database_schema(problem: impl Into<String>, err: Option<String>) -> Self {
        let details = to_details(InternalErrorDetails {
            error: err.unwrap_or_default(),
            context: None,
        });

        Self::new(ErrorCode::DatabaseSchema, problem, details)
    }

    pub fn database_query(err: rusqlite::Error, context: Option<String>) -> Self {
        let details = to_details(InternalErrorDetails {
            error: err.to_string(),
            context,
        });

        Self::new(ErrorCode::DatabaseQuery, "Database query failed", details)
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_underlying_error() {
        let err = Error::internal_io("permission denied", Some("read info.md".to_string()));
        assert_eq!(err.to_string(), "IO error: permission denied");
    }

    #[test]
    fn sidecar_missing_lists_tried_names() {
        let tried = vec!["info.md".to_string(), "project.yaml".to_string()];
        let err = Error::sidecar_missing("/tmp/p/alpha", &tried);

        assert_eq!(err.code.as_str(), "sidecar.missing");
        assert_eq!(err.details["tried"][1], "project.yaml");
        assert_eq!(err.hints.len(), 1);
    }
}
