use std::fmt;

#[derive(Debug, Clone)]
pub enum GolinksError {
    Validation(String),
    Conflict(String),
    NotFound(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
}

impl GolinksError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GolinksError::Validation(_) => "E001",
            GolinksError::Conflict(_) => "E002",
            GolinksError::NotFound(_) => "E003",
            GolinksError::DatabaseConfig(_) => "E004",
            GolinksError::DatabaseConnection(_) => "E005",
            GolinksError::DatabaseOperation(_) => "E006",
            GolinksError::FileOperation(_) => "E007",
            GolinksError::Serialization(_) => "E008",
            GolinksError::Config(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GolinksError::Validation(_) => "Validation Error",
            GolinksError::Conflict(_) => "Conflict",
            GolinksError::NotFound(_) => "Resource Not Found",
            GolinksError::DatabaseConfig(_) => "Database Configuration Error",
            GolinksError::DatabaseConnection(_) => "Database Connection Error",
            GolinksError::DatabaseOperation(_) => "Database Operation Error",
            GolinksError::FileOperation(_) => "File Operation Error",
            GolinksError::Serialization(_) => "Serialization Error",
            GolinksError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GolinksError::Validation(msg)
            | GolinksError::Conflict(msg)
            | GolinksError::NotFound(msg)
            | GolinksError::DatabaseConfig(msg)
            | GolinksError::DatabaseConnection(msg)
            | GolinksError::DatabaseOperation(msg)
            | GolinksError::FileOperation(msg)
            | GolinksError::Serialization(msg)
            | GolinksError::Config(msg) => msg,
        }
    }

    /// Backing store or environment failure, as opposed to a caller mistake.
    ///
    /// These are reported to HTTP clients as a bare 500 without detail.
    pub fn is_storage(&self) -> bool {
        !matches!(
            self,
            GolinksError::Validation(_) | GolinksError::Conflict(_) | GolinksError::NotFound(_)
        )
    }

    /// HTTP status for the error taxonomy
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            GolinksError::Validation(_) => StatusCode::BAD_REQUEST,
            GolinksError::Conflict(_) => StatusCode::CONFLICT,
            GolinksError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GolinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GolinksError {}

// 便捷的构造函数
impl GolinksError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        GolinksError::Validation(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        GolinksError::Conflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        GolinksError::NotFound(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        GolinksError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        GolinksError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        GolinksError::DatabaseOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        GolinksError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        GolinksError::Config(msg.into())
    }
}

impl From<sea_orm::DbErr> for GolinksError {
    fn from(err: sea_orm::DbErr) -> Self {
        GolinksError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for GolinksError {
    fn from(err: std::io::Error) -> Self {
        GolinksError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GolinksError {
    fn from(err: serde_json::Error) -> Self {
        GolinksError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for GolinksError {
    fn from(err: config::ConfigError) -> Self {
        GolinksError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GolinksError>;

/// 错误响应体
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub error: String,
    pub message: String,
}

impl actix_web::ResponseError for GolinksError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.http_status()
    }

    /// Storage detail is logged here and never sent to the client.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = if self.is_storage() {
            tracing::error!("{} {}", self.code(), self.format_simple());
            "Internal server error".to_string()
        } else {
            self.message().to_string()
        };

        actix_web::HttpResponse::build(self.http_status()).json(ErrorBody {
            code: self.code().to_string(),
            error: self.error_type().to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            GolinksError::validation("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GolinksError::conflict("dup").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GolinksError::not_found("gone").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GolinksError::database_operation("disk full").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GolinksError::database_connection("refused").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_is_storage() {
        assert!(!GolinksError::validation("x").is_storage());
        assert!(!GolinksError::conflict("x").is_storage());
        assert!(!GolinksError::not_found("x").is_storage());
        assert!(GolinksError::database_operation("x").is_storage());
        assert!(GolinksError::config("x").is_storage());
    }

    #[test]
    fn test_format_simple() {
        let err = GolinksError::conflict("Shortlink 'wiki' already exists");
        assert_eq!(
            err.to_string(),
            "Conflict: Shortlink 'wiki' already exists"
        );
        assert_eq!(err.code(), "E002");
    }

    #[actix_rt::test]
    async fn test_error_response_hides_storage_detail() {
        use actix_web::ResponseError;

        let resp = GolinksError::database_operation("disk I/O error at /var/lib/golinks.db")
            .error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(body.code, "E006");
        assert_eq!(body.message, "Internal server error");
        assert!(!body.message.contains("/var/lib/golinks.db"));

        let resp = GolinksError::conflict("Shortlink 'wiki' already exists").error_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: ErrorBody = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(body.message, "Shortlink 'wiki' already exists");
    }

    async fn body_bytes(resp: actix_web::HttpResponse) -> actix_web::web::Bytes {
        actix_web::body::to_bytes(resp.into_body())
            .await
            .expect("body readable")
    }

    #[test]
    fn test_from_db_err() {
        let err: GolinksError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, GolinksError::DatabaseOperation(_)));
        assert!(err.message().contains("boom"));
    }
}
