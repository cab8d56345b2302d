#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::*;

/// Compiled forms of the pattern tables in [`crate::constants`].
pub(crate) struct Patterns {
    /// See [`FLEXBOX_PATTERN`].
    pub flexbox:             Regex,
    /// See [`GRID_PATTERN`].
    pub grid:                Regex,
    /// See [`MEDIA_QUERY_PATTERN`].
    pub media_query:         Regex,
    /// See [`COLOR_DECLARATION_PATTERN`].
    pub color:               Regex,
    /// See [`BACKGROUND_DECLARATION_PATTERN`].
    pub background:          Regex,
    /// See [`MOTION_PATTERN`].
    pub motion:              Regex,
    /// See [`EVENT_PATTERN`].
    pub event:               Regex,
    /// See [`VALIDATION_PATTERN`].
    pub validation:          Regex,
    /// See [`API_CALL_PATTERN`].
    pub api_call:            Regex,
    /// See [`ROUTE_PATTERN`].
    pub route:               Regex,
    /// See [`COMMENT_PATTERN`].
    pub comment:             Regex,
    /// See [`ERROR_HANDLING_PATTERN`].
    pub error_handling:      Regex,
    /// See [`VIEWPORT_PATTERN`].
    pub viewport:            Regex,
    /// See [`FLEXIBLE_UNIT_PATTERN`].
    pub flexible_unit:       Regex,
    /// See [`HTTP_ERROR_PATTERN`].
    pub http_error:          Regex,
    /// See [`AUTH_PATTERN`].
    pub auth:                Regex,
    /// See [`SANITIZE_PATTERN`].
    pub sanitize:            Regex,
    /// See [`SECURITY_MIDDLEWARE_PATTERN`].
    pub security_middleware: Regex,
    /// See [`DB_CONNECTION_PATTERN`].
    pub db_connection:       Regex,
    /// See [`DB_SCHEMA_PATTERN`].
    pub db_schema:           Regex,
    /// See [`DB_CRUD_PATTERN`].
    pub db_crud:             Regex,
    /// See [`HTML_DOCUMENT_PATTERN`].
    pub html_document:       Regex,
    /// See [`REACT_COMPONENT_PATTERN`].
    pub react_component:     Regex,
    /// See [`REPOSITORY_URL_PATTERN`].
    pub repository_url:      Regex,
    /// One opening-tag matcher per entry of [`SEMANTIC_TAGS`].
    pub semantic_tags:       Vec<Regex>,
}

/// Compiles one table entry. The tables are literals, so failure is a bug.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern `{pattern}`: {e}"))
}

impl Patterns {
    /// Compiles every table.
    fn new() -> Self {
        Self {
            flexbox:             compile(FLEXBOX_PATTERN),
            grid:                compile(GRID_PATTERN),
            media_query:         compile(MEDIA_QUERY_PATTERN),
            color:               compile(COLOR_DECLARATION_PATTERN),
            background:          compile(BACKGROUND_DECLARATION_PATTERN),
            motion:              compile(MOTION_PATTERN),
            event:               compile(EVENT_PATTERN),
            validation:          compile(VALIDATION_PATTERN),
            api_call:            compile(API_CALL_PATTERN),
            route:               compile(ROUTE_PATTERN),
            comment:             compile(COMMENT_PATTERN),
            error_handling:      compile(ERROR_HANDLING_PATTERN),
            viewport:            compile(VIEWPORT_PATTERN),
            flexible_unit:       compile(FLEXIBLE_UNIT_PATTERN),
            http_error:          compile(HTTP_ERROR_PATTERN),
            auth:                compile(AUTH_PATTERN),
            sanitize:            compile(SANITIZE_PATTERN),
            security_middleware: compile(SECURITY_MIDDLEWARE_PATTERN),
            db_connection:       compile(DB_CONNECTION_PATTERN),
            db_schema:           compile(DB_SCHEMA_PATTERN),
            db_crud:             compile(DB_CRUD_PATTERN),
            html_document:       compile(HTML_DOCUMENT_PATTERN),
            react_component:     compile(REACT_COMPONENT_PATTERN),
            repository_url:      compile(REPOSITORY_URL_PATTERN),
            semantic_tags:       SEMANTIC_TAGS
                .iter()
                .map(|tag| compile(&format!(r"<{tag}[\s>/]")))
                .collect(),
        }
    }
}

/// Lazily compiled pattern set shared by all gradings.
pub(crate) static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);
