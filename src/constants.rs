#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Pattern tables and thresholds shared by the scorers and validators.

/// Extensions of stylesheet files.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less"];

/// Extensions of files that may carry markup.
pub const MARKUP_EXTENSIONS: &[&str] = &["html", "htm", "jsx", "tsx", "vue"];

/// Extensions of script files.
pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

/// Flexbox layout.
pub const FLEXBOX_PATTERN: &str = r"display:\s*(?:inline-)?flex\b|flex-direction|justify-content";

/// CSS grid layout.
pub const GRID_PATTERN: &str = r"display:\s*(?:inline-)?grid\b|grid-template";

/// Media query breakpoints.
pub const MEDIA_QUERY_PATTERN: &str = r"@media";

/// A single color declaration, `background-color` included.
pub const COLOR_DECLARATION_PATTERN: &str = r"color\s*:";

/// A single background declaration.
pub const BACKGROUND_DECLARATION_PATTERN: &str = r"background(?:-color|-image)?\s*:";

/// Transitions, animations and transforms.
pub const MOTION_PATTERN: &str = r"transition|animation|@keyframes|transform\s*:";

/// Semantic HTML5 elements, matched by opening tag.
pub const SEMANTIC_TAGS: &[&str] =
    &["header", "nav", "main", "section", "article", "aside", "footer", "figure"];

/// Event handling in scripts or inline markup.
pub const EVENT_PATTERN: &str =
    r"addEventListener|on(?:Click|Change|Submit|Input|KeyDown|KeyUp)\b|on(?:click|change|submit|input)\s*=";

/// Input validation.
pub const VALIDATION_PATTERN: &str =
    r"validat|required|isNaN|\.trim\(\)|\.test\(|checkValidity|setCustomValidity";

/// Outgoing API calls.
pub const API_CALL_PATTERN: &str = r"fetch\(|axios|XMLHttpRequest|\$\.ajax|\$\.get\(|\$\.post\(";

/// Route declarations in Express-style servers.
pub const ROUTE_PATTERN: &str =
    r"\b(?:app|router|server|api)\.(?:get|post|put|patch|delete|route|all)\s*\(|express\.Router\(\)";

/// Tokens counted towards modern-syntax density.
pub const MODERN_SYNTAX_TOKENS: &[&str] = &[
    "const ", "let ", "=>", "async ", "await ", "...", "`", "import ", "export ", "class ",
];

/// Minimum number of distinct modern-syntax tokens for credit.
pub const MODERN_SYNTAX_MIN: usize = 3;

/// Comment markers in code or markup.
pub const COMMENT_PATTERN: &str = r"(?m)^\s*//|/\*|<!--";

/// Error handling tokens.
pub const ERROR_HANDLING_PATTERN: &str =
    r"try\s*\{|catch\s*\(|\.catch\(|throw\s|\bError\b|onerror";

/// Fraction of indented or blank lines for a file to count as formatted.
pub const FORMATTED_LINE_RATIO: f64 = 0.3;

/// Fraction of formatted files needed for credit.
pub const FORMATTED_FILE_RATIO: f64 = 0.5;

/// Viewport meta tag.
pub const VIEWPORT_PATTERN: &str = r#"name\s*=\s*["']viewport["']"#;

/// Relative and viewport units.
pub const FLEXIBLE_UNIT_PATTERN: &str = r"\d(?:%|rem\b|em\b|vw\b|vh\b)";

/// Explicit 4xx/5xx responses or error middleware.
pub const HTTP_ERROR_PATTERN: &str = r"status\(\s*[45]\d\d\s*\)|sendStatus\(\s*[45]\d\d|statusCode\s*=\s*[45]\d\d|\(\s*err\s*,\s*req\s*,\s*res\s*,\s*next\s*\)";

/// HTTP methods, each with its lowercase router form and uppercase token.
pub const HTTP_METHODS: &[(&str, &str)] = &[
    (".get(", "GET"),
    (".post(", "POST"),
    (".put(", "PUT"),
    (".patch(", "PATCH"),
    (".delete(", "DELETE"),
];

/// Minimum number of distinct HTTP methods for credit.
pub const HTTP_METHODS_MIN: usize = 3;

/// Authentication.
pub const AUTH_PATTERN: &str =
    r"jwt|jsonwebtoken|bcrypt|argon2|passport|session|authenticate|Authorization|signIn|login";

/// Validation and sanitization libraries.
pub const SANITIZE_PATTERN: &str =
    r"express-validator|\bjoi\b|Joi\.|\bzod\b|\bz\.object|validator|sanitiz|DOMPurify|\bxss\b";

/// Security middleware.
pub const SECURITY_MIDDLEWARE_PATTERN: &str =
    r"helmet|\bcors\b|rateLimit|express-rate-limit|csurf|csrf";

/// Database drivers and connections.
pub const DB_CONNECTION_PATTERN: &str = r"mongoose|MongoClient|mongodb|[Ss]equelize|[Pp]risma|knex|sqlite|mysql|new Pool\(|createConnection|DATABASE_URL|supabase";

/// Schemas and models.
pub const DB_SCHEMA_PATTERN: &str = r"new\s+Schema\(|Schema\(|\.model\(|\.define\(|CREATE TABLE|@Entity|\bmodel\s+\w+\s*\{";

/// CRUD operations.
pub const DB_CRUD_PATTERN: &str = r"\.find\(|findOne|findById|findMany|\.create\(|\.save\(|updateOne|updateMany|findByIdAndUpdate|deleteOne|deleteMany|\.destroy\(|INSERT INTO|UPDATE\s+\w+\s+SET|DELETE FROM|SELECT\s.+\sFROM";

/// Marks a full HTML document.
pub const HTML_DOCUMENT_PATTERN: &str = r"(?i)<!DOCTYPE\s+html|<html[\s>]";

/// Marks a React component.
pub const REACT_COMPONENT_PATTERN: &str =
    r#"from\s+["']react["']|require\(\s*["']react["']\s*\)|React\.|ReactDOM|useState|useEffect|return\s*\(\s*<"#;

/// Required files of a React frontend.
pub const REACT_REQUIRED_FILES: &[&str] = &["src/App.js", "src/index.js", "package.json"];

/// Required files of a vanilla frontend.
pub const VANILLA_REQUIRED_FILES: &[&str] = &["index.html", "css/style.css", "js/main.js"];

/// Required files of a backend.
pub const BACKEND_REQUIRED_FILES: &[&str] = &["server.js", "package.json"];

/// Trimmed length below which a file counts as near-empty.
pub const NEAR_EMPTY_CHARS: usize = 50;

/// Floor of the missing-file multiplier.
pub const MISSING_FILE_FLOOR: f64 = 0.5;

/// Floor of the near-empty-file multiplier.
pub const EMPTY_FILE_FLOOR: f64 = 0.7;

/// Penalty for frontends without an HTML document or React component.
pub const FRONTEND_STRUCTURE_PENALTY: f64 = 0.6;

/// Penalty for backends without route declarations.
pub const BACKEND_STRUCTURE_PENALTY: f64 = 0.5;

/// Repository links accepted with a submission.
pub const REPOSITORY_URL_PATTERN: &str =
    r"^https://github\.com/[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?/[A-Za-z0-9._-]+/?$";
