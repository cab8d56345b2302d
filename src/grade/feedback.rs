#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use super::registry::ScorerKind;

/// Feedback band selected from a criterion's percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    /// 90% and above.
    Excellent,
    /// 75% up to 90%.
    Good,
    /// 60% up to 75%.
    Fair,
    /// Below 60%.
    NeedsWork,
}

impl Tier {
    /// Picks the band for `percentage` (0–100).
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Tier::Excellent
        } else if percentage >= 75.0 {
            Tier::Good
        } else if percentage >= 60.0 {
            Tier::Fair
        } else {
            Tier::NeedsWork
        }
    }

    /// Row of a [`CategoryText`] table.
    fn index(self) -> usize {
        match self {
            Tier::Excellent => 0,
            Tier::Good => 1,
            Tier::Fair => 2,
            Tier::NeedsWork => 3,
        }
    }
}

/// Fixed prose and suggestions for one (category, tier) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierText {
    /// One or two sentences of feedback.
    pub feedback:    &'static str,
    /// Actionable suggestions, three to six.
    pub suggestions: &'static [&'static str],
}

/// One row per tier, best first.
type CategoryText = [TierText; 4];

/// Feedback for `score` out of `max_score` on a criterion of `kind`.
pub fn synthesize(kind: ScorerKind, score: f64, max_score: f64) -> (Tier, &'static TierText) {
    let percentage = if max_score > 0.0 {
        score / max_score * 100.0
    } else {
        0.0
    };
    let tier = Tier::from_percentage(percentage);
    (tier, &table(kind)[tier.index()])
}

/// Table for a scorer kind.
fn table(kind: ScorerKind) -> &'static CategoryText {
    match kind {
        ScorerKind::Design => &DESIGN,
        ScorerKind::Functionality => &FUNCTIONALITY,
        ScorerKind::CodeQuality => &CODE_QUALITY,
        ScorerKind::Responsiveness => &RESPONSIVENESS,
        ScorerKind::ApiIntegration => &API_INTEGRATION,
        ScorerKind::Security => &SECURITY,
        ScorerKind::Database => &DATABASE,
        ScorerKind::Generic => &GENERIC,
    }
}

/// Design & UI.
static DESIGN: CategoryText = [
    TierText {
        feedback:    "Excellent visual design. The layout is polished, the styling is \
                      consistent and the markup is semantic.",
        suggestions: &[
            "Add subtle micro-interactions to key controls",
            "Document your color palette and spacing scale as CSS custom properties",
            "Audit color contrast against WCAG AA",
        ],
    },
    TierText {
        feedback:    "Good design work. The interface is clean and mostly consistent, with \
                      room to refine the details.",
        suggestions: &[
            "Use CSS grid for two-dimensional page layouts",
            "Add transitions to hover and focus states",
            "Replace generic divs with semantic elements like <header>, <main> and <footer>",
            "Settle on a consistent spacing scale",
        ],
    },
    TierText {
        feedback:    "The design covers the basics but feels unfinished in places. Layout and \
                      visual hierarchy need more attention.",
        suggestions: &[
            "Move inline styles into a dedicated stylesheet",
            "Use flexbox to align and distribute elements",
            "Add media queries for small screens",
            "Define a limited color palette and apply it consistently",
            "Give headings, body text and captions distinct sizes",
        ],
    },
    TierText {
        feedback:    "The design needs significant work. Little styling or layout structure \
                      was found in the submission.",
        suggestions: &[
            "Create a stylesheet and link it from your HTML",
            "Learn flexbox for basic layout",
            "Pick two or three colors and a readable font",
            "Add spacing with margin and padding",
            "Structure pages with semantic HTML elements",
            "Study a few well-designed sites for inspiration",
        ],
    },
];

/// Functionality.
static FUNCTIONALITY: CategoryText = [
    TierText {
        feedback:    "Excellent functionality. Interactions are handled well, input is \
                      validated and data flows cleanly.",
        suggestions: &[
            "Add loading and empty states for asynchronous work",
            "Cover edge cases with automated tests",
            "Debounce expensive event handlers",
        ],
    },
    TierText {
        feedback:    "Solid functionality. The core features work, with a few gaps in \
                      validation or data handling.",
        suggestions: &[
            "Validate every form field before submitting",
            "Show the user a message when a request fails",
            "Use async/await consistently for asynchronous code",
            "Split large functions into smaller helpers",
        ],
    },
    TierText {
        feedback:    "Basic functionality is present, but several interactions are missing \
                      or incomplete.",
        suggestions: &[
            "Attach event listeners to every interactive element",
            "Check user input for empty and invalid values",
            "Fetch data from an API instead of hard-coding it",
            "Use const and let instead of var",
            "Handle errors from network requests",
        ],
    },
    TierText {
        feedback:    "Functionality is limited. Little interactive behaviour was detected in \
                      the submitted code.",
        suggestions: &[
            "Add a JavaScript file and include it in your page",
            "Respond to user actions with addEventListener",
            "Validate form input before using it",
            "Practice making API calls with fetch",
            "Break the features down into small, testable steps",
        ],
    },
];

/// Code Quality.
static CODE_QUALITY: CategoryText = [
    TierText {
        feedback:    "Excellent code quality. The project is well organised, consistently \
                      named and handles errors deliberately.",
        suggestions: &[
            "Add a linter and formatter to keep the style enforced",
            "Write unit tests for the trickiest functions",
            "Document public functions with short doc comments",
        ],
    },
    TierText {
        feedback:    "Good code quality. The code is readable, with a few inconsistencies in \
                      structure or style.",
        suggestions: &[
            "Make file and variable naming consistent",
            "Explain non-obvious logic with comments",
            "Wrap risky operations in try/catch",
            "Extract repeated code into functions",
        ],
    },
    TierText {
        feedback:    "Code quality is acceptable but uneven. Organisation, formatting and \
                      error handling need attention.",
        suggestions: &[
            "Split the code into several focused files",
            "Indent nested blocks consistently",
            "Use lowercase or camelCase file names without spaces",
            "Add comments to describe what each section does",
            "Handle errors instead of letting them crash the page",
        ],
    },
    TierText {
        feedback:    "Code quality needs significant improvement. The code is hard to follow \
                      and lacks basic structure.",
        suggestions: &[
            "Separate HTML, CSS and JavaScript into their own files",
            "Format your code with a tool like Prettier",
            "Choose descriptive names for files, variables and functions",
            "Comment the purpose of each function",
            "Learn how try/catch works and use it around risky code",
            "Review a style guide for your language",
        ],
    },
];

/// Responsiveness.
static RESPONSIVENESS: CategoryText = [
    TierText {
        feedback:    "Excellent responsiveness. The layout adapts smoothly across screen \
                      sizes.",
        suggestions: &[
            "Test on real devices as well as the browser emulator",
            "Use clamp() for fluid typography",
            "Serve responsive images with srcset",
        ],
    },
    TierText {
        feedback:    "Good responsiveness. Most layouts adapt, with a few rough edges at \
                      particular widths.",
        suggestions: &[
            "Add a breakpoint for tablet-sized screens",
            "Replace fixed pixel widths with percentages or rem",
            "Check that touch targets are large enough on mobile",
        ],
    },
    TierText {
        feedback:    "Partially responsive. Some parts of the page break or overflow on \
                      smaller screens.",
        suggestions: &[
            "Add the viewport meta tag to every page",
            "Write media queries for small screens",
            "Use relative units such as %, rem and vw",
            "Let flex containers wrap on narrow screens",
        ],
    },
    TierText {
        feedback:    "The project is not responsive. The layout does not adapt to different \
                      screen sizes.",
        suggestions: &[
            "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "Learn how media queries work",
            "Design for mobile first, then enhance for larger screens",
            "Avoid fixed widths on containers",
            "Test the page at several widths in developer tools",
        ],
    },
];

/// API Integration.
static API_INTEGRATION: CategoryText = [
    TierText {
        feedback:    "Excellent API design. Routes are well structured and errors are \
                      reported with appropriate status codes.",
        suggestions: &[
            "Document the endpoints with OpenAPI",
            "Version the API under a prefix like /api/v1",
            "Add integration tests for each route",
        ],
    },
    TierText {
        feedback:    "Good API work. The main routes exist, with some gaps in method \
                      coverage or error reporting.",
        suggestions: &[
            "Support the full set of CRUD methods for each resource",
            "Return 400 for bad input and 404 for missing resources",
            "Centralise error handling in middleware",
            "Keep route handlers thin by moving logic into services",
        ],
    },
    TierText {
        feedback:    "The API is basic. Routes exist but HTTP methods and error responses are \
                      used inconsistently.",
        suggestions: &[
            "Use GET, POST, PUT and DELETE for their intended purposes",
            "Send explicit status codes with res.status()",
            "Validate request bodies before using them",
            "Group related routes with express.Router()",
        ],
    },
    TierText {
        feedback:    "API integration is missing or incomplete. No clear route structure was \
                      found.",
        suggestions: &[
            "Set up an Express server with a few routes",
            "Learn the REST conventions for resource URLs",
            "Return JSON responses from your endpoints",
            "Handle errors and send meaningful status codes",
            "Test your endpoints with a tool like curl or Postman",
        ],
    },
];

/// Security.
static SECURITY: CategoryText = [
    TierText {
        feedback:    "Excellent security practices. Authentication, input validation and \
                      hardening middleware are all in place.",
        suggestions: &[
            "Rotate secrets and keep them out of the repository",
            "Add automated dependency vulnerability scanning",
            "Log and monitor failed authentication attempts",
        ],
    },
    TierText {
        feedback:    "Good security foundations, with a few protections still missing.",
        suggestions: &[
            "Add rate limiting to authentication routes",
            "Sanitize every piece of user input",
            "Set security headers with helmet",
            "Expire sessions and tokens after a sensible period",
        ],
    },
    TierText {
        feedback:    "Some security measures exist, but important protections are absent.",
        suggestions: &[
            "Hash passwords with bcrypt before storing them",
            "Validate input with a library such as express-validator or zod",
            "Configure CORS to allow only trusted origins",
            "Store secrets in environment variables",
        ],
    },
    TierText {
        feedback:    "Security needs urgent attention. No meaningful protections were found.",
        suggestions: &[
            "Add authentication before exposing user data",
            "Never store passwords in plain text",
            "Validate and sanitize all user input",
            "Use helmet and cors middleware",
            "Read the OWASP Top Ten",
        ],
    },
];

/// Database.
static DATABASE: CategoryText = [
    TierText {
        feedback:    "Excellent data layer. Connections, schemas and queries are well \
                      organised.",
        suggestions: &[
            "Add indexes for frequently queried fields",
            "Use transactions for multi-step writes",
            "Seed the database for local development",
        ],
    },
    TierText {
        feedback:    "Good database work. Models and queries are in place, with room to \
                      tighten the schema.",
        suggestions: &[
            "Add validation rules to your schema",
            "Handle connection failures gracefully",
            "Paginate queries that can return many rows",
        ],
    },
    TierText {
        feedback:    "The database layer is basic. Some operations or schema definitions are \
                      missing.",
        suggestions: &[
            "Define a schema or model for each resource",
            "Implement create, read, update and delete operations",
            "Keep the connection string in an environment variable",
            "Move queries out of route handlers",
        ],
    },
    TierText {
        feedback:    "Database integration is missing or incomplete.",
        suggestions: &[
            "Pick a database such as MongoDB or PostgreSQL and connect to it",
            "Define models for your data",
            "Implement basic CRUD operations",
            "Learn the difference between SQL and NoSQL stores",
        ],
    },
];

/// Unrecognised categories.
static GENERIC: CategoryText = [
    TierText {
        feedback:    "Excellent work on this criterion. The submission covers the stated \
                      requirements thoroughly.",
        suggestions: &[
            "Polish the remaining details",
            "Add documentation describing how the requirements are met",
            "Ask a peer to review the project",
        ],
    },
    TierText {
        feedback:    "Good work on this criterion. Most requirements are addressed.",
        suggestions: &[
            "Re-read the requirements and close the remaining gaps",
            "Add tests or examples that demonstrate each requirement",
            "Refine the implementation for clarity",
        ],
    },
    TierText {
        feedback:    "This criterion is partially met. Several requirements are not clearly \
                      addressed.",
        suggestions: &[
            "Work through the requirements one at a time",
            "Flesh out the parts of the project that are still thin",
            "Use names and comments that reflect the requirements",
            "Ask for help on the requirements you find unclear",
        ],
    },
    TierText {
        feedback:    "This criterion needs significant work. Little evidence of the \
                      requirements was found.",
        suggestions: &[
            "Review the requirements carefully before continuing",
            "Build a minimal version of each required feature",
            "Commit small, working increments",
            "Look at example projects for guidance",
        ],
    },
];
