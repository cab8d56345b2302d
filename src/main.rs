#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradewise
//!
//! Grades a web project directory against a JSON rubric, or serves the same
//! grading over HTTP.

use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use gradewise::{
    GradingError, LetterGrade, ProjectDefinition, Submission, config,
    grade::{Grader, render_suggestions, render_table},
    grade_project_async,
    server::{self, AppState},
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Arguments of the `grade` command.
#[derive(Debug, Clone)]
struct GradeArgs {
    /// Project definition JSON file
    project:  PathBuf,
    /// Directory holding the submission
    dir:      PathBuf,
    /// Repository link attached to the submission
    repo:     Option<String>,
    /// Deployment link attached to the submission
    deployed: Option<String>,
    /// Print the result as JSON
    json:     bool,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade a directory
    Grade(GradeArgs),
    /// List category names per scorer
    Categories,
    /// Run the HTTP service
    Serve(Option<SocketAddr>),
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Options {
    /// Log at debug level
    verbose: bool,
    /// Command to run
    cmd:     Cmd,
}

/// Parse the command line arguments and return `Options`
fn options() -> Options {
    let verbose = short('v')
        .long("verbose")
        .help("Log scoring details")
        .switch();

    let project = positional::<PathBuf>("PROJECT_JSON").help("Path to the project definition");
    let dir = positional::<PathBuf>("DIR").help("Directory holding the submission");
    let repo = long("repo")
        .help("Repository URL, eg. https://github.com/owner/repo")
        .argument::<String>("URL")
        .optional();
    let deployed = long("deployed")
        .help("URL of the live deployment")
        .argument::<String>("URL")
        .optional();
    let json = long("json").help("Print the result as JSON").switch();

    let grade = construct!(GradeArgs {
        repo,
        deployed,
        json,
        project,
        dir
    })
    .map(Cmd::Grade)
    .to_options()
    .command("grade")
    .help("Grade a project directory");

    let categories = pure(Cmd::Categories)
        .to_options()
        .command("categories")
        .help("List recognised category names");

    let addr = long("addr")
        .help("Address to listen on, defaults to GRADEWISE_BIND_ADDR")
        .argument::<SocketAddr>("ADDR")
        .optional();
    let serve = construct!(Cmd::Serve(addr))
        .to_options()
        .command("serve")
        .help("Serve the grading API over HTTP");

    let cmd = construct!([grade, categories, serve]);

    construct!(Options { verbose, cmd })
        .to_options()
        .descr("Heuristic grader for web projects")
        .run()
}

/// Colours a letter grade by band.
fn paint(grade: LetterGrade) -> String {
    let text = grade.as_str().bold();
    match grade {
        g if g >= LetterGrade::AMinus => text.green().to_string(),
        g if g >= LetterGrade::BMinus => text.cyan().to_string(),
        g if g >= LetterGrade::CMinus => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

/// Loads, grades and prints one submission.
async fn run_grade(args: GradeArgs) -> Result<()> {
    let project = ProjectDefinition::from_json_file(&args.project)?;
    let mut submission = Submission::load(&args.dir)
        .await
        .with_context(|| format!("Could not load submission from {}", args.dir.display()))?;
    if let Some(repo) = args.repo {
        submission = submission.with_repository_url(repo);
    }
    if let Some(deployed) = args.deployed {
        submission = submission.with_deployed_url(deployed);
    }

    let result = match grade_project_async(project, submission).await {
        Ok(result) => result,
        Err(err) => match err.downcast_ref::<GradingError>() {
            Some(rejected) => {
                eprintln!("{} {rejected}", "Submission rejected:".red().bold());
                std::process::exit(2);
            }
            None => return Err(err),
        },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_table(&result));
        println!("Overall grade: {}\n", paint(result.overall_grade));
        println!("{}", render_suggestions(&result));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let opts = options();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let level = if opts.verbose { Level::DEBUG } else { Level::INFO };
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    config::ensure_initialized()?;

    match opts.cmd {
        Cmd::Grade(args) => run_grade(args).await?,
        Cmd::Categories => {
            for (kind, names) in Grader::default().registry().names_by_kind() {
                println!("{}", kind.to_string().bold());
                for name in names {
                    println!("  {name}");
                }
            }
            println!("{}", "Anything else is graded generically.".dimmed());
        }
        Cmd::Serve(addr) => {
            let addr = match addr {
                Some(addr) => addr,
                None => config::bind_addr()?,
            };
            server::serve(addr, AppState::default()).await?;
        }
    };

    Ok(())
}
