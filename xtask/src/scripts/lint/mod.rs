use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Functional Core — pure types and logic, no I/O
// ---------------------------------------------------------------------------

/// Identifier for each check, matched against skip flags and fix overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckId {
    Fmt,
    Check,
    Clippy,
    Test,
    Machete,
    Typos,
}

/// A lint step run as an external command.
struct Check {
    id: CheckId,
    program: &'static str,
    args: &'static [&'static str],
    /// Skipped instead of failed when the tool is not installed.
    optional: bool,
}

#[derive(Debug)]
enum CheckOutcome {
    Passed { output: String },
    Failed { output: String },
    Skipped,
}

struct CheckResult {
    name: String,
    outcome: CheckOutcome,
}

/// Checks in the order they run. The pipeline stops at the first failure.
const CHECKS: &[Check] = &[
    Check {
        id: CheckId::Fmt,
        program: "cargo",
        args: &["fmt", "--all", "--check"],
        optional: false,
    },
    Check {
        id: CheckId::Check,
        program: "cargo",
        args: &["check", "--workspace", "--all-targets"],
        optional: false,
    },
    Check {
        id: CheckId::Clippy,
        program: "cargo",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        optional: false,
    },
    Check {
        id: CheckId::Test,
        program: "cargo",
        args: &["test", "--workspace", "--all-targets"],
        optional: false,
    },
    Check {
        id: CheckId::Machete,
        program: "cargo",
        args: &["machete"],
        optional: true,
    },
    Check {
        id: CheckId::Typos,
        program: "typos",
        args: &[],
        optional: true,
    },
];

fn should_skip(id: CheckId, args: &LintArgs) -> bool {
    match id {
        CheckId::Fmt => args.no_fmt,
        CheckId::Check => args.no_check,
        CheckId::Clippy => args.no_clippy,
        CheckId::Test => args.no_test,
        CheckId::Machete => args.no_machete,
        CheckId::Typos => args.no_typos,
    }
}

/// Arguments a check runs with, given whether `--fix` was passed.
///
/// In fix mode `fmt` rewrites files and `clippy` applies its suggestions.
/// Other checks are unaffected.
fn effective_args(check: &Check, fix: bool) -> Vec<&'static str> {
    if !fix {
        return check.args.to_vec();
    }
    match check.id {
        CheckId::Fmt => vec!["fmt", "--all"],
        CheckId::Clippy => vec![
            "clippy",
            "--workspace",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--",
            "-D",
            "warnings",
        ],
        _ => check.args.to_vec(),
    }
}

fn display_name(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Whether command output says the tool itself is missing.
fn is_tool_not_found(output: &str) -> bool {
    let lower = output.to_lowercase();
    lower.contains("not found")
        || lower.contains("no such file or directory")
        || lower.contains("unrecognized subcommand")
        || lower.contains("no such command")
}

fn determine_outcome(success: bool, output: String, optional: bool) -> CheckOutcome {
    if success {
        CheckOutcome::Passed { output }
    } else if optional && is_tool_not_found(&output) {
        CheckOutcome::Skipped
    } else {
        CheckOutcome::Failed { output }
    }
}

fn format_log_entry(result: &CheckResult) -> String {
    match &result.outcome {
        CheckOutcome::Skipped => format!("=== {} ===\n[skipped: not installed]\n", result.name),
        CheckOutcome::Passed { output } | CheckOutcome::Failed { output } => {
            format!("=== {} ===\n{}\n", result.name, output)
        }
    }
}

// ---------------------------------------------------------------------------
// Imperative Shell — I/O, side effects, orchestration
// ---------------------------------------------------------------------------

/// Run the lint pipeline, writing every result to `target/xtask-lint.log`.
pub fn run(args: &LintArgs) -> Result<()> {
    let log_path = log_path()?;
    let mut log_file = fs::File::create(&log_path)?;
    let mut failed: Option<String> = None;

    for check in CHECKS.iter().filter(|c| !should_skip(c.id, args)) {
        let check_args = effective_args(check, args.fix);
        let result = run_check(check, &check_args)?;

        write!(log_file, "{}", format_log_entry(&result))?;

        match &result.outcome {
            CheckOutcome::Skipped => {
                if args.verbose {
                    println!("[skip] {} (not installed)", result.name);
                }
            }
            CheckOutcome::Passed { output } => {
                if args.verbose {
                    print!("{output}");
                }
                println!("[ok] {}", result.name);
            }
            CheckOutcome::Failed { output } => {
                print!("{output}");
                failed = Some(result.name);
                break;
            }
        }
    }

    println!("log: {}", log_path.display());

    match failed {
        Some(name) => Err(eyre!("lint failed at: {name}")),
        None => Ok(()),
    }
}

fn run_check(check: &Check, args: &[&str]) -> Result<CheckResult> {
    let name = display_name(check.program, args);

    let output = match cmd(check.program, args)
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked()
        .run()
    {
        Ok(output) => output,
        // The program could not be spawned at all.
        Err(err) if check.optional && err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CheckResult {
                name,
                outcome: CheckOutcome::Skipped,
            });
        }
        Err(err) => return Err(err.into()),
    };

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    let outcome = determine_outcome(output.status.success(), text, check.optional);
    Ok(CheckResult { name, outcome })
}

fn log_path() -> Result<PathBuf> {
    let target_dir = std::env::current_dir()?.join("target");
    fs::create_dir_all(&target_dir)?;
    Ok(target_dir.join("xtask-lint.log"))
}
