//! Main copy command

use crate::executor::{execute_plan, ExecutionEvent, ExecutionStats};
use crate::plan::{build_plan, CopyPlan};
use crate::types::DepcopyError;
use crate::Config;
use indicatif::HumanBytes;
use std::io::ErrorKind;
use tracing::info;

/// Run the copy operation
pub fn run(config: Config) -> Result<ExecutionStats, DepcopyError> {
    let filter = config.exclude_filter()?;
    let plan = build_plan(config.files.as_slice(), &filter)?;
    info!(
        event = "command.plan_built",
        roots = plan.stats.root_count,
        dependencies = plan.stats.dependency_count,
        duplicates = plan.stats.duplicate_count,
        skipped = plan.stats.skip_count
    );

    let progress_cb = |event: &ExecutionEvent| match event {
        ExecutionEvent::Skipped { path } => println!("Skipping: {}", path.display()),
        ExecutionEvent::CopyStart { path, .. } => println!("Copying: {}", path.display()),
        ExecutionEvent::CopySuccess { .. } | ExecutionEvent::Complete { .. } => {}
    };

    let stats = execute_plan(&plan, &config, Some(&progress_cb))?;
    println!("{}", format_summary(&plan, &stats));
    Ok(stats)
}

fn format_summary(plan: &CopyPlan, stats: &ExecutionStats) -> String {
    if stats.dry_run {
        return format!(
            "Dry-run mode: no changes were made ({} file(s) planned, {} skipped).",
            stats.copied_files, stats.skipped_files
        );
    }

    if plan.is_empty() {
        return "Nothing to copy.".to_string();
    }

    format!(
        "Copied {} file(s) ({}), {} skipped.",
        stats.copied_files,
        HumanBytes(stats.bytes_copied),
        stats.skipped_files
    )
}

/// A short suggestion to print after a fatal error
pub fn hint(error: &DepcopyError) -> Option<&'static str> {
    match error {
        DepcopyError::UndefinedSubstitution { .. } => {
            Some("Add an `assign` for the name before this line or in a file that includes it.")
        }
        DepcopyError::SubstitutionLimit { .. } => {
            Some("Check for an assignment whose value refers back to itself.")
        }
        DepcopyError::MissingUnassign { .. } => {
            Some("`assign NAME` without a value removes NAME; it must be assigned first.")
        }
        DepcopyError::Read { source, .. } | DepcopyError::Copy { source, .. } => {
            match source.kind() {
                ErrorKind::NotFound => Some(
                    "Verify the path exists. Includes are relative to the including file.",
                ),
                ErrorKind::PermissionDenied => {
                    Some("Check file permissions or run with a user that has access.")
                }
                _ => None,
            }
        }
        DepcopyError::NotADirectory(_) => Some("The last argument must be an existing directory."),
        DepcopyError::Config(_) => None,
    }
}
