//! Executor module for file operations

pub mod copy;

use crate::plan::{CopyPlan, PlanAction};
use crate::types::Result;
use crate::Config;
use std::path::PathBuf;
use tracing::{debug, error};

pub use copy::{copy_into_dir, destination_for};

/// Execution statistics for a copy run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Files copied (or that would be copied in dry-run).
    pub copied_files: usize,
    /// Root files skipped by exclude patterns.
    pub skipped_files: usize,
    /// Aggregate copied bytes. Always zero in dry-run.
    pub bytes_copied: u64,
    /// Whether anything was actually written.
    pub dry_run: bool,
}

/// Events emitted while executing a plan.
#[derive(Debug)]
pub enum ExecutionEvent {
    /// Root file skipped.
    Skipped { path: PathBuf },
    /// Copy about to start (also emitted in dry-run).
    CopyStart {
        index: usize,
        total: usize,
        path: PathBuf,
    },
    /// Copy finished.
    CopySuccess {
        path: PathBuf,
        destination: PathBuf,
        bytes_copied: u64,
    },
    /// Plan execution completed.
    Complete { stats: ExecutionStats },
}

/// Optional callback used to receive execution events.
pub type ExecutionCallback<'cb> = dyn Fn(&ExecutionEvent) + 'cb;

/// Execute a copy plan.
///
/// Files are copied flat into `config.destination` in plan order. The first
/// failure stops the run; files copied before it stay in place. Under
/// `config.dry_run` events are emitted but nothing is written.
pub fn execute_plan(
    plan: &CopyPlan,
    config: &Config,
    on_event: Option<&ExecutionCallback<'_>>,
) -> Result<ExecutionStats> {
    let emit = |event: ExecutionEvent| {
        if let Some(callback) = on_event {
            callback(&event);
        }
    };

    let mut stats = ExecutionStats {
        dry_run: config.dry_run,
        ..ExecutionStats::default()
    };
    let total = plan.stats.copy_count;
    let mut index = 0usize;

    for action in &plan.actions {
        match action {
            PlanAction::Skip(path) => {
                stats.skipped_files += 1;
                emit(ExecutionEvent::Skipped { path: path.clone() });
            }
            PlanAction::Copy(path) => {
                index += 1;
                emit(ExecutionEvent::CopyStart {
                    index,
                    total,
                    path: path.clone(),
                });

                let destination = destination_for(path, &config.destination)?;
                let bytes_copied = if config.dry_run {
                    0
                } else {
                    copy_into_dir(path, &config.destination).inspect_err(|e| {
                        error!(event = "executor.copy_failed", file = %path.display(), error = %e);
                    })?
                };
                debug!(
                    event = "executor.copied",
                    file = %path.display(),
                    destination = %destination.display(),
                    bytes = bytes_copied,
                    dry_run = config.dry_run
                );

                stats.copied_files += 1;
                stats.bytes_copied += bytes_copied;
                emit(ExecutionEvent::CopySuccess {
                    path: path.clone(),
                    destination,
                    bytes_copied,
                });
            }
        }
    }

    emit(ExecutionEvent::Complete {
        stats: stats.clone(),
    });
    Ok(stats)
}
