//! Copy plan: roots plus everything they include, without duplicates

use crate::filter::ExcludeFilter;
use crate::resolver::resolve_root;
use crate::types::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Action recorded for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Copy the file into the destination directory
    Copy(PathBuf),

    /// Root file skipped because it matched an exclude pattern
    Skip(PathBuf),
}

impl PlanAction {
    pub fn path(&self) -> &Path {
        match self {
            PlanAction::Copy(path) | PlanAction::Skip(path) => path,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, PlanAction::Skip(_))
    }
}

/// Statistics about a copy plan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanStats {
    /// Root files that were walked
    pub root_count: usize,

    /// Include entries discovered, duplicates counted
    pub dependency_count: usize,

    /// Paths dropped because they were already planned
    pub duplicate_count: usize,

    /// Root files skipped by exclude patterns
    pub skip_count: usize,

    /// Files that will be copied
    pub copy_count: usize,
}

/// Ordered, de-duplicated list of files to copy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyPlan {
    pub actions: Vec<PlanAction>,
    pub stats: PlanStats,
    planned: HashSet<PathBuf>,
}

impl CopyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to copy. Returns false if it was already planned.
    pub fn add_copy(&mut self, path: PathBuf) -> bool {
        if !self.planned.insert(path.clone()) {
            self.stats.duplicate_count += 1;
            return false;
        }
        self.stats.copy_count += 1;
        self.actions.push(PlanAction::Copy(path));
        true
    }

    /// Record a skipped root
    pub fn add_skip(&mut self, path: PathBuf) {
        self.stats.skip_count += 1;
        self.actions.push(PlanAction::Skip(path));
    }

    /// Files to copy, in plan order
    pub fn copies(&self) -> impl Iterator<Item = &Path> {
        self.actions.iter().filter_map(|action| match action {
            PlanAction::Copy(path) => Some(path.as_path()),
            PlanAction::Skip(_) => None,
        })
    }

    /// Skipped roots, in plan order
    pub fn skips(&self) -> impl Iterator<Item = &Path> {
        self.actions
            .iter()
            .filter(|action| action.is_skip())
            .map(PlanAction::path)
    }

    pub fn is_empty(&self) -> bool {
        self.stats.copy_count == 0
    }
}

/// Build the plan for a list of root files.
///
/// Roots whose basename matches `filter` are recorded as skipped and not
/// walked. Every other root is planned, followed by its dependencies in
/// the order the resolver reports them. Dependencies are never filtered.
///
/// # Errors
/// Any resolution error aborts the whole plan.
pub fn build_plan<P: AsRef<Path>>(files: &[P], filter: &ExcludeFilter) -> Result<CopyPlan> {
    let mut plan = CopyPlan::new();

    for root in files {
        let root = root.as_ref();
        if filter.is_excluded(root) {
            debug!(event = "plan.root_excluded", file = %root.display());
            plan.add_skip(root.to_path_buf());
            continue;
        }

        plan.stats.root_count += 1;
        plan.add_copy(root.to_path_buf());

        let deps = resolve_root(root)?;
        debug!(
            event = "plan.root_resolved",
            file = %root.display(),
            dependencies = deps.len()
        );
        plan.stats.dependency_count += deps.len();
        for dep in deps {
            plan.add_copy(dep);
        }
    }

    Ok(plan)
}
