//! Implementation of the scaffold run.
//!
//! Responsibility: translate CLI arguments into paths, call the core
//! scaffold service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use formwork_adapters::{LocalFilesystem, TemplateLocator};
use formwork_core::{
    application::ScaffoldService,
    domain::{CopyOutcome, EntryKind},
};

use crate::{
    cli::{Cli, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a scaffold invocation.
///
/// Dispatch sequence:
/// 1. Validate the target and derive the destination path
/// 2. Resolve the template root (flag override → env → bundled locations)
/// 3. Early-exit if `--dry-run`
/// 4. Execute the copy via `ScaffoldService`
/// 5. Print the outcome summary and next-steps guidance
#[instrument(skip_all, fields(target = cli.target.as_deref().unwrap_or("")))]
pub fn execute(cli: Cli, output: OutputManager) -> CliResult<()> {
    // 1. Resolve the destination
    let target = cli.target.clone().unwrap_or_default();
    let destination = resolve_destination(&target)?;

    // 2. Resolve the template root
    let locator = match &cli.template_dir {
        Some(dir) => TemplateLocator::with_override(dir),
        None => TemplateLocator::new(),
    };
    let template_root = locator.resolve().map_err(CliError::Core)?;

    debug!(
        template = %template_root.display(),
        destination = %destination.display(),
        force = cli.force,
        "paths resolved"
    );

    // 3. Dry run: describe but do not write.
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    if cli.dry_run {
        return dry_run(&service, &template_root, &destination, &output);
    }

    // 4. Copy
    if output.format() != OutputFormat::Json {
        output.header(&format!(
            "Scaffolding into '{}'...",
            destination.display()
        ))?;
    }
    info!(destination = %destination.display(), "scaffold started");

    let outcome = service
        .scaffold(&template_root, &destination, cli.force)
        .map_err(CliError::Core)?;

    info!(entries = outcome.total_entries(), "scaffold completed");

    // 5. Report
    report(&outcome, &target, &output)
}

// ── Path resolution ───────────────────────────────────────────────────────────

fn resolve_destination(target: &str) -> CliResult<PathBuf> {
    if target.is_empty() {
        return Err(CliError::InvalidTarget {
            target: target.into(),
            reason: "target cannot be empty".into(),
        });
    }
    Ok(PathBuf::from(target))
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn dry_run(
    service: &ScaffoldService,
    template_root: &std::path::Path,
    destination: &std::path::Path,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = service.plan(template_root).map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        output.machine(&to_json(&plan)?)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would copy {} entries into '{}'",
        plan.len(),
        destination.display(),
    ))?;
    for entry in &plan {
        let kind = match entry.kind {
            EntryKind::Directory => "dir ",
            EntryKind::File => "file",
        };
        output.print(&format!("  {kind}  {}", entry.path.display()))?;
    }
    Ok(())
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn report(outcome: &CopyOutcome, target: &str, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.machine(&to_json(outcome)?)?;
        return Ok(());
    }

    if outcome.files_overwritten > 0 {
        output.warning(&format!(
            "{} existing file(s) overwritten",
            outcome.files_overwritten
        ))?;
    }

    output.success(&format!(
        "Scaffolded {} director{} and {} file(s)",
        outcome.directories_created,
        if outcome.directories_created == 1 {
            "y"
        } else {
            "ies"
        },
        outcome.files_copied + outcome.files_overwritten,
    ))?;

    if !output.is_quiet() && target != "." {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {target}"))?;
        output.print("  # Start building!")?;
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::IoError {
        message: "failed to serialize output".into(),
        source: std::io::Error::other(e),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_core::domain::PlannedEntry;

    #[test]
    fn empty_target_is_invalid() {
        assert!(matches!(
            resolve_destination(""),
            Err(CliError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn dot_targets_the_current_directory() {
        assert_eq!(resolve_destination(".").unwrap(), PathBuf::from("."));
    }

    #[test]
    fn plain_name_becomes_a_relative_path() {
        assert_eq!(
            resolve_destination("my-service").unwrap(),
            PathBuf::from("my-service")
        );
    }

    #[test]
    fn nested_target_paths_are_allowed() {
        assert_eq!(
            resolve_destination("tmp/out").unwrap(),
            PathBuf::from("tmp/out")
        );
    }

    #[test]
    fn plan_serializes_to_json() {
        let plan = vec![PlannedEntry {
            path: PathBuf::from("app"),
            kind: EntryKind::Directory,
        }];
        let json = to_json(&plan).unwrap();
        assert!(json.contains("\"app\""));
        assert!(json.contains("\"directory\""));
    }
}
