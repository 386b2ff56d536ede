//! Implementation of the `headpack package` command.

use std::path::PathBuf;

use headpack_adapters::{CMakeDriver, LocalWorkspace};
use headpack_core::application::LifecycleService;
use headpack_core::domain::PackageInfo;
use serde::Serialize;

use crate::{
    cli::{OutputFormat, PackageArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Everything the command reports: the artifact receipt plus the
/// consumer-facing package info.
#[derive(Serialize)]
struct PackageReport {
    receipt: headpack_core::application::PackageReceipt,
    info: PackageInfo,
}

pub fn execute(
    args: PackageArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let evaluation = super::evaluation_from(&args.recipe)?;
    let resolver = super::resolver_from(&config)?;

    let source_dir = source_dir(&args);
    let service = LifecycleService::new(
        Box::new(resolver),
        Box::new(CMakeDriver::new(source_dir.clone(), args.build_dir.clone())),
        Box::new(LocalWorkspace::new()),
    );

    let spinner = output.phase_spinner("packaging");
    let receipt = service.package(&evaluation, &source_dir, &args.package_root);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let receipt = receipt?;
    let info = service.publish_info(&evaluation)?;

    if output.format() == OutputFormat::Json {
        let report = PackageReport { receipt, info };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into())
        );
        return Ok(());
    }

    output.success(&format!(
        "Packaged {} {} at {}",
        info.name,
        info.version,
        receipt.package_root.display()
    ))?;
    output.print(&format!("  license: {}", receipt.license_path.display()))?;
    for pruned in &receipt.pruned {
        output.print(&format!("  pruned:  {}", pruned.display()))?;
    }
    if receipt.pruned.is_empty() {
        output.warning("install produced no lib/cmake directory to prune")?;
    }
    output.print(&format!("  consume via target {}", info.cmake_target_name))?;

    Ok(())
}

/// Source tree root: explicit flag, else the descriptor's directory.
fn source_dir(args: &PackageArgs) -> PathBuf {
    args.source_dir.clone().unwrap_or_else(|| {
        args.recipe
            .descriptor
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    })
}
