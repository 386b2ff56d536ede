//! Implementation of the `headpack inspect` command.

use headpack_core::domain::PackageInfo;

use crate::{
    cli::{InspectArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: InspectArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let evaluation = super::evaluation_from(&args.recipe)?;
    let identity = evaluation.identity()?;
    let info = PackageInfo::for_identity(&identity, evaluation.spec().metadata.clone());

    match output.format() {
        OutputFormat::Json => {
            // JSON goes straight to stdout so it stays parseable in pipes.
            println!(
                "{}",
                serde_json::to_string_pretty(&info).unwrap_or_else(|_| "{}".into())
            );
        }
        _ => {
            output.header(&format!("{} @ {}", identity.name, identity.version))?;
            output.print(&format!("  namespace:     {}", identity.namespace))?;
            output.print(&format!("  base name:     {}", identity.base_name))?;
            output.print(&format!("  config prefix: {}", identity.config_prefix))?;
            output.print(&format!("  cmake target:  {}", identity.target_name()))?;
            output.print(&format!("  test variable: {}", identity.test_variable()))?;
        }
    }

    Ok(())
}
