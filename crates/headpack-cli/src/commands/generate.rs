//! Implementation of the `headpack generate` command.

use headpack_adapters::{CMakeDriver, LocalWorkspace};
use headpack_core::application::LifecycleService;

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let evaluation = super::evaluation_from(&args.recipe)?;
    let context = super::context_from(&args.context, &config)?;
    let resolver = super::resolver_from(&config)?;

    // The build system and workspace ports are wired but untouched here;
    // generation stops before any phase runs.
    let service = LifecycleService::new(
        Box::new(resolver),
        Box::new(CMakeDriver::new(".", "build")),
        Box::new(LocalWorkspace::new()),
    );
    let generated = service.generate(&evaluation, &context)?;

    if output.format() == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&generated).unwrap_or_else(|_| "{}".into())
        );
        return Ok(());
    }

    output.header(&format!("Configuration for {}", generated.identity))?;
    for (name, value) in generated.configuration.variables() {
        output.print(&format!("  {name} = {value}"))?;
    }
    if !generated.bindings.is_empty() {
        output.print("")?;
        output.header("Dependencies:")?;
        for binding in &generated.bindings {
            output.print(&format!("  {} {}", binding.name, binding.version))?;
        }
    }

    Ok(())
}
