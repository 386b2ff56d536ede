//! Implementation of the `headpack deps` command.

use headpack_core::application::ports::DependencyResolver;

use crate::{
    cli::{DepsArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: DepsArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let evaluation = super::evaluation_from(&args.recipe)?;
    let requests = evaluation.spec().dependencies.clone();

    if args.resolve {
        let context = super::context_from(&args.context, &config)?;
        let resolver = super::resolver_from(&config)?;
        let bindings = resolver.resolve(&requests, &context)?;

        if output.format() == OutputFormat::Json {
            println!(
                "{}",
                serde_json::to_string_pretty(&bindings).unwrap_or_else(|_| "[]".into())
            );
            return Ok(());
        }
        output.header("Resolved dependencies:")?;
        for binding in &bindings {
            output.print(&format!("  {} {}", binding.name, binding.version))?;
        }
        return Ok(());
    }

    if output.format() == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&requests).unwrap_or_else(|_| "[]".into())
        );
        return Ok(());
    }
    output.header("Declared requirements:")?;
    for request in &requests {
        output.print(&format!(
            "  {} {} ({:?})",
            request.name, request.requirement, request.scope
        ))?;
    }

    Ok(())
}
