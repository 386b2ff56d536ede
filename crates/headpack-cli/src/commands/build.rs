//! Implementation of the `headpack build` command.

use std::path::PathBuf;

use headpack_adapters::{CMakeDriver, LocalWorkspace};
use headpack_core::application::{LifecycleService, LifecycleState};

use crate::{
    cli::{BuildArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: BuildArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let evaluation = super::evaluation_from(&args.recipe)?;
    let context = super::context_from(&args.context, &config)?;
    let resolver = super::resolver_from(&config)?;

    let source_dir = source_dir(&args);
    let service = LifecycleService::new(
        Box::new(resolver),
        Box::new(CMakeDriver::new(source_dir, args.build_dir.clone())),
        Box::new(LocalWorkspace::new()),
    );

    output.info(&format!("build tree: {}", args.build_dir.display()))?;
    let label = if args.recipe.test {
        "configure / build / test"
    } else {
        "configure"
    };
    let spinner = output.phase_spinner(label);
    let outcome = service.build(&evaluation, &context);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let outcome = outcome?;

    match outcome.state {
        LifecycleState::Configured => {
            output.success("Build tree configured (tests disabled)")?;
        }
        LifecycleState::Built => {
            output.success("Targets built")?;
        }
        LifecycleState::Tested => {
            output.success("Targets built and test suite passed")?;
        }
    }

    Ok(())
}

/// Source tree root: explicit flag, else the descriptor's directory.
fn source_dir(args: &BuildArgs) -> PathBuf {
    args.source_dir.clone().unwrap_or_else(|| {
        args.recipe
            .descriptor
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{BuildTypeArg, ContextArgs, RecipeArgs};

    fn build_args(descriptor: &str, source_dir: Option<&str>) -> BuildArgs {
        BuildArgs {
            recipe: RecipeArgs {
                descriptor: PathBuf::from(descriptor),
                license: PathBuf::from("LICENSE.md"),
                test: false,
            },
            context: ContextArgs {
                build_type: Some(BuildTypeArg::Release),
                cppstd: None,
                os: "Linux".into(),
                compiler: "gcc".into(),
                arch: "x86_64".into(),
            },
            source_dir: source_dir.map(PathBuf::from),
            build_dir: PathBuf::from("build"),
        }
    }

    #[test]
    fn source_dir_defaults_to_descriptor_parent() {
        let args = build_args("proj/CMakeLists.txt", None);
        assert_eq!(source_dir(&args), PathBuf::from("proj"));
    }

    #[test]
    fn bare_descriptor_uses_current_directory() {
        let args = build_args("CMakeLists.txt", None);
        assert_eq!(source_dir(&args), PathBuf::from("."));
    }

    #[test]
    fn explicit_source_dir_wins() {
        let args = build_args("proj/CMakeLists.txt", Some("elsewhere"));
        assert_eq!(source_dir(&args), PathBuf::from("elsewhere"));
    }
}
