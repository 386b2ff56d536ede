//! Command handlers and the shared wiring between CLI arguments and the
//! core services.

pub mod build;
pub mod completions;
pub mod deps;
pub mod generate;
pub mod inspect;
pub mod package;

use headpack_adapters::{LocalDescriptorSource, PinnedResolver};
use headpack_core::application::RecipeEvaluation;
use headpack_core::domain::{BuildContext, BuildType, OptionSet, RecipeSpec};

use crate::cli::{BuildTypeArg, ContextArgs, RecipeArgs};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Start a recipe evaluation over the local filesystem.
pub(crate) fn evaluation_from(recipe: &RecipeArgs) -> CliResult<RecipeEvaluation> {
    let spec = RecipeSpec::header_only(&recipe.descriptor).with_license(&recipe.license);
    let options = if recipe.test {
        OptionSet::with_tests()
    } else {
        OptionSet::default()
    };
    Ok(RecipeEvaluation::new(
        spec,
        options,
        Box::new(LocalDescriptorSource::new()),
    )?)
}

/// Build the context tuple from flags, config defaults, then built-ins.
pub(crate) fn context_from(args: &ContextArgs, config: &AppConfig) -> CliResult<BuildContext> {
    let build_type = match args.build_type {
        Some(BuildTypeArg::Debug) => BuildType::Debug,
        Some(BuildTypeArg::Release) => BuildType::Release,
        None => match &config.defaults.build_type {
            Some(name) => name.parse().map_err(|_| CliError::ConfigError {
                message: format!("invalid defaults.build_type {name:?}"),
                source: None,
            })?,
            None => BuildType::Release,
        },
    };
    Ok(BuildContext {
        os: args.os.clone(),
        compiler: args.compiler.clone(),
        arch: args.arch.clone(),
        build_type,
        cppstd: args.cppstd.or(config.defaults.cppstd),
    })
}

/// Resolver from config: a pin-table file when configured, the built-in
/// table otherwise.
pub(crate) fn resolver_from(config: &AppConfig) -> CliResult<PinnedResolver> {
    match &config.resolver.pins_file {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
                message: format!("reading pin table {}", path.display()),
                source: Some(Box::new(e)),
            })?;
            Ok(PinnedResolver::from_json(&text)?)
        }
        None => Ok(PinnedResolver::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn context_args(build_type: Option<BuildTypeArg>, cppstd: Option<u32>) -> ContextArgs {
        ContextArgs {
            build_type,
            cppstd,
            os: "Linux".into(),
            compiler: "gcc".into(),
            arch: "x86_64".into(),
        }
    }

    #[test]
    fn context_defaults_to_release() {
        let ctx = context_from(&context_args(None, None), &AppConfig::default()).unwrap();
        assert_eq!(ctx.build_type, BuildType::Release);
        assert_eq!(ctx.cppstd, None);
    }

    #[test]
    fn flag_overrides_config_default() {
        let mut config = AppConfig::default();
        config.defaults.build_type = Some("release".into());
        let ctx = context_from(&context_args(Some(BuildTypeArg::Debug), None), &config).unwrap();
        assert_eq!(ctx.build_type, BuildType::Debug);
    }

    #[test]
    fn config_supplies_cppstd_when_flag_absent() {
        let mut config = AppConfig::default();
        config.defaults.cppstd = Some(20);
        let ctx = context_from(&context_args(None, None), &config).unwrap();
        assert_eq!(ctx.cppstd, Some(20));
    }

    #[test]
    fn invalid_config_build_type_is_a_config_error() {
        let mut config = AppConfig::default();
        config.defaults.build_type = Some("fastest".into());
        let err = context_from(&context_args(None, None), &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn missing_pins_file_is_a_config_error() {
        let mut config = AppConfig::default();
        config.resolver.pins_file = Some(PathBuf::from("/no/such/pins.json"));
        assert!(matches!(
            resolver_from(&config),
            Err(CliError::ConfigError { .. })
        ));
    }
}
