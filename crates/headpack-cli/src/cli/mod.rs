//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "headpack",
    bin_name = "headpack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4e6} Build-recipe controller for header-only C++ packages",
    long_about = "headpack drives the configure/build/test/package lifecycle of \
                  header-only C++ packages whose identity lives inside a \
                  CMake-style descriptor file.",
    after_help = "EXAMPLES:\n\
        \x20 headpack inspect CMakeLists.txt\n\
        \x20 headpack generate CMakeLists.txt --test\n\
        \x20 headpack build CMakeLists.txt --test --build-dir build\n\
        \x20 headpack package CMakeLists.txt --package-root pkg\n\
        \x20 headpack completions bash > /usr/share/bash-completion/completions/headpack",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve and print a recipe's identity.
    #[command(
        visible_alias = "i",
        about = "Resolve the package identity from a descriptor",
        after_help = "EXAMPLES:\n\
            \x20 headpack inspect CMakeLists.txt\n\
            \x20 headpack inspect CMakeLists.txt --output-format json"
    )]
    Inspect(InspectArgs),

    /// List declared dependency requirements.
    #[command(
        about = "List declared dependency requirements",
        after_help = "EXAMPLES:\n\
            \x20 headpack deps CMakeLists.txt\n\
            \x20 headpack deps CMakeLists.txt --resolve"
    )]
    Deps(DepsArgs),

    /// Generate the toolchain configuration for a build context.
    #[command(
        visible_alias = "gen",
        about = "Generate the toolchain configuration",
        after_help = "EXAMPLES:\n\
            \x20 headpack generate CMakeLists.txt\n\
            \x20 headpack generate CMakeLists.txt --test --build-type debug"
    )]
    Generate(GenerateArgs),

    /// Run the configure / build / test lifecycle.
    #[command(
        about = "Run the build lifecycle",
        after_help = "EXAMPLES:\n\
            \x20 headpack build CMakeLists.txt --build-dir build\n\
            \x20 headpack build CMakeLists.txt --test --build-dir build"
    )]
    Build(BuildArgs),

    /// Produce the package layout from a built tree.
    #[command(
        about = "Package headers and license",
        after_help = "EXAMPLES:\n\
            \x20 headpack package CMakeLists.txt --build-dir build --package-root pkg"
    )]
    Package(PackageArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 headpack completions bash > ~/.local/share/bash-completion/completions/headpack\n\
            \x20 headpack completions zsh  > ~/.zfunc/_headpack\n\
            \x20 headpack completions fish > ~/.config/fish/completions/headpack.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared recipe/context arguments ───────────────────────────────────────────

/// Arguments identifying the recipe under evaluation.  Shared by every
/// lifecycle subcommand.
#[derive(Debug, Args)]
pub struct RecipeArgs {
    /// Path to the descriptor file the identity is read from.
    #[arg(value_name = "DESCRIPTOR", help = "Descriptor file (CMakeLists.txt)")]
    pub descriptor: PathBuf,

    /// License file, relative to the source root.
    #[arg(
        long = "license",
        value_name = "FILE",
        default_value = "LICENSE.md",
        help = "License file relative to the source root"
    )]
    pub license: PathBuf,

    /// Enable the test option: build and run the test suite.
    #[arg(long = "test", help = "Enable building and running tests")]
    pub test: bool,
}

/// Arguments describing the build context tuple.
#[derive(Debug, Args)]
pub struct ContextArgs {
    /// Build type.  Falls back to the configured default, then Release.
    #[arg(
        long = "build-type",
        value_enum,
        help = "Build type [default: release]"
    )]
    pub build_type: Option<BuildTypeArg>,

    /// C++ standard the toolchain is configured for, when known.
    #[arg(long = "cppstd", value_name = "STD", help = "Toolchain C++ standard (e.g. 20)")]
    pub cppstd: Option<u32>,

    /// Target operating system.
    #[arg(long = "os", default_value = "Linux", help = "Target operating system")]
    pub os: String,

    /// Compiler name.
    #[arg(long = "compiler", default_value = "gcc", help = "Compiler")]
    pub compiler: String,

    /// Target architecture.
    #[arg(long = "arch", default_value = "x86_64", help = "Target architecture")]
    pub arch: String,
}

/// Build type accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BuildTypeArg {
    Debug,
    Release,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `headpack inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,
}

// ── deps ──────────────────────────────────────────────────────────────────────

/// Arguments for `headpack deps`.
#[derive(Debug, Args)]
pub struct DepsArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Bind requirements to concrete versions as well.
    #[arg(long = "resolve", help = "Resolve requirements to pinned versions")]
    pub resolve: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `headpack generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,

    #[command(flatten)]
    pub context: ContextArgs,
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `headpack build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Source tree root (defaults to the descriptor's directory).
    #[arg(long = "source-dir", value_name = "DIR", help = "Source tree root")]
    pub source_dir: Option<PathBuf>,

    /// Build tree directory.
    #[arg(
        long = "build-dir",
        value_name = "DIR",
        default_value = "build",
        help = "Build tree directory"
    )]
    pub build_dir: PathBuf,
}

// ── package ───────────────────────────────────────────────────────────────────

/// Arguments for `headpack package`.
#[derive(Debug, Args)]
pub struct PackageArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,

    /// Source tree root (defaults to the descriptor's directory).
    #[arg(long = "source-dir", value_name = "DIR", help = "Source tree root")]
    pub source_dir: Option<PathBuf>,

    /// Build tree directory the install step reads from.
    #[arg(
        long = "build-dir",
        value_name = "DIR",
        default_value = "build",
        help = "Build tree directory"
    )]
    pub build_dir: PathBuf,

    /// Package layout root.
    #[arg(
        long = "package-root",
        value_name = "DIR",
        default_value = "pkg",
        help = "Package layout root"
    )]
    pub package_root: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `headpack completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
