//! Command-line interface for slimui
//! Compiles IR documents into widget trees and prints them.
//!
//! Usage:
//!   slimui build `<path>` [--format `<format>`] [--input-format `<fmt>`] [--no-flatten]
//!                [--config `<file>`]
//!   slimui ir `<path>` [--input-format `<fmt>`] [--no-flatten] [--config `<file>`]
//!   slimui list-formats
//!
//! Settings come from the built-in defaults, then `./slimui.toml` if present, then the file given
//! with `--config`, then the flags above.

use clap::{Arg, ArgAction, ArgMatches, Command};
use slimui::ui::formats::{FormatRegistry, TreevizFormatter};
use slimui::ui::loader::{DocumentLoader, IrFormat};
use slimui::ui::toolkit::WidgetTree;
use slimui_config::{InputFormat, Loader, SlimuiConfig};
use std::process;

const LOCAL_CONFIG: &str = "slimui.toml";

fn input_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("path")
                .help("Path to the IR document (JSON or YAML)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("input-format")
                .long("input-format")
                .short('i')
                .help("How to read the document")
                .value_parser(["auto", "json", "yaml"]),
        )
        .arg(
            Arg::new("no-flatten")
                .long("no-flatten")
                .help("Skip the sequence flattening pre-pass")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
}

fn main() {
    env_logger::Builder::from_default_env().init();

    let matches = Command::new("slimui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile template IR documents into widget trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            input_args(Command::new("build").about("Compile a document and print the widget tree"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)"),
                ),
        )
        .subcommand(input_args(
            Command::new("ir").about("Print the document's IR as JSON, after pre-processing"),
        ))
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("build", sub)) => handle_build_command(sub),
        Some(("ir", sub)) => handle_ir_command(sub),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Layer configuration sources, then the flags given on the command line.
fn load_config(matches: &ArgMatches) -> SlimuiConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let overrides = [
        ("input.format", matches.get_one::<String>("input-format").cloned()),
        ("output.format", matches.try_get_one::<String>("format").ok().flatten().cloned()),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            loader = loader
                .set_override(key, value)
                .unwrap_or_else(|e| fail(format!("invalid setting {}: {}", key, e)));
        }
    }
    if matches.get_flag("no-flatten") {
        loader = loader
            .set_override("input.flatten", false)
            .unwrap_or_else(|e| fail(format!("invalid setting input.flatten: {}", e)));
    }

    loader
        .build()
        .unwrap_or_else(|e| fail(format!("could not load configuration: {}", e)))
}

fn ir_format(format: InputFormat) -> IrFormat {
    match format {
        InputFormat::Auto => IrFormat::Auto,
        InputFormat::Json => IrFormat::Json,
        InputFormat::Yaml => IrFormat::Yaml,
    }
}

fn open_document(matches: &ArgMatches, config: &SlimuiConfig) -> DocumentLoader {
    let path = matches
        .get_one::<String>("path")
        .unwrap_or_else(|| fail("missing document path"));
    DocumentLoader::from_path(path)
        .unwrap_or_else(|e| fail(format!("{}: {}", path, e)))
        .with_format(ir_format(config.input.format))
        .with_flatten(config.input.flatten)
}

/// Handle the build command
fn handle_build_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let loader = open_document(matches, &config);

    let mut tree = WidgetTree::new();
    loader.build(&mut tree).unwrap_or_else(|e| fail(e));

    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(config.output.label_width));
    let output = registry
        .serialize(&tree, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            process::exit(1);
        });
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the ir command
fn handle_ir_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let ir = open_document(matches, &config)
        .ir()
        .unwrap_or_else(|e| fail(e));
    let json = serde_json::to_string_pretty(&ir).unwrap_or_else(|e| fail(e));
    println!("{}", json);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
