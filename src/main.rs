use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stache::{RenderError, RenderRequest, request};

#[derive(Parser)]
#[command(name = "stache")]
#[command(version)]
#[command(about = "Render a template string with variable bindings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template and print the result report as JSON
    #[clap(visible_alias = "r")]
    Render(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Template text to render
    #[arg(short, long, required_unless_present = "request_file", conflicts_with = "request_file")]
    template: Option<String>,

    /// Variable bindings as an inline JSON object
    #[arg(long, conflicts_with_all = ["values_file", "request_file"])]
    values: Option<String>,

    /// Variable bindings from a JSON or YAML file
    #[arg(long, conflicts_with = "request_file")]
    values_file: Option<PathBuf>,

    /// Full request document (template, values, strict) as JSON or YAML
    #[arg(long)]
    request_file: Option<PathBuf>,

    /// Fail when the template references an unbound variable
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render(args),
    }
}

/// Run one render and translate the outcome into the host exit contract:
/// exit 0 with the report on success, exit 1 with the failure report when the
/// engine rejects the template, exit 2 on input errors caught before any
/// render attempt.
fn render(args: RenderArgs) {
    let request = match build_request(args) {
        Ok(request) => request,
        Err(err) => fatal(&err),
    };

    let report = stache::report(&request);
    match report.to_json() {
        Ok(json) => println!("{}", json),
        Err(err) => fatal(&err),
    }

    if !report.success {
        std::process::exit(1);
    }
}

/// Assemble the request from CLI arguments or a request document.
fn build_request(args: RenderArgs) -> Result<RenderRequest, RenderError> {
    if let Some(path) = &args.request_file {
        let request = RenderRequest::from_request_file(path)?;
        // The flag can tighten a document-shaped request but never loosen it.
        return Ok(if args.strict { request.strict(true) } else { request });
    }

    let template = args
        .template
        .ok_or_else(|| RenderError::InvalidRequest("Missing required field: template".into()))?;

    let values = match (args.values, args.values_file) {
        (Some(inline), None) => request::values_from_json(&inline)?,
        (None, Some(path)) => request::values_from_file(&path)?,
        (None, None) => {
            return Err(RenderError::InvalidRequest(
                "Missing required field: values (pass --values or --values-file)".into(),
            ));
        }
        (Some(_), Some(_)) => {
            return Err(RenderError::InvalidRequest(
                "--values and --values-file are mutually exclusive".into(),
            ));
        }
    };

    Ok(RenderRequest::new(template, values).strict(args.strict))
}

fn fatal(err: &RenderError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(2);
}
