//! WRML Schema CLI
//!
//! Command-line interface for resolving schema paths and probing content
//! negotiation.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use wrml_schema::{negotiate, resolve, RequestContext, SchemaRegistry};

#[derive(Parser)]
#[command(name = "wrml-schema")]
#[command(about = "Resolve WRML resource schemas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request path against the built-in schema registry
    Resolve {
        /// Hierarchical request path (e.g. /org/wrml/model/Document)
        path: String,

        /// Host the schemas are served from
        #[arg(long, default_value = "localhost")]
        host: String,

        /// URI scheme
        #[arg(long, default_value = "http")]
        scheme: String,

        /// Explicit port (omitted from URIs when it is the scheme default)
        #[arg(long)]
        port: Option<u16>,

        /// Accept header to negotiate the response representation with
        #[arg(long)]
        accept: Option<String>,

        /// Print the negotiated Content-Type header before the schema
        #[arg(long)]
        header: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Pick the best supported media type for an Accept header
    Negotiate {
        /// Accept header value (e.g. "application/json;q=0.8, text/html")
        accept: String,

        /// Supported media types to negotiate against
        #[arg(long = "supported", required = true, num_args = 1..)]
        supported: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve {
            path,
            host,
            scheme,
            port,
            accept,
            header,
            pretty,
        } => run_resolve(path, host, scheme, port, accept, header, pretty),

        Commands::Negotiate { accept, supported } => run_negotiate(&accept, &supported),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_resolve(
    path: String,
    host: String,
    scheme: String,
    port: Option<u16>,
    accept: Option<String>,
    header: bool,
    pretty: bool,
) -> Result<(), u8> {
    let mut context = RequestContext::new(scheme, host, path);
    if let Some(port) = port {
        context = context.port(port);
    }
    if let Some(accept) = accept {
        context = context.accept(accept);
    }

    let registry = SchemaRegistry::builtin();
    let resolution = resolve(&context, &registry).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    if header {
        println!("Content-Type: {}", resolution.content_type);
    }

    let json_output = if pretty {
        serde_json::to_string_pretty(&resolution.schema)
    } else {
        serde_json::to_string(&resolution.schema)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    println!("{}", json_output);

    Ok(())
}

fn run_negotiate(accept: &str, supported: &[String]) -> Result<(), u8> {
    let supported: Vec<&str> = supported.iter().map(String::as_str).collect();

    match negotiate(accept, &supported) {
        Some(best) => {
            println!("{}", best);
            Ok(())
        }
        None => {
            eprintln!("No acceptable representation");
            Err(1)
        }
    }
}
