//! CLI argument parsing with clap.

use clap::{Args, Parser, Subcommand};

/// QR code server - renders QR codes as PNG over HTTP or from the command line.
#[derive(Parser, Debug)]
#[command(name = "qr-code-server", version, about)]
pub struct Cli {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Command to run (defaults to `serve`).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Render a single QR code to a file or stdout.
    Render(RenderArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(ServeArgs::default())
    }
}

/// Arguments for `serve`.
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Port to listen on (overrides config and `PORT`).
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for `render`.
#[derive(Args, Debug, PartialEq, Eq)]
pub struct RenderArgs {
    /// Data to encode.
    pub data: String,

    /// Image size in pixels (configured default if omitted).
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Output file path, or `-` for stdout (auto-generated if not specified).
    #[arg(short, long)]
    pub output: Option<String>,
}
