//! qr-code-server - QR code rendering over HTTP or the command line.

use std::process;

use clap::Parser;

use qr_code_server::cli::{Cli, Command, RenderArgs};
use qr_code_server::config::{self, Config};
use qr_code_server::context::ServiceContext;
use qr_code_server::error::AppError;
use qr_code_server::generator::GenerationRequest;
use qr_code_server::logging;
use qr_code_server::output::{resolve_output, save_image, write_stdout, OutputTarget};
use qr_code_server::server;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load_with_env(&config_path).map_err(AppError::Config)?;

    logging::init(&config.log.level)?;

    let ctx = ServiceContext::live(&config)?;

    match cli.command.unwrap_or_default() {
        Command::Serve(args) => {
            let port = args.port.unwrap_or(config.server.port);
            server::start_server(port, ctx).await
        }
        Command::Render(args) => render(&ctx, &args),
    }
}

fn render(ctx: &ServiceContext, args: &RenderArgs) -> Result<(), AppError> {
    let request = GenerationRequest::new(args.data.as_str(), args.size);
    let image = ctx.generator.generate(&request)?;

    match resolve_output(args.output.as_deref(), &args.data) {
        OutputTarget::Stdout => write_stdout(&image.bytes),
        OutputTarget::File(path) => {
            save_image(&image.bytes, &path)?;
            eprintln!("Saved: {}", path.display());
            Ok(())
        }
    }
}
