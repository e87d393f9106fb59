//! This module contains the main entrypoint to the medipredict cli.

use anyhow::Result;
use clap::{Args, Parser};
use colored::Colorize;
use std::path::PathBuf;
use url::Url;

#[derive(Parser)]
#[clap(
	about = "Suggest the most likely condition for a set of symptoms.",
	disable_help_subcommand = true
)]
enum Options {
	#[clap(name = "app")]
	App(AppOptions),
}

#[derive(Args)]
#[clap(about = "run the app")]
#[clap(long_about = "serve the symptom form and forward its requests to the prediction service")]
struct AppOptions {
	#[clap(long, env = "HOST", default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	port: u16,
	#[clap(
		long,
		env = "PREDICTION_SERVICE_URL",
		help = "the base url of the service that answers /symptoms and /predict"
	)]
	prediction_service_url: Url,
	#[clap(
		long,
		env = "STATIC_DIR",
		default_value = "build/static",
		help = "the directory holding styles.css and the compiled client in js/"
	)]
	static_dir: PathBuf,
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("medipredict=info"))
		.format_timestamp(None)
		.format_module_path(false)
		.format_target(false)
		.format_level(false)
		.init();
	let options = Options::parse();
	let result = match options {
		Options::App(options) => cli_app(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_app(options: AppOptions) -> Result<()> {
	medipredict_app::run(medipredict_app::Options {
		host: options.host,
		port: options.port,
		prediction_service_url: options.prediction_service_url,
		static_dir: options.static_dir,
	})
}
