use anyhow::Result;
use clap::Parser;

mod build;
mod dev;
mod watch;

#[derive(Parser)]
enum Args {
	/// Compile the client crates to wasm and write them with the stylesheet to the static directory.
	Build(self::build::Args),
	/// Run the app and restart it when a file changes.
	Dev,
}

fn main() -> Result<()> {
	let args = Args::parse();
	match args {
		Args::Build(args) => self::build::build(args)?,
		Args::Dev => self::dev::dev()?,
	}
	Ok(())
}
