use crate::watch::watch;
use anyhow::Result;

pub fn dev() -> Result<()> {
	let workspace_path = std::env::current_dir()?;
	let build_path = workspace_path.join("build");
	let target_path = workspace_path.join("target");
	let target_wasm_path = workspace_path.join("target_wasm");
	let watch_paths = vec![workspace_path];
	let ignore_paths = vec![build_path, target_path, target_wasm_path];
	let cmd = "sh".to_owned();
	let args = vec![
		"-c".to_owned(),
		"cargo run --bin medipredict_scripts -- build && cargo run --bin medipredict -- app"
			.to_owned(),
	];
	watch(watch_paths, ignore_paths, cmd, args)?;
	Ok(())
}
