use anyhow::{anyhow, Result};
use medipredict_util::serve::hash;
use std::path::{Path, PathBuf};
use which::which;

#[derive(clap::Args)]
pub struct Args {
	#[clap(long, default_value = "build/static")]
	static_dir: PathBuf,
	#[clap(long)]
	release: bool,
}

/// Client bundles are written to `<static_dir>/js/<hash>.js`, where the hash is of the client crate's manifest path relative to the workspace. This is the name the `client!` macro computes for a page.
pub fn build(args: Args) -> Result<()> {
	let workspace_dir = std::env::current_dir()?;
	let cargo_wasm_dir = workspace_dir.join("target_wasm");
	let output_wasm_dir = args.static_dir.join("js");
	std::fs::create_dir_all(&output_wasm_dir)?;
	let client_crate_manifest_paths = client_crate_manifest_paths(&workspace_dir)?;
	let client_crate_package_names = client_crate_manifest_paths
		.iter()
		.map(|client_crate_manifest_path| {
			package_name(&workspace_dir.join(client_crate_manifest_path))
		})
		.collect::<Result<Vec<_>>>()?;
	let cmd = which("cargo")?;
	let mut cargo_args = vec![
		"build".to_owned(),
		"--target".to_owned(),
		"wasm32-unknown-unknown".to_owned(),
		"--target-dir".to_owned(),
		cargo_wasm_dir.display().to_string(),
	];
	if args.release {
		cargo_args.push("--release".to_owned())
	}
	for client_crate_package_name in client_crate_package_names.iter() {
		cargo_args.push("--package".to_owned());
		cargo_args.push(client_crate_package_name.clone());
	}
	let status = std::process::Command::new(cmd)
		.args(&cargo_args)
		.spawn()?
		.wait()?;
	if !status.success() {
		return Err(anyhow!("cargo {}", status));
	}
	for (client_crate_manifest_path, client_crate_package_name) in client_crate_manifest_paths
		.iter()
		.zip(client_crate_package_names.iter())
	{
		let client_crate_manifest_path = client_crate_manifest_path
			.to_str()
			.ok_or_else(|| anyhow!("invalid path {}", client_crate_manifest_path.display()))?;
		let hash = hash(client_crate_manifest_path);
		let input_wasm_path = cargo_wasm_dir
			.join("wasm32-unknown-unknown")
			.join(if args.release { "release" } else { "debug" })
			.join(format!("{}.wasm", client_crate_package_name));
		wasm_bindgen_cli_support::Bindgen::new()
			.web(true)?
			.keep_debug(!args.release)
			.remove_producers_section(true)
			.remove_name_section(true)
			.input_path(input_wasm_path)
			.out_name(&hash)
			.generate(&output_wasm_dir)?;
		eprintln!("{} -> js/{}.js", client_crate_package_name, hash);
	}
	let css = collect_css(&workspace_dir)?;
	std::fs::write(args.static_dir.join("styles.css"), css)?;
	Ok(())
}

/// Every `client/Cargo.toml` under `app/pages`, relative to the workspace.
fn client_crate_manifest_paths(workspace_dir: &Path) -> Result<Vec<PathBuf>> {
	let mut client_crate_manifest_paths = Vec::new();
	for entry in ignore::Walk::new(workspace_dir.join("app").join("pages")) {
		let entry = entry?;
		let path = entry.path();
		if path.ends_with("client/Cargo.toml") {
			client_crate_manifest_paths.push(path.strip_prefix(workspace_dir)?.to_owned());
		}
	}
	client_crate_manifest_paths.sort();
	Ok(client_crate_manifest_paths)
}

fn package_name(manifest_path: &Path) -> Result<String> {
	let manifest = std::fs::read_to_string(manifest_path)?;
	let manifest: toml::Value = toml::from_str(&manifest)?;
	let package_name = manifest
		.get("package")
		.and_then(|package| package.get("name"))
		.and_then(|name| name.as_str())
		.ok_or_else(|| anyhow!("{} has no package name", manifest_path.display()))?;
	Ok(package_name.to_owned())
}

fn collect_css(workspace_dir: &Path) -> Result<String> {
	let mut css = String::new();
	for dir in ["app", "ui"].iter() {
		for entry in ignore::Walk::new(workspace_dir.join(dir)) {
			let entry = entry?;
			let path = entry.path();
			if path.extension().and_then(|extension| extension.to_str()) == Some("css") {
				css.push_str(&std::fs::read_to_string(path)?);
			}
		}
	}
	Ok(css)
}

#[test]
fn test_package_name() {
	let manifest_path = Path::new(env!("CARGO_MANIFEST_DIR"))
		.join("../app/pages/index/client/Cargo.toml");
	assert_eq!(
		package_name(&manifest_path).unwrap(),
		"medipredict_app_pages_index_client"
	);
}
