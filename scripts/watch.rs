use anyhow::Result;
use notify::{DebouncedEvent, Watcher};
use std::{
	path::{Path, PathBuf},
	sync::mpsc::channel,
	time::Duration,
};

/// Run `cmd` and restart it whenever a file under `watch_paths` changes, unless the file is under one of `ignore_paths`.
pub fn watch(
	watch_paths: Vec<PathBuf>,
	ignore_paths: Vec<PathBuf>,
	cmd: String,
	args: Vec<String>,
) -> Result<()> {
	let mut process = ChildProcess::new(cmd, args);
	process.start()?;
	let (tx, rx) = channel();
	let mut watcher = notify::watcher(tx, Duration::from_millis(100))?;
	for path in watch_paths.iter() {
		watcher.watch(path, notify::RecursiveMode::Recursive)?;
	}
	loop {
		let paths = changed_paths(rx.recv()?);
		let changed_path = paths.iter().find(|path| !is_ignored(path, &ignore_paths));
		if let Some(changed_path) = changed_path {
			eprintln!("{} changed, restarting", changed_path.display());
			process.restart()?;
		}
	}
}

fn changed_paths(event: DebouncedEvent) -> Vec<PathBuf> {
	match event {
		DebouncedEvent::Create(path)
		| DebouncedEvent::Write(path)
		| DebouncedEvent::Chmod(path)
		| DebouncedEvent::Remove(path) => vec![path],
		DebouncedEvent::Rename(from, to) => vec![from, to],
		DebouncedEvent::Error(_, path) => path.into_iter().collect(),
		DebouncedEvent::NoticeWrite(_) | DebouncedEvent::NoticeRemove(_) | DebouncedEvent::Rescan => {
			Vec::new()
		}
	}
}

fn is_ignored(path: &Path, ignore_paths: &[PathBuf]) -> bool {
	ignore_paths
		.iter()
		.any(|ignore_path| path.starts_with(ignore_path))
}

struct ChildProcess {
	cmd: String,
	args: Vec<String>,
	process: Option<std::process::Child>,
}

impl ChildProcess {
	pub fn new(cmd: String, args: Vec<String>) -> ChildProcess {
		ChildProcess {
			cmd,
			args,
			process: None,
		}
	}

	pub fn start(&mut self) -> Result<()> {
		let process = std::process::Command::new(&self.cmd)
			.args(&self.args)
			.spawn()?;
		self.process.replace(process);
		Ok(())
	}

	pub fn stop(&mut self) -> Result<()> {
		if let Some(mut process) = self.process.take() {
			process.kill()?;
			process.wait()?;
		}
		Ok(())
	}

	pub fn restart(&mut self) -> Result<()> {
		self.stop()?;
		self.start()?;
		Ok(())
	}
}

impl Drop for ChildProcess {
	fn drop(&mut self) {
		if let Err(error) = self.stop() {
			eprintln!("failed to stop {}: {}", self.cmd, error);
		}
	}
}

#[test]
fn test_is_ignored() {
	let ignore_paths = vec![PathBuf::from("/work/build"), PathBuf::from("/work/target")];
	assert!(is_ignored(Path::new("/work/build/static/styles.css"), &ignore_paths));
	assert!(!is_ignored(Path::new("/work/app/lib.rs"), &ignore_paths));
	assert!(!is_ignored(Path::new("/work/builder.rs"), &ignore_paths));
}
