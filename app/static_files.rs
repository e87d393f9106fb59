use crate::Context;
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};
use medipredict_app_common::error::Error;
use std::path::{Component, Path};

fn content_type(path: &Path) -> Option<&'static str> {
	match path.extension()?.to_str()? {
		"css" => Some("text/css"),
		"html" => Some("text/html; charset=utf-8"),
		"js" => Some("text/javascript"),
		"png" => Some("image/png"),
		"svg" => Some("image/svg+xml"),
		"wasm" => Some("application/wasm"),
		_ => None,
	}
}

/// Serve a file from the static directory. Paths that leave the static directory are not found.
pub(crate) async fn get(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	let relative_path = Path::new(request.uri().path().trim_start_matches('/'));
	if !relative_path
		.components()
		.all(|component| matches!(component, Component::Normal(_)))
	{
		return Err(Error::NotFound.into());
	}
	let static_path = context.options.static_dir.join(relative_path);
	let is_file = tokio::fs::metadata(&static_path)
		.await
		.map(|metadata| metadata.is_file())
		.unwrap_or(false);
	if !is_file {
		return Err(Error::NotFound.into());
	}
	let body = tokio::fs::read(&static_path).await?;
	let mut response = Response::builder().status(StatusCode::OK);
	if let Some(content_type) = content_type(&static_path) {
		response = response.header(header::CONTENT_TYPE, content_type);
	}
	Ok(response.body(Body::from(body))?)
}

#[test]
fn test_content_type() {
	assert_eq!(content_type(Path::new("js/abc.js")), Some("text/javascript"));
	assert_eq!(content_type(Path::new("js/abc_bg.wasm")), Some("application/wasm"));
	assert_eq!(content_type(Path::new("styles.css")), Some("text/css"));
	assert_eq!(content_type(Path::new("LICENSE")), None);
}
