use crate::Context;
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};

pub(crate) async fn get(_context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	let html = medipredict_app_pages_index::render();
	Ok(Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Body::from(html))?)
}
