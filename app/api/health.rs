use crate::Context;
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};

#[derive(serde::Serialize)]
struct HealthResponse {
	status: &'static str,
	message: &'static str,
}

pub(crate) async fn get(_context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	let body = serde_json::to_string(&HealthResponse {
		status: "healthy",
		message: "API is running",
	})?;
	Ok(Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body))?)
}
