use crate::Context;
use anyhow::Result;
use hyper::{header, Body, Request, Response};
use medipredict_app_common::error::Error;

/// Send `request` to `path` on the prediction service and pass its status, content type and body back unchanged.
pub(super) async fn forward(
	context: &Context,
	request: Request<Body>,
	path: &str,
) -> Result<Response<Body>> {
	let url = format!(
		"{}/{}",
		context
			.options
			.prediction_service_url
			.as_str()
			.trim_end_matches('/'),
		path
	);
	let method = request.method().clone();
	let content_type = request.headers().get(header::CONTENT_TYPE).cloned();
	let body = hyper::body::to_bytes(request.into_body())
		.await
		.map_err(|_| Error::BadRequest)?;
	let mut upstream_request = context.client.request(method, &url).body(body);
	if let Some(content_type) = content_type {
		upstream_request = upstream_request.header(header::CONTENT_TYPE, content_type);
	}
	let upstream_response = match upstream_request.send().await {
		Ok(upstream_response) => upstream_response,
		Err(error) => {
			log::error!("error reaching the prediction service at {}: {}", url, error);
			return Err(Error::ServiceUnavailable.into());
		}
	};
	let status = upstream_response.status();
	let content_type = upstream_response
		.headers()
		.get(header::CONTENT_TYPE)
		.cloned();
	let body = match upstream_response.bytes().await {
		Ok(body) => body,
		Err(error) => {
			log::error!("error reading the prediction service response: {}", error);
			return Err(Error::ServiceUnavailable.into());
		}
	};
	let mut response = Response::builder().status(status);
	if let Some(content_type) = content_type {
		response = response.header(header::CONTENT_TYPE, content_type);
	}
	Ok(response.body(Body::from(body))?)
}
