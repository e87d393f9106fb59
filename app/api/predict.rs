use super::upstream::forward;
use crate::Context;
use anyhow::Result;
use hyper::{Body, Request, Response};

pub(crate) async fn post(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	forward(context, request, "predict").await
}
