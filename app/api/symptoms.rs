use super::upstream::forward;
use crate::Context;
use anyhow::Result;
use hyper::{Body, Request, Response};

pub(crate) async fn get(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	forward(context, request, "symptoms").await
}
