use self::context::Context;
use anyhow::Result;
use hyper::{Body, Method, Request, Response, StatusCode};
use medipredict_app_common::error::Error;
use std::{path::PathBuf, sync::Arc};
use url::Url;

mod api;
mod index;
mod static_files;

pub struct Options {
	pub host: std::net::IpAddr,
	pub port: u16,
	/// The base url of the service that answers `/symptoms` and `/predict`.
	pub prediction_service_url: Url,
	pub static_dir: PathBuf,
}

mod context {
	pub struct Context {
		pub options: super::Options,
		pub client: reqwest::Client,
	}
}

async fn handle(context: Arc<Context>, request: Request<Body>) -> Response<Body> {
	let method = request.method().clone();
	let path = request.uri().path().to_owned();
	let path_components: Vec<_> = path.split('/').skip(1).collect();
	let result = match (&method, path_components.as_slice()) {
		(&Method::GET, &[""]) => self::index::get(&context, request).await,
		(&Method::GET, &["health"]) => self::api::health::get(&context, request).await,
		(&Method::GET, &["symptoms"]) => self::api::symptoms::get(&context, request).await,
		(&Method::POST, &["predict"]) => self::api::predict::post(&context, request).await,
		(&Method::GET, _) => self::static_files::get(&context, request).await,
		_ => Err(Error::NotFound.into()),
	};
	let response = match result {
		Ok(response) => response,
		Err(error) => {
			if let Some(error) = error.downcast_ref::<Error>() {
				match error {
					Error::BadRequest => Response::builder()
						.status(StatusCode::BAD_REQUEST)
						.body(Body::from("bad request"))
						.unwrap(),
					Error::NotFound => Response::builder()
						.status(StatusCode::NOT_FOUND)
						.body(Body::from("not found"))
						.unwrap(),
					Error::ServiceUnavailable => Response::builder()
						.status(StatusCode::SERVICE_UNAVAILABLE)
						.body(Body::from("service unavailable"))
						.unwrap(),
				}
			} else {
				log::error!("{}", error);
				Response::builder()
					.status(StatusCode::INTERNAL_SERVER_ERROR)
					.body(Body::from("internal server error"))
					.unwrap()
			}
		}
	};
	log::info!("{} {} {}", method, path, response.status().as_u16());
	response
}

pub fn run(options: Options) -> Result<()> {
	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(run_impl(options))
}

async fn run_impl(options: Options) -> Result<()> {
	let host = options.host;
	let port = options.port;
	log::info!(
		"forwarding prediction requests to {}",
		options.prediction_service_url
	);
	let context = Context {
		client: reqwest::Client::new(),
		options,
	};
	medipredict_util::serve::serve(host, port, context, handle).await?;
	Ok(())
}
