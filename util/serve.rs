use backtrace::Backtrace;
use futures::FutureExt;
use sha2::Digest;
use std::{cell::RefCell, convert::Infallible, future::Future, panic::AssertUnwindSafe, sync::Arc};

#[macro_export]
macro_rules! client {
	() => {{
		let file_path = ::std::path::Path::new(file!());
		let client_crate_manifest_path = file_path.parent().unwrap().join("client/Cargo.toml");
		let hash = medipredict_util::serve::hash(client_crate_manifest_path.to_str().unwrap());
		format!("/js/{}.js", hash)
		}};
}

pub async fn serve<C, H, F>(
	host: std::net::IpAddr,
	port: u16,
	request_handler_context: C,
	request_handler: H,
) -> hyper::Result<()>
where
	C: Send + Sync + 'static,
	H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
	F: Future<Output = http::Response<hyper::Body>> + Send,
{
	// This task local holds the panic message and backtrace of the request handler, if it panics.
	tokio::task_local! {
		static PANIC_MESSAGE_AND_BACKTRACE: RefCell<Option<(String, Backtrace)>>;
	}
	async fn service<C, H, F>(
		request_handler: Arc<H>,
		request_handler_context: Arc<C>,
		request: http::Request<hyper::Body>,
	) -> Result<http::Response<hyper::Body>, Infallible>
	where
		C: Send + Sync + 'static,
		H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
		F: Future<Output = http::Response<hyper::Body>> + Send,
	{
		let method = request.method().clone();
		let path = request.uri().path().to_owned();
		let result = AssertUnwindSafe(request_handler(request_handler_context, request))
			.catch_unwind()
			.await;
		let response = result.unwrap_or_else(|_| {
			let body = PANIC_MESSAGE_AND_BACKTRACE.with(|panic_message_and_backtrace| {
				let panic_message_and_backtrace = panic_message_and_backtrace.borrow();
				match panic_message_and_backtrace.as_ref() {
					Some((message, backtrace)) => format!("{}\n{:?}", message, backtrace),
					None => "internal server error".to_owned(),
				}
			});
			log::error!("{} {} 500\n{}", method, path, body);
			let mut response = http::Response::new(hyper::Body::from(body));
			*response.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
			response
		});
		Ok(response)
	}
	// Record the panic message and backtrace when a request handler panics.
	let hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(|panic_info| {
		let value = (panic_info.to_string(), Backtrace::new());
		let _ = PANIC_MESSAGE_AND_BACKTRACE.try_with(|panic_message_and_backtrace| {
			panic_message_and_backtrace.borrow_mut().replace(value);
		});
	}));
	let request_handler = Arc::new(request_handler);
	let request_handler_context = Arc::new(request_handler_context);
	let service = hyper::service::make_service_fn(|_| {
		let request_handler = request_handler.clone();
		let request_handler_context = request_handler_context.clone();
		async move {
			Ok::<_, Infallible>(hyper::service::service_fn(move |request| {
				let request_handler = request_handler.clone();
				let request_handler_context = request_handler_context.clone();
				PANIC_MESSAGE_AND_BACKTRACE.scope(RefCell::new(None), async move {
					service(request_handler, request_handler_context, request).await
				})
			}))
		}
	});
	let addr = std::net::SocketAddr::new(host, port);
	let server = hyper::Server::try_bind(&addr)?;
	log::info!("serving on {}", addr);
	server.serve(service).await?;
	std::panic::set_hook(hook);
	Ok(())
}

/// The first 16 hex digits of the sha256 of `s`. Client bundles are named by the hash of their crate's manifest path.
pub fn hash(s: &str) -> String {
	let mut hash = sha2::Sha256::new();
	hash.update(s);
	let hash = hash.finalize();
	let hash = hex::encode(hash);
	hash[0..16].to_owned()
}

#[test]
fn test_hash() {
	let manifest_hash = hash("app/pages/index/client/Cargo.toml");
	assert_eq!(manifest_hash.len(), 16);
	assert!(manifest_hash.chars().all(|c| c.is_ascii_hexdigit()));
	assert_eq!(manifest_hash, hash("app/pages/index/client/Cargo.toml"));
	assert_ne!(manifest_hash, hash("app/pages/other/client/Cargo.toml"));
}
