use html::{component, html, raw};

#[derive(Clone)]
pub struct PageInfo {
	pub client_wasm_js_src: Option<String>,
}

#[component]
pub fn Document(page_info: PageInfo) {
	html! {
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta content="width=device-width, initial-scale=1" name="viewport" />
				<link href="/favicon.png" rel="icon" type="image/png" />
				<title>{"MediPredict"}</title>
				<link href="/styles.css" rel="stylesheet" />
				<meta
					content="Select your symptoms and get a best guess at the condition behind them."
					name="description"
				/>
			</head>
			<body>
				{children}
				{page_info.client_wasm_js_src.map(|client_wasm_js_src| html! {
					<script type="module">
						{raw!(format!(r#"import init from "{}"; init()"#, client_wasm_js_src))}
					</script>
				})}
			</body>
		</html>
	}
}

#[test]
fn test_document_loads_client() {
	let html = html! {
		<Document page_info={PageInfo { client_wasm_js_src: Some("/js/abc.js".to_owned()) }}>
			<main>{"content"}</main>
		</Document>
	}
	.render_to_string();
	assert!(html.starts_with(r#"<html lang="en"><head><meta charset="utf-8" />"#));
	assert!(html.contains("<main>content</main>"));
	assert!(html.contains(r#"<script type="module">import init from "/js/abc.js"; init()</script>"#));
}
