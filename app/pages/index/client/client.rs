use anyhow::Result;
use futures::{future::LocalBoxFuture, FutureExt};
use medipredict_app_common::{
	predict::PredictResponse,
	selection::PredictRequest,
	symptom::{Symptom, SymptomsResponse},
	symptom_form::{PredictionService, SymptomForm, SymptomFormView, SymptomRowView},
};
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::console;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	ConsoleLogger::init();
	let window = web_sys::window().unwrap();
	let document = window.document().unwrap();
	let origin = window.location().origin().unwrap();
	let form = Rc::new(SymptomForm::new(
		DomView {
			symptoms_container: document.get_element_by_id("symptoms-container"),
			result_section: document.get_element_by_id("result-section"),
			window,
		},
		FetchPredictionService::new(origin),
	));
	if let Some(search) = document.get_element_by_id("symptom-search") {
		let form = form.clone();
		let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
			if let Some(current_target) = event.current_target() {
				let current_target = current_target
					.dyn_into::<web_sys::HtmlInputElement>()
					.unwrap();
				form.filter_symptoms(&current_target.value());
			}
		}));
		search
			.add_event_listener_with_callback("input", callback_fn.as_ref().unchecked_ref())
			.unwrap();
		callback_fn.forget();
	}
	if let Some(predict_form) = document.get_element_by_id("predict-form") {
		let form = form.clone();
		let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
			event.prevent_default();
			let form = form.clone();
			wasm_bindgen_futures::spawn_local(async move { form.submit().await });
		}));
		predict_form
			.add_event_listener_with_callback("submit", callback_fn.as_ref().unchecked_ref())
			.unwrap();
		callback_fn.forget();
	}
	if let Some(clear_button) = document.get_element_by_id("clear-btn") {
		let form = form.clone();
		let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |_: web_sys::Event| {
			form.clear();
		}));
		clear_button
			.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())
			.unwrap();
		callback_fn.forget();
	}
	wasm_bindgen_futures::spawn_local(async move { form.load_symptoms().await });
}

/// Operations on an element missing from the page do nothing.
struct DomView {
	symptoms_container: Option<web_sys::Element>,
	result_section: Option<web_sys::Element>,
	window: web_sys::Window,
}

impl DomView {
	fn query_symptoms_container(&self, selector: &str) -> Vec<web_sys::Element> {
		let node_list = match &self.symptoms_container {
			Some(container) => container.query_selector_all(selector).unwrap(),
			None => return Vec::new(),
		};
		(0..node_list.length())
			.filter_map(|index| node_list.get(index))
			.filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
			.collect()
	}

	fn checkboxes(&self, selector: &str) -> Vec<web_sys::HtmlInputElement> {
		self.query_symptoms_container(selector)
			.into_iter()
			.filter_map(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
			.collect()
	}
}

impl SymptomFormView for DomView {
	type Row = DomRow;

	fn set_symptom_list(&self, html: String) {
		if let Some(container) = &self.symptoms_container {
			container.set_inner_html(&html);
		}
	}

	fn symptom_rows(&self) -> Vec<DomRow> {
		self.query_symptoms_container(".symptom-item")
			.into_iter()
			.filter_map(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
			.map(DomRow)
			.collect()
	}

	fn checked_symptoms(&self) -> Vec<Symptom> {
		self.checkboxes(r#"input[type="checkbox"]:checked"#)
			.into_iter()
			.map(|checkbox| Symptom::new(checkbox.value()))
			.collect()
	}

	fn uncheck_all_symptoms(&self) {
		for checkbox in self.checkboxes(r#"input[type="checkbox"]"#) {
			checkbox.set_checked(false);
		}
	}

	fn alert(&self, message: &str) {
		self.window.alert_with_message(message).unwrap();
	}

	fn set_result_panel(&self, html: String) {
		if let Some(result_section) = &self.result_section {
			result_section.set_inner_html(&html);
		}
	}

	fn set_result_panel_hidden(&self, hidden: bool) {
		if let Some(result_section) = &self.result_section {
			result_section
				.class_list()
				.toggle_with_force("hidden", hidden)
				.unwrap();
		}
	}
}

/// A `.symptom-item` element.
struct DomRow(web_sys::HtmlElement);

impl SymptomRowView for DomRow {
	fn label(&self) -> String {
		self.0
			.query_selector("label")
			.ok()
			.flatten()
			.and_then(|label| label.text_content())
			.unwrap_or_default()
	}

	fn set_visible(&self, visible: bool) {
		let display = if visible { "flex" } else { "none" };
		self.0.style().set_property("display", display).unwrap();
	}
}

/// Calls the prediction service through the origin that served the page.
struct FetchPredictionService {
	client: reqwest::Client,
	origin: String,
}

impl FetchPredictionService {
	fn new(origin: String) -> FetchPredictionService {
		FetchPredictionService {
			client: reqwest::Client::new(),
			origin,
		}
	}
}

impl PredictionService for FetchPredictionService {
	fn symptoms(&self) -> LocalBoxFuture<'_, Result<SymptomsResponse>> {
		async move {
			let url = format!("{}/symptoms", self.origin);
			let response = self.client.get(&url).send().await?;
			let response = response.json::<SymptomsResponse>().await?;
			Ok(response)
		}
		.boxed_local()
	}

	fn predict(&self, request: PredictRequest) -> LocalBoxFuture<'_, Result<PredictResponse>> {
		async move {
			let url = format!("{}/predict", self.origin);
			let response = self.client.post(&url).json(&request).send().await?;
			let response = response.json::<PredictResponse>().await?;
			Ok(response)
		}
		.boxed_local()
	}
}

/// Writes log records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
	fn init() {
		if log::set_logger(&LOGGER).is_ok() {
			log::set_max_level(log::LevelFilter::Info);
		}
	}
}

impl log::Log for ConsoleLogger {
	fn enabled(&self, metadata: &log::Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &log::Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let message = JsValue::from_str(&format!("{}", record.args()));
		match record.level() {
			log::Level::Error => console::error_1(&message),
			log::Level::Warn => console::warn_1(&message),
			_ => console::log_1(&message),
		}
	}

	fn flush(&self) {}
}
