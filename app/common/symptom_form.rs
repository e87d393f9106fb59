//! The symptom form controller. It owns handles to the page and to the prediction service, both passed in by the caller, and reacts to the form's events: page ready, search input, submit and clear.

use crate::{
	predict::{
		render_analyzing_card, render_error_card, render_prediction_outcome, PredictResponse,
		PredictionOutcome, PREDICTION_FAILED_MESSAGE,
	},
	selection::{PredictRequest, SelectionSet},
	symptom::{render_symptom_list, Symptom, SymptomsResponse},
};
use anyhow::Result;
use futures::future::LocalBoxFuture;

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one symptom";
pub const EMPTY_SELECTION_BEFORE_PREDICTING_MESSAGE: &str =
	"Please select at least one symptom before predicting.";

/// The parts of the page the controller reads and writes.
pub trait SymptomFormView {
	type Row: SymptomRowView;
	/// Replace the contents of the symptom container.
	fn set_symptom_list(&self, html: String);
	/// Every rendered symptom row, in document order.
	fn symptom_rows(&self) -> Vec<Self::Row>;
	/// The identifiers of the checked checkboxes in the symptom container.
	fn checked_symptoms(&self) -> Vec<Symptom>;
	fn uncheck_all_symptoms(&self);
	/// Show a blocking message to the user.
	fn alert(&self, message: &str);
	fn set_result_panel(&self, html: String);
	fn set_result_panel_hidden(&self, hidden: bool);
}

pub trait SymptomRowView {
	/// The visible label text.
	fn label(&self) -> String;
	fn set_visible(&self, visible: bool);
}

/// The two endpoints of the prediction service. Implementations return `Err` for transport failures and for bodies that are not valid JSON. The HTTP status is not inspected.
pub trait PredictionService {
	fn symptoms(&self) -> LocalBoxFuture<'_, Result<SymptomsResponse>>;
	fn predict(&self, request: PredictRequest) -> LocalBoxFuture<'_, Result<PredictResponse>>;
}

pub struct SymptomForm<V, S> {
	view: V,
	service: S,
}

impl<V, S> SymptomForm<V, S>
where
	V: SymptomFormView,
	S: PredictionService,
{
	pub fn new(view: V, service: S) -> SymptomForm<V, S> {
		SymptomForm { view, service }
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn service(&self) -> &S {
		&self.service
	}

	/// Fetch the symptom catalog and render one checkbox per symptom. Failures are logged and leave the container as it was.
	pub async fn load_symptoms(&self) {
		match self.service.symptoms().await {
			Ok(SymptomsResponse {
				symptoms: Some(symptoms),
			}) => {
				log::debug!("loaded {} symptoms", symptoms.len());
				self.view.set_symptom_list(render_symptom_list(&symptoms));
			}
			Ok(SymptomsResponse { symptoms: None }) => {
				log::warn!("the symptoms response did not contain a symptom list");
			}
			Err(error) => {
				log::error!("error loading symptoms: {}", error);
			}
		}
	}

	/// Show the rows whose label contains `search_text`, ignoring case, and hide the rest. Checked state is left alone.
	pub fn filter_symptoms(&self, search_text: &str) {
		let search_text = search_text.to_lowercase();
		for row in self.view.symptom_rows() {
			let visible = row.label().to_lowercase().contains(&search_text);
			row.set_visible(visible);
		}
	}

	pub fn selected_symptoms(&self) -> SelectionSet {
		self.view.checked_symptoms().into_iter().collect()
	}

	/// Handle a submit of the form.
	pub async fn submit(&self) {
		let symptoms = self.selected_symptoms();
		if symptoms.is_empty() {
			self.view.alert(EMPTY_SELECTION_MESSAGE);
			return;
		}
		self.make_prediction(symptoms).await;
	}

	/// Post `symptoms` to the prediction service and render the outcome into the result panel. The panel is shown for every outcome.
	pub async fn make_prediction(&self, symptoms: SelectionSet) {
		if symptoms.is_empty() {
			self.view.alert(EMPTY_SELECTION_BEFORE_PREDICTING_MESSAGE);
			return;
		}
		log::info!(
			"making prediction with symptoms: {}",
			symptoms
				.iter()
				.map(|symptom| symptom.as_str())
				.collect::<Vec<_>>()
				.join(", ")
		);
		self.view.set_result_panel(render_analyzing_card());
		self.view.set_result_panel_hidden(false);
		let html = match self.request_prediction(symptoms).await {
			Ok(outcome) => render_prediction_outcome(outcome),
			Err(error) => {
				log::error!("error making prediction: {}", error);
				render_error_card(PREDICTION_FAILED_MESSAGE.to_owned())
			}
		};
		self.view.set_result_panel(html);
		self.view.set_result_panel_hidden(false);
	}

	async fn request_prediction(&self, symptoms: SelectionSet) -> Result<PredictionOutcome> {
		let response = self.service.predict(PredictRequest { symptoms }).await?;
		response.into_outcome()
	}

	/// Uncheck every symptom and hide the result panel.
	pub fn clear(&self) {
		self.view.uncheck_all_symptoms();
		self.view.set_result_panel_hidden(true);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use anyhow::anyhow;
	use futures::{
		channel::oneshot,
		executor::{block_on, LocalPool},
		task::LocalSpawnExt,
		FutureExt,
	};
	use std::{
		cell::{Cell, RefCell},
		collections::VecDeque,
		rc::Rc,
	};

	struct FakeRow {
		symptom: Symptom,
		checked: Cell<bool>,
		visible: Cell<bool>,
	}

	impl SymptomRowView for Rc<FakeRow> {
		fn label(&self) -> String {
			self.symptom.label()
		}

		fn set_visible(&self, visible: bool) {
			self.visible.set(visible);
		}
	}

	#[derive(Default)]
	struct FakeView {
		symptom_list: RefCell<Option<String>>,
		rows: RefCell<Vec<Rc<FakeRow>>>,
		alerts: RefCell<Vec<String>>,
		result_panel: RefCell<Option<String>>,
		result_panel_hidden: Cell<bool>,
	}

	impl FakeView {
		fn with_rows(rows: &[(&str, bool)]) -> FakeView {
			let view = FakeView {
				result_panel_hidden: Cell::new(true),
				..Default::default()
			};
			*view.rows.borrow_mut() = rows
				.iter()
				.map(|(symptom, checked)| {
					Rc::new(FakeRow {
						symptom: Symptom::new(*symptom),
						checked: Cell::new(*checked),
						visible: Cell::new(true),
					})
				})
				.collect();
			view
		}

		fn visible_labels(&self) -> Vec<String> {
			self.rows
				.borrow()
				.iter()
				.filter(|row| row.visible.get())
				.map(|row| row.symptom.label())
				.collect()
		}

		fn result_panel(&self) -> String {
			self.result_panel.borrow().clone().unwrap_or_default()
		}
	}

	impl SymptomFormView for FakeView {
		type Row = Rc<FakeRow>;

		fn set_symptom_list(&self, html: String) {
			self.symptom_list.replace(Some(html));
		}

		fn symptom_rows(&self) -> Vec<Rc<FakeRow>> {
			self.rows.borrow().clone()
		}

		fn checked_symptoms(&self) -> Vec<Symptom> {
			self.rows
				.borrow()
				.iter()
				.filter(|row| row.checked.get())
				.map(|row| row.symptom.clone())
				.collect()
		}

		fn uncheck_all_symptoms(&self) {
			for row in self.rows.borrow().iter() {
				row.checked.set(false);
			}
		}

		fn alert(&self, message: &str) {
			self.alerts.borrow_mut().push(message.to_owned());
		}

		fn set_result_panel(&self, html: String) {
			self.result_panel.replace(Some(html));
		}

		fn set_result_panel_hidden(&self, hidden: bool) {
			self.result_panel_hidden.set(hidden);
		}
	}

	/// Answers with fixed bodies. `None` is a transport failure.
	struct FakeService {
		symptoms_body: Option<&'static str>,
		predict_body: Option<&'static str>,
		requests: RefCell<Vec<String>>,
	}

	impl FakeService {
		fn new(symptoms_body: Option<&'static str>, predict_body: Option<&'static str>) -> FakeService {
			FakeService {
				symptoms_body,
				predict_body,
				requests: RefCell::new(Vec::new()),
			}
		}
	}

	fn parse<T: serde::de::DeserializeOwned>(body: Option<&str>) -> Result<T> {
		let body = body.ok_or_else(|| anyhow!("network error"))?;
		Ok(serde_json::from_str(body)?)
	}

	impl PredictionService for FakeService {
		fn symptoms(&self) -> LocalBoxFuture<'_, Result<SymptomsResponse>> {
			futures::future::ready(parse(self.symptoms_body)).boxed_local()
		}

		fn predict(&self, request: PredictRequest) -> LocalBoxFuture<'_, Result<PredictResponse>> {
			self.requests
				.borrow_mut()
				.push(serde_json::to_string(&request).unwrap());
			futures::future::ready(parse(self.predict_body)).boxed_local()
		}
	}

	const FLU: &str =
		r#"{"prediction":"Flu","confidence":0.87,"related_symptoms":[{"symptom":"cough","count":3}]}"#;

	#[test]
	fn test_load_symptoms() {
		let form = SymptomForm::new(
			FakeView::default(),
			FakeService::new(Some(r#"{"symptoms":["high_fever","cough"]}"#), None),
		);
		block_on(form.load_symptoms());
		let html = form.view().symptom_list.borrow().clone().unwrap();
		assert_eq!(html.matches(r#"type="checkbox""#).count(), 2);
		assert_eq!(html.matches("<label").count(), 2);
		assert!(html.contains(r#"for="symptom-high_fever">high fever</label>"#));
		assert!(html.contains(r#"for="symptom-cough">cough</label>"#));
		assert!(html.find("high fever").unwrap() < html.find(">cough<").unwrap());
	}

	#[test]
	fn test_load_symptoms_failure_leaves_list_untouched() {
		let form = SymptomForm::new(FakeView::default(), FakeService::new(None, None));
		block_on(form.load_symptoms());
		assert!(form.view().symptom_list.borrow().is_none());
		let form = SymptomForm::new(
			FakeView::default(),
			FakeService::new(Some("<html>bad gateway</html>"), None),
		);
		block_on(form.load_symptoms());
		assert!(form.view().symptom_list.borrow().is_none());
		let form = SymptomForm::new(
			FakeView::default(),
			FakeService::new(Some(r#"{"error":"model not loaded"}"#), None),
		);
		block_on(form.load_symptoms());
		assert!(form.view().symptom_list.borrow().is_none());
		assert!(form.view().alerts.borrow().is_empty());
	}

	#[test]
	fn test_filter_symptoms() {
		let form = SymptomForm::new(
			FakeView::with_rows(&[("high_fever", false), ("cough", false)]),
			FakeService::new(None, None),
		);
		form.filter_symptoms("fev");
		assert_eq!(form.view().visible_labels(), vec!["high fever"]);
		form.filter_symptoms("");
		assert_eq!(form.view().visible_labels(), vec!["high fever", "cough"]);
		form.filter_symptoms("FEV");
		assert_eq!(form.view().visible_labels(), vec!["high fever"]);
		form.filter_symptoms("h f");
		assert_eq!(form.view().visible_labels(), vec!["high fever"]);
		form.filter_symptoms("xyz");
		assert!(form.view().visible_labels().is_empty());
	}

	#[test]
	fn test_filter_keeps_hidden_rows_selected() {
		let form = SymptomForm::new(
			FakeView::with_rows(&[("high_fever", false), ("cough", true)]),
			FakeService::new(None, None),
		);
		form.filter_symptoms("fever");
		assert_eq!(form.view().visible_labels(), vec!["high fever"]);
		let selection = form.selected_symptoms();
		assert_eq!(selection.len(), 1);
		assert!(selection.contains(&Symptom::new("cough")));
	}

	#[test]
	fn test_submit_without_selection() {
		let form = SymptomForm::new(
			FakeView::with_rows(&[("high_fever", false), ("cough", false)]),
			FakeService::new(None, Some(FLU)),
		);
		block_on(form.submit());
		assert_eq!(
			*form.view().alerts.borrow(),
			vec![EMPTY_SELECTION_MESSAGE.to_owned()]
		);
		assert!(form.service().requests.borrow().is_empty());
		assert!(form.view().result_panel.borrow().is_none());
		assert!(form.view().result_panel_hidden.get());
	}

	#[test]
	fn test_make_prediction_without_selection() {
		let form = SymptomForm::new(FakeView::with_rows(&[]), FakeService::new(None, Some(FLU)));
		block_on(form.make_prediction(SelectionSet::new()));
		assert_eq!(
			*form.view().alerts.borrow(),
			vec![EMPTY_SELECTION_BEFORE_PREDICTING_MESSAGE.to_owned()]
		);
		assert!(form.service().requests.borrow().is_empty());
		assert!(form.view().result_panel_hidden.get());
	}

	#[test]
	fn test_submit_renders_prediction() {
		let form = SymptomForm::new(
			FakeView::with_rows(&[("high_fever", true), ("cough", false)]),
			FakeService::new(None, Some(FLU)),
		);
		block_on(form.submit());
		assert_eq!(
			*form.service().requests.borrow(),
			vec![r#"{"symptoms":{"high_fever":1}}"#.to_owned()]
		);
		let html = form.view().result_panel();
		assert!(html.contains(">Flu</h2>"));
		assert!(html.contains("87.00%"));
		assert!(html.contains("<li>cough (3)</li>"));
		assert!(!form.view().result_panel_hidden.get());
		assert!(form.view().alerts.borrow().is_empty());
	}

	#[test]
	fn test_submit_renders_service_error() {
		let form = SymptomForm::new(
			FakeView::with_rows(&[("high_fever", true)]),
			FakeService::new(None, Some(r#"{"error":"unknown symptom"}"#)),
		);
		block_on(form.submit());
		let html = form.view().result_panel();
		insta::assert_snapshot!(html, @r###"<div class="card result-card"><h3>Error</h3><p>unknown symptom</p></div>"###);
		assert!(!html.contains("Confidence"));
		assert!(!form.view().result_panel_hidden.get());
	}

	#[test]
	fn test_submit_renders_generic_error_on_failure() {
		for predict_body in &[None, Some("internal server error"), Some(r#"{"status":"ok"}"#)] {
			let form = SymptomForm::new(
				FakeView::with_rows(&[("high_fever", true)]),
				FakeService::new(None, *predict_body),
			);
			block_on(form.submit());
			let html = form.view().result_panel();
			assert!(html.contains(PREDICTION_FAILED_MESSAGE));
			assert!(!form.view().result_panel_hidden.get());
			assert_eq!(form.service().requests.borrow().len(), 1);
		}
	}

	#[test]
	fn test_clear() {
		let form = SymptomForm::new(
			FakeView::with_rows(&[("high_fever", true), ("cough", true)]),
			FakeService::new(None, Some(FLU)),
		);
		block_on(form.submit());
		assert!(!form.view().result_panel_hidden.get());
		form.clear();
		assert!(form.view().checked_symptoms().is_empty());
		assert!(form.view().result_panel_hidden.get());
		form.clear();
		assert!(form.view().checked_symptoms().is_empty());
		assert!(form.view().result_panel_hidden.get());
	}

	/// Hands out one pending response per request, resolved by the test through the matching sender.
	struct ChannelService {
		receivers: RefCell<VecDeque<oneshot::Receiver<&'static str>>>,
	}

	impl PredictionService for ChannelService {
		fn symptoms(&self) -> LocalBoxFuture<'_, Result<SymptomsResponse>> {
			futures::future::ready(Err::<SymptomsResponse, _>(anyhow!("not used"))).boxed_local()
		}

		fn predict(&self, _request: PredictRequest) -> LocalBoxFuture<'_, Result<PredictResponse>> {
			let receiver = self.receivers.borrow_mut().pop_front().unwrap();
			async move {
				let body = receiver.await?;
				let response: PredictResponse = serde_json::from_str(body)?;
				Ok::<_, anyhow::Error>(response)
			}
			.boxed_local()
		}
	}

	#[test]
	fn test_last_response_wins() {
		let (first_sender, first_receiver) = oneshot::channel();
		let (second_sender, second_receiver) = oneshot::channel();
		let form = Rc::new(SymptomForm::new(
			FakeView::with_rows(&[("high_fever", true)]),
			ChannelService {
				receivers: RefCell::new(vec![first_receiver, second_receiver].into_iter().collect()),
			},
		));
		let mut pool = LocalPool::new();
		for _ in 0..2 {
			let form = form.clone();
			pool.spawner()
				.spawn_local(async move { form.submit().await })
				.unwrap();
		}
		pool.run_until_stalled();
		assert!(form.view().result_panel().contains("Analyzing symptoms..."));
		second_sender
			.send(r#"{"prediction":"Cold","confidence":0.5}"#)
			.unwrap();
		pool.run_until_stalled();
		assert!(form.view().result_panel().contains(">Cold</h2>"));
		first_sender
			.send(r#"{"prediction":"Flu","confidence":0.9}"#)
			.unwrap();
		pool.run_until_stalled();
		assert!(form.view().result_panel().contains(">Flu</h2>"));
	}
}
