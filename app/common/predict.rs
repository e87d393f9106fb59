use crate::symptom::Symptom;
use anyhow::{anyhow, Result};
use html::{component, html};
use medipredict_ui as ui;

pub const PREDICTION_FAILED_MESSAGE: &str = "Could not complete the prediction. Please try again.";

/// The body of a `POST /predict` response. The service answers either with an `error` or with the prediction fields, so every field is optional on the wire.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PredictResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub prediction: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub confidence: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub related_symptoms: Option<Vec<RelatedSymptom>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RelatedSymptom {
	pub symptom: Symptom,
	pub count: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
	pub prediction: String,
	/// In `[0, 1]`.
	pub confidence: f64,
	pub related_symptoms: Vec<RelatedSymptom>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PredictionOutcome {
	/// The service reported an error. The message is shown as is.
	Error(String),
	Result(PredictionResult),
}

impl PredictResponse {
	/// A non-empty `error` wins over every other field. A response that has neither an error nor both `prediction` and `confidence` is malformed.
	pub fn into_outcome(self) -> Result<PredictionOutcome> {
		if let Some(error) = self.error.filter(|error| !error.is_empty()) {
			return Ok(PredictionOutcome::Error(error));
		}
		let prediction = self
			.prediction
			.ok_or_else(|| anyhow!("the prediction response has no prediction"))?;
		let confidence = self
			.confidence
			.ok_or_else(|| anyhow!("the prediction response has no confidence"))?;
		Ok(PredictionOutcome::Result(PredictionResult {
			prediction,
			confidence,
			related_symptoms: self.related_symptoms.unwrap_or_default(),
		}))
	}
}

pub fn render_analyzing_card() -> String {
	html! { <AnalyzingCard /> }.render_to_string()
}

pub fn render_error_card(message: String) -> String {
	html! { <ErrorCard message={message} /> }.render_to_string()
}

pub fn render_prediction_result_card(result: PredictionResult) -> String {
	html! { <PredictionResultCard result={result} /> }.render_to_string()
}

pub fn render_prediction_outcome(outcome: PredictionOutcome) -> String {
	match outcome {
		PredictionOutcome::Error(message) => render_error_card(message),
		PredictionOutcome::Result(result) => render_prediction_result_card(result),
	}
}

#[component]
pub fn AnalyzingCard() {
	html! {
		<ui::Card class={Some("result-card".to_owned())} id={None}>
			<h3>{"Analyzing symptoms..."}</h3>
			<p>{"Please wait..."}</p>
			<div class="loader"></div>
		</ui::Card>
	}
}

#[component]
pub fn ErrorCard(message: String) {
	html! {
		<ui::Card class={Some("result-card".to_owned())} id={None}>
			<h3>{"Error"}</h3>
			<p>{message}</p>
		</ui::Card>
	}
}

#[component]
pub fn PredictionResultCard(result: PredictionResult) {
	let related_symptoms = if result.related_symptoms.is_empty() {
		vec![html! { <li>{"No related symptoms found"}</li> }]
	} else {
		result
			.related_symptoms
			.iter()
			.map(|related_symptom| {
				let text = format!(
					"{} ({})",
					related_symptom.symptom.label(),
					related_symptom.count
				);
				html! { <li>{text}</li> }
			})
			.collect()
	};
	html! {
		<ui::Card class={Some("result-card".to_owned())} id={None}>
			<h3>{"Prediction Result"}</h3>
			<p>{"Based on your symptoms, you may have:"}</p>
			<h2 id="disease-name">{result.prediction}</h2>
			<p>
				{"Confidence: "}
				<span class="confidence" id="confidence-value">
					{ui::format_percent(result.confidence)}
				</span>
			</p>
			<div class="related-symptoms">
				<h4>{"Related Symptoms:"}</h4>
				<ul id="related-symptoms-list">
					{related_symptoms}
				</ul>
			</div>
			<p>
				<em>
					{"Note: This is not a medical diagnosis. Please consult with a healthcare professional."}
				</em>
			</p>
		</ui::Card>
	}
}
