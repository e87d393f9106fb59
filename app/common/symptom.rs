use html::{component, html};
use medipredict_ui as ui;

/// A symptom identifier from the prediction service's vocabulary, such as `high_fever`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Symptom(String);

impl Symptom {
	pub fn new(identifier: impl Into<String>) -> Symptom {
		Symptom(identifier.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The text shown to the user, with underscores replaced by spaces.
	pub fn label(&self) -> String {
		self.0.replace('_', " ")
	}

	/// The id of the checkbox for this symptom.
	pub fn element_id(&self) -> String {
		format!("symptom-{}", self.0)
	}
}

impl From<&str> for Symptom {
	fn from(value: &str) -> Symptom {
		Symptom::new(value)
	}
}

impl From<String> for Symptom {
	fn from(value: String) -> Symptom {
		Symptom::new(value)
	}
}

impl std::fmt::Display for Symptom {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// The body of `GET /symptoms`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct SymptomsResponse {
	#[serde(default)]
	pub symptoms: Option<Vec<Symptom>>,
}

pub fn render_symptom_list(symptoms: &[Symptom]) -> String {
	html! {
		<SymptomList symptoms={symptoms.to_owned()} />
	}
	.render_to_string()
}

#[component]
pub fn SymptomList(symptoms: Vec<Symptom>) {
	let rows = symptoms
		.into_iter()
		.map(|symptom| html! { <SymptomRow symptom={symptom} /> })
		.collect::<Vec<_>>();
	html! {
		<>{rows}</>
	}
}

#[component]
pub fn SymptomRow(symptom: Symptom) {
	html! {
		<div class="symptom-item">
			<ui::CheckboxField
				checked={None}
				id={symptom.element_id()}
				label={symptom.label()}
				name={Some(symptom.element_id())}
				value={Some(symptom.as_str().to_owned())}
			/>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_label() {
		assert_eq!(Symptom::new("high_fever").label(), "high fever");
		assert_eq!(
			Symptom::new("pain_behind_the_eyes").label(),
			"pain behind the eyes"
		);
		assert_eq!(Symptom::new("cough").label(), "cough");
	}

	#[test]
	fn test_element_id() {
		assert_eq!(Symptom::new("high_fever").element_id(), "symptom-high_fever");
	}

	#[test]
	fn test_symptoms_response() {
		let response: SymptomsResponse =
			serde_json::from_str(r#"{"symptoms":["high_fever","cough"]}"#).unwrap();
		assert_eq!(
			response.symptoms,
			Some(vec![Symptom::new("high_fever"), Symptom::new("cough")])
		);
		let response: SymptomsResponse =
			serde_json::from_str(r#"{"error":"no symptoms"}"#).unwrap();
		assert_eq!(response.symptoms, None);
	}

	#[test]
	fn test_render_symptom_list() {
		let html = render_symptom_list(&[Symptom::new("high_fever")]);
		insta::assert_snapshot!(html, @r###"<div class="symptom-item"><input class="form-checkbox-field" id="symptom-high_fever" name="symptom-high_fever" type="checkbox" value="high_fever" /><label class="field-label" for="symptom-high_fever">high fever</label></div>"###);
	}

	#[test]
	fn test_render_symptom_list_escapes_identifiers() {
		let html = render_symptom_list(&[Symptom::new(r#"x"><script>"#)]);
		assert!(!html.contains("<script>"));
		assert!(html.contains(r#"value="x&quot;&gt;&lt;script&gt;""#));
	}
}
