use crate::symptom::Symptom;
use std::collections::BTreeMap;
use std::iter::FromIterator;

/// The checked symptoms, each mapped to the presence marker `1`. Unchecked symptoms are absent rather than mapped to `0`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct SelectionSet(BTreeMap<Symptom, Present>);

#[derive(Clone, Copy, Debug, PartialEq)]
struct Present;

impl serde::Serialize for Present {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_u8(1)
	}
}

impl SelectionSet {
	pub fn new() -> SelectionSet {
		SelectionSet::default()
	}

	pub fn insert(&mut self, symptom: Symptom) {
		self.0.insert(symptom, Present);
	}

	pub fn contains(&self, symptom: &Symptom) -> bool {
		self.0.contains_key(symptom)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
		self.0.keys()
	}
}

impl FromIterator<Symptom> for SelectionSet {
	fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> SelectionSet {
		let mut selection = SelectionSet::new();
		for symptom in iter {
			selection.insert(symptom);
		}
		selection
	}
}

/// The body of `POST /predict`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PredictRequest {
	pub symptoms: SelectionSet,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_predict_request_json() {
		let symptoms: SelectionSet = vec![Symptom::new("high_fever"), Symptom::new("cough")]
			.into_iter()
			.collect();
		let request = PredictRequest { symptoms };
		assert_eq!(
			serde_json::to_string(&request).unwrap(),
			r#"{"symptoms":{"cough":1,"high_fever":1}}"#
		);
	}

	#[test]
	fn test_duplicates_collapse() {
		let selection: SelectionSet = vec![Symptom::new("cough"), Symptom::new("cough")]
			.into_iter()
			.collect();
		assert_eq!(selection.len(), 1);
		assert!(selection.contains(&Symptom::new("cough")));
		assert!(!selection.contains(&Symptom::new("high_fever")));
	}

	#[test]
	fn test_empty_selection() {
		let selection = SelectionSet::new();
		assert!(selection.is_empty());
		assert_eq!(serde_json::to_string(&selection).unwrap(), "{}");
	}
}
