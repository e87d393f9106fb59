use super::FieldLabel;
use html::{component, html};

/// A checkbox followed by a label pointing at it by id. The label is a sibling of the input, not its parent, so the label text can be read on its own.
#[component]
pub fn CheckboxField(
	checked: Option<bool>,
	id: String,
	label: String,
	name: Option<String>,
	value: Option<String>,
) {
	html! {
		<>
			<input
				checked={checked}
				class="form-checkbox-field"
				id={id.clone()}
				name={name}
				type="checkbox"
				value={value}
			/>
			<FieldLabel html_for={Some(id)}>
				{label}
			</FieldLabel>
		</>
	}
}
