use super::FieldLabel;
use html::{component, html};

#[component]
pub fn TextField(
	autocomplete: Option<String>,
	disabled: Option<bool>,
	id: Option<String>,
	input_type: Option<String>,
	label: Option<String>,
	name: Option<String>,
	placeholder: Option<String>,
	value: Option<String>,
) {
	let input_type = input_type.unwrap_or_else(|| "text".to_owned());
	html! {
		<FieldLabel html_for={id.clone()}>
			{label}
			<input
				autocomplete={autocomplete}
				class="form-text-field"
				disabled={disabled}
				id={id}
				name={name}
				placeholder={placeholder}
				spellcheck={false}
				type={input_type}
				value={value}
			/>
		</FieldLabel>
	}
}
