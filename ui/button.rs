use html::{component, html};

#[derive(Clone)]
pub enum ButtonType {
	Submit,
	Button,
}

#[component]
pub fn Button(
	button_type: ButtonType,
	class: Option<String>,
	disabled: Option<bool>,
	id: Option<String>,
) {
	let button_type = match button_type {
		ButtonType::Submit => "submit",
		ButtonType::Button => "button",
	};
	let class = match class {
		Some(class) => format!("button {}", class),
		None => "button".to_owned(),
	};
	html! {
		<button
			class={class}
			disabled={disabled}
			id={id}
			type={button_type}
		>
			{children}
		</button>
	}
}
