use html::{component, html};

/// A bordered panel. `class` is appended to the base `card` class.
#[component]
pub fn Card(class: Option<String>, id: Option<String>) {
	let class = match class {
		Some(class) => format!("card {}", class),
		None => "card".to_owned(),
	};
	html! {
		<div class={class} id={id}>
			{children}
		</div>
	}
}
