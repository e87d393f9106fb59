use html::{component, html};
use medipredict_app_layouts::{app_layout::AppLayout, document::PageInfo};
use medipredict_ui as ui;

/// Render the symptom form. The symptom list and the result panel start empty and are filled in by the client.
pub fn render() -> String {
	let page_info = PageInfo {
		client_wasm_js_src: Some(medipredict_util::client!()),
	};
	let html = html! {
		<AppLayout page_info={page_info}>
			<SymptomFormPage />
		</AppLayout>
	};
	html.render_to_string()
}

#[component]
fn SymptomFormPage() {
	html! {
		<ui::S1>
			<ui::Card class={Some("symptoms-card".to_owned())} id={None}>
				<ui::Form
					action={None}
					autocomplete={Some("off".to_owned())}
					id={Some("predict-form".to_owned())}
					post={None}
				>
					<ui::TextField
						autocomplete={Some("off".to_owned())}
						disabled={None}
						id={Some("symptom-search".to_owned())}
						input_type={Some("search".to_owned())}
						label={Some("Search symptoms".to_owned())}
						name={None}
						placeholder={Some("Type to filter symptoms...".to_owned())}
						value={None}
					/>
					<div class="symptoms-container" id="symptoms-container"></div>
					<ui::SpaceBetween>
						<ui::Button
							button_type={ui::ButtonType::Button}
							class={Some("button-secondary".to_owned())}
							disabled={None}
							id={Some("clear-btn".to_owned())}
						>
							{"Clear All"}
						</ui::Button>
						<ui::Button
							button_type={ui::ButtonType::Submit}
							class={None}
							disabled={None}
							id={Some("predict-btn".to_owned())}
						>
							{"Predict"}
						</ui::Button>
					</ui::SpaceBetween>
				</ui::Form>
			</ui::Card>
			<div class="result-section hidden" id="result-section"></div>
		</ui::S1>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_render() {
		let html = render();
		assert!(html.contains(r#"<form autocomplete="off" class="form" id="predict-form">"#));
		assert!(html.contains(r#"<div class="symptoms-container" id="symptoms-container"></div>"#));
		assert!(html.contains(r#"id="symptom-search" placeholder="Type to filter symptoms..." type="search""#));
		assert!(html.contains(r#"<button class="button button-secondary" id="clear-btn" type="button">Clear All</button>"#));
		assert!(html.contains(r#"<button class="button" id="predict-btn" type="submit">Predict</button>"#));
		assert!(html.contains(r#"<div class="result-section hidden" id="result-section"></div>"#));
		assert!(html.contains(r#"<script type="module">import init from "/js/"#));
	}
}
