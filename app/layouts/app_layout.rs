use super::document::{Document, PageInfo};
use html::{component, html};
use medipredict_ui as ui;

#[component]
pub fn AppLayout(page_info: PageInfo) {
	html! {
		<Document page_info={page_info}>
			<div class="app-layout">
				<header class="app-layout-header">
					<ui::H1 center={Some(true)}>{"MediPredict"}</ui::H1>
					<ui::P>
						{"Select the symptoms you have and we will suggest the most likely condition."}
					</ui::P>
				</header>
				<main class="app-layout-main">{children}</main>
				<footer class="app-layout-footer">
					{"MediPredict is not a substitute for professional medical advice."}
				</footer>
			</div>
		</Document>
	}
}
