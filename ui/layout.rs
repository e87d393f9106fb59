use html::{component, html};

#[component]
pub fn S1() {
	html! {
		<div class="s1">
			{children}
		</div>
	}
}

#[component]
pub fn SpaceBetween() {
	html! {
		<div class="space-between">{children}</div>
	}
}

#[component]
pub fn H1(center: Option<bool>) {
	html! {
		<h1 class={
			if center.unwrap_or(false) {
				"h1 center"
			} else {
				"h1"
		}}>
			{children}
		</h1>
	}
}

#[component]
pub fn P() {
	html! {
		<p class="p">{children}</p>
	}
}
