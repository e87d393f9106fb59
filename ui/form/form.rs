use html::{component, html};

#[component]
pub fn Form(
	action: Option<String>,
	autocomplete: Option<String>,
	id: Option<String>,
	post: Option<bool>,
) {
	html! {
		<form
			action={action}
			autocomplete={autocomplete}
			class="form"
			id={id}
			method={
				post.and_then(|post| if post {
					Some("post".to_owned())
				} else {
					None
				})
			}
		>
			{children}
		</form>
	}
}
