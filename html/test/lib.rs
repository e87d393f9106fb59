use html::{component, html};

#[component]
fn Greeting(name: String) {
	html! {
		<div class="greeting" data-name={name.clone()}>{"Hello "}{name}</div>
	}
}

#[component]
fn Card() {
	html! {
		<section class="card">{children}</section>
	}
}

#[test]
fn test_component() {
	let html = html!(<Greeting name={"World".to_owned()} />).render_to_string();
	assert_eq!(
		html,
		r#"<div class="greeting" data-name="World">Hello World</div>"#
	);
}

#[test]
fn test_component_children() {
	let html = html! {
		<Card>
			<p>{"inside"}</p>
		</Card>
	}
	.render_to_string();
	assert_eq!(html, r#"<section class="card"><p>inside</p></section>"#);
}

#[test]
fn test_interpolated_strings_are_escaped() {
	let html = html!(<Greeting name={"<img src=x>".to_owned()} />).render_to_string();
	assert_eq!(
		html,
		r#"<div class="greeting" data-name="&lt;img src=x&gt;">Hello &lt;img src=x&gt;</div>"#
	);
}

#[test]
fn test_optional_children() {
	let items = vec!["a", "b"];
	let html = html! {
		<ul>
			{items.into_iter().map(|item| html! { <li>{item}</li> }).collect::<Vec<_>>()}
			{None::<String>}
		</ul>
	}
	.render_to_string();
	assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
}
