//! Snapshot tests for complete component files.
//!
//! These tests convert small documents end to end and compare the generated
//! Go source against known-good snapshots.

use vecty_codegen::{convert, generate_component, ComponentOptions};

fn component_snapshot(name: &str, source: &str, package: &str, component: &str) {
    let conversion = convert(source).expect("conversion failed");
    let file = generate_component(
        &conversion,
        &ComponentOptions {
            package: package.to_string(),
            component: component.to_string(),
        },
    );

    let output = format!("=== Source ===\n{}\n\n=== Go Output ===\n{}", source, file);
    insta::assert_snapshot!(name, output);
}

/// Long class lists, void elements and a single event binding.
#[test]
fn test_snapshot_sample_document() {
    component_snapshot(
        "sample",
        r#"<body>
  <input class="boo1 boo2 boo3 boo4 boo5" disabled>
  Hello
  <br class="hoge">
  World!
  <button @click="Click">Click</button>
</body>"#,
        "main",
        "Sample",
    );
}

/// Several handlers, one bound twice, plus properties of every kind.
#[test]
fn test_snapshot_form_with_events() {
    component_snapshot(
        "signup_form",
        r#"<!DOCTYPE html>
<!-- signup form -->
<form id="signup" @submit="Submit">
  <label for="email">Email</label>
  <input type="email" id="email" name="email" placeholder="you@example.com" @input="EmailChanged">
  <select name="plan" @change="PlanChanged">
    <option value="free" checked>Free</option>
    <option value="pro">Pro &amp; Co</option>
  </select>
  <a href="/terms" data-track="terms">Terms</a>
  <button type="submit" autofocus @click="Submit">Sign up</button>
</form>"#,
        "views",
        "SignupForm",
    );
}

#[test]
fn test_snapshot_raw_code_and_custom_elements() {
    component_snapshot(
        "raw_code",
        r#"<div class="counter">
  <span>Count</span>
  <x-badge tone="info"/>
  <script type="application/x-go">
func (c *Counter) Label() string {
	return "count"
}
</script>
</div>"#,
        "widgets",
        "Counter",
    );
}
