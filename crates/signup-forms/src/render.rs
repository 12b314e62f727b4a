//! HTML rendering of the signup form.

use ironhtml::html;
use ironhtml_elements::{Button, Div};

use crate::form::{signup_fields, FormFieldDef};
use crate::state::FormState;
use crate::widgets::WidgetAttrs;

/// Submit label while idle.
pub const SUBMIT_LABEL: &str = "Sign Up";

/// Submit label while a request is in flight.
pub const SUBMIT_LABEL_LOADING: &str = "Signing Up...";

/// Renders one field: label, input and its inline error.
pub fn render_field(field: &FormFieldDef, value: &str, error: Option<&str>) -> String {
    let id = field.field.name().to_string();

    let required_marker = if field.required { " *" } else { "" };
    let label_text = format!("{}{}", field.label, required_marker);

    let mut attrs = WidgetAttrs::new().with("id", &id);
    if error.is_some() {
        attrs.set("class", "is-invalid");
    }
    if field.required {
        attrs.set("required", "required");
    }

    let value = (!value.is_empty()).then_some(value);
    let widget_html = field.widget.render(&id, value, &attrs);

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    html! { div.class("form-group") }
        .raw(label_el.render())
        .raw(&widget_html)
        .when(error.is_some(), |d| {
            d.child::<Div, _>(|e| e.class("error-text").text(error.unwrap_or("")))
        })
        .render()
}

/// Renders the whole signup card from the current state.
///
/// The result banner appears only when there is a message; the submit
/// button is disabled while a request is in flight.
pub fn render_signup_form(state: &FormState, action: &str) -> String {
    let mut form = html! {
        form.action(#action).method("post").class("signup-form")
    };

    if let Some(message) = state.message() {
        let class = if message.success {
            "message success"
        } else {
            "message error"
        };
        form = form.child::<Div, _>(|d| {
            d.class(class)
                .attr("role", "alert")
                .text(message.text.as_str())
        });
    }

    for field in signup_fields() {
        let field_html = render_field(
            &field,
            state.fields().get(field.field),
            state.errors().get(field.field),
        );
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    let loading = state.is_loading();
    let label = if loading {
        SUBMIT_LABEL_LOADING
    } else {
        SUBMIT_LABEL
    };
    form = form.child::<Button, _>(|b| {
        b.attr("type", "submit")
            .class("submit-button")
            .when(loading, |b| b.attr("disabled", "disabled"))
            .text(label)
    });

    html! {
        div.class("signup-card") {
            h1.class("signup-title") { "Create Account" }
            p.class("signup-subtitle") { "Sign up to get started" }
        }
    }
    .raw(form.render())
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;

    fn field_def(field: Field) -> FormFieldDef {
        signup_fields()
            .into_iter()
            .find(|d| d.field == field)
            .unwrap()
    }

    #[test]
    fn test_render_field_no_errors() {
        let html = render_field(&field_def(Field::Email), "a@b.com", None);
        assert!(html.contains("form-label"));
        assert!(html.contains("Email *"));
        assert!(html.contains(r#"value="a@b.com""#));
        assert!(!html.contains("is-invalid"));
        assert!(!html.contains("error-text"));
    }

    #[test]
    fn test_render_field_with_error() {
        let html = render_field(&field_def(Field::Username), "", Some("Username is required"));
        assert!(html.contains("is-invalid"));
        assert!(html.contains("Username is required"));
    }

    #[test]
    fn test_optional_field_has_no_marker() {
        let html = render_field(&field_def(Field::FirstName), "", None);
        assert!(html.contains("First Name"));
        assert!(!html.contains("First Name *"));
        assert!(!html.contains("required"));
    }

    #[test]
    fn test_render_idle_form() {
        let state = FormState::new();
        let html = render_signup_form(&state, "/api/signup/");
        assert!(html.contains("Create Account"));
        assert!(html.contains(SUBMIT_LABEL));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("role=\"alert\""));
        for field in Field::ALL {
            assert!(html.contains(&format!(r#"name="{}""#, field.name())));
        }
    }

    #[test]
    fn test_render_loading_form() {
        let mut state = FormState::new();
        state.on_field_change(Field::Username, "alice");
        state.on_field_change(Field::Email, "alice@example.com");
        state.on_field_change(Field::Password, "wonderland");
        state.on_field_change(Field::ConfirmPassword, "wonderland");
        state.begin_submit().unwrap();

        let html = render_signup_form(&state, "/api/signup/");
        assert!(html.contains(SUBMIT_LABEL_LOADING));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_render_banner_and_errors() {
        let mut state = FormState::new();
        let _ = state.begin_submit();
        let html = render_signup_form(&state, "/api/signup/");
        assert!(html.contains("Email is required"));

        state.on_field_change(Field::Username, "alice");
        state.on_field_change(Field::Email, "alice@example.com");
        state.on_field_change(Field::Password, "wonderland");
        state.on_field_change(Field::ConfirmPassword, "wonderland");
        state.begin_submit().unwrap();
        state.fail("Username taken");

        let html = render_signup_form(&state, "/api/signup/");
        assert!(html.contains("message error"));
        assert!(html.contains("Username taken"));
    }
}
