use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::element::{DescribedElement, Node};
use crate::style::{compose, style_axis, ComposedClass, Conditional, StyleAxis};

pub const DEFAULT_BUTTON_TEST_ID: &str = "button";

const BASE: &str = "px-4 py-2 rounded transition-colors focus:outline-none focus:ring-2";
const DISABLED: &str = "opacity-50 cursor-not-allowed";
const SECONDARY: &str = "bg-gray-200 text-gray-800 hover:bg-gray-300 focus:ring-gray-400";

style_axis! {
    /// Structural look of a button.
    ///
    /// `Tertiary` through `Senary` reserve their keys for future styling and
    /// currently share the secondary token.
    pub enum ButtonVariant("variant") {
        #[default]
        Primary => "bg-blue-500 text-white hover:bg-blue-600 focus:ring-blue-300",
        Secondary => SECONDARY,
        Tertiary => SECONDARY,
        Quaternary => SECONDARY,
        Quinary => SECONDARY,
        Senary => SECONDARY,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub disabled: bool,
}

impl ButtonStyle {
    pub fn compose(&self, extra: &str) -> ComposedClass {
        compose(
            BASE,
            &[self.variant.token()],
            &[Conditional::when(self.disabled, DISABLED)],
            extra,
        )
    }

    /// Activation is a no-op while disabled, whatever the DOM would do.
    pub fn allows_activation(&self) -> bool {
        !self.disabled
    }
}

/// Pure button description.
#[derive(Clone)]
pub struct ButtonView {
    pub style: ButtonStyle,
    pub class_name: String,
    pub test_id: String,
    pub on_click: Option<Rc<dyn Fn()>>,
    pub children: Vec<Node>,
}

impl ButtonView {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            style: ButtonStyle::default(),
            class_name: String::new(),
            test_id: DEFAULT_BUTTON_TEST_ID.to_string(),
            on_click: None,
            children: vec![child.into()],
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.style.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.style.disabled = disabled;
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = class.into();
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    /// Simulates one activation. Returns whether the callback ran.
    pub fn activate(&self) -> bool {
        match self.on_click.as_ref() {
            Some(on_click) if self.style.allows_activation() => {
                on_click();
                true
            }
            _ => false,
        }
    }

    pub fn describe(&self) -> DescribedElement {
        DescribedElement::new("button")
            .with_class(self.style.compose(&self.class_name))
            .attr("data-testid", self.test_id.clone())
            .flag("disabled", self.style.disabled)
            .children(self.children.iter().cloned())
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] disabled: bool,
    #[prop(into, optional)] class: String,
    #[prop(into, default = DEFAULT_BUTTON_TEST_ID.to_string())] test_id: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let style = ButtonStyle { variant, disabled };
    let class = style.compose(&class).into_string();

    view! {
        <button
            data-name="Button"
            data-testid=test_id
            class=class
            disabled=disabled
            on:click=move |ev: MouseEvent| {
                if !style.allows_activation() {
                    return;
                }
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_primary_is_default_variant() {
        let el = ButtonView::new("Primary").describe();
        assert_eq!(
            el.class,
            "px-4 py-2 rounded transition-colors focus:outline-none focus:ring-2 \
             bg-blue-500 text-white hover:bg-blue-600 focus:ring-blue-300"
        );
    }

    #[test]
    fn test_secondary_variant_token() {
        let el = ButtonView::new("Secondary")
            .variant(ButtonVariant::Secondary)
            .describe();
        assert!(el.class.contains("bg-gray-200"));
        assert!(!el.class.contains("bg-blue-500"));
    }

    #[test]
    fn test_reserved_variants_alias_secondary() {
        for key in ["tertiary", "quaternary", "quinary", "senary"] {
            let variant = ButtonVariant::resolve(Some(key)).expect("declared key");
            assert_eq!(variant.token(), ButtonVariant::Secondary.token(), "{key}");
            assert_ne!(variant, ButtonVariant::Secondary);
        }
        assert_eq!(ButtonVariant::domain().len(), 6);
    }

    #[test]
    fn test_disabled_sets_attribute_and_token() {
        let el = ButtonView::new("Disabled").disabled(true).describe();
        assert!(el.has_attribute("disabled"));
        assert!(el.class.ends_with("opacity-50 cursor-not-allowed"));
        assert_eq!(
            el.to_string(),
            "<button class=\"px-4 py-2 rounded transition-colors focus:outline-none focus:ring-2 \
             bg-blue-500 text-white hover:bg-blue-600 focus:ring-blue-300 opacity-50 cursor-not-allowed\" \
             data-testid=\"button\" disabled>Disabled</button>"
        );
    }

    #[test]
    fn test_click_runs_callback_when_enabled() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let view = ButtonView::new("Click me").on_click(move || counter.set(counter.get() + 1));
        assert!(view.activate());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_disabled_never_runs_callback() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let view = ButtonView::new("Click me")
            .disabled(true)
            .on_click(move || counter.set(counter.get() + 1));
        for _ in 0..5 {
            assert!(!view.activate());
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_custom_class_and_test_id() {
        let el = ButtonView::new("Custom Style")
            .class_name("my-custom-class")
            .test_id("save")
            .describe();
        assert!(el.class.ends_with(" my-custom-class"));
        assert_eq!(el.attribute("data-testid"), Some("save"));
    }
}
