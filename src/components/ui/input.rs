use std::rc::Rc;

use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::element::{AttributeBag, DescribedElement};
use crate::error::{UiError, UiResult};
use crate::style::{compose, style_axis, ComposedClass, Conditional, StyleAxis};

const BASE: &str = "block w-full rounded-md border px-3 py-2 text-sm shadow-sm placeholder-gray-400 focus:outline-none focus:ring-2";
const DISABLED: &str = "bg-gray-100 text-gray-500 cursor-not-allowed";
const ENABLED: &str = "bg-white";
const WRAPPER_CLASS: &str = "w-full";
const ERROR_MESSAGE_CLASS: &str = "mt-1 text-sm text-red-500";

/// Attributes the `<input>` sets itself; pass-through entries never replace them.
pub const OWNED_INPUT_ATTRIBUTES: &[&str] = &[
    "id",
    "type",
    "placeholder",
    "value",
    "disabled",
    "required",
    "aria-invalid",
    "aria-describedby",
];

style_axis! {
    pub enum InputStatus("status") {
        #[default]
        Default => "border-gray-300 focus:border-blue-500 focus:ring-blue-500",
        Error => "border-red-500 focus:border-red-500 focus:ring-red-500",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputStyle {
    pub status: InputStatus,
    pub disabled: bool,
}

impl InputStyle {
    pub fn compose(&self, extra: &str) -> ComposedClass {
        compose(
            BASE,
            &[self.status.token()],
            &[Conditional::either(self.disabled, DISABLED, ENABLED)],
            extra,
        )
    }
}

/// Id of the message region describing an input's error.
pub fn error_region_id(id: &str) -> String {
    format!("{id}-error")
}

/// Accessibility attributes for one render, derived from status alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAccessibility {
    pub invalid: bool,
    pub described_by: Option<String>,
    pub error_region: Option<ErrorRegion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRegion {
    pub id: String,
    pub message: String,
}

impl InputAccessibility {
    /// `aria-describedby` is only set when the message region is rendered, so
    /// an error without a message leaves no dangling reference.
    pub fn derive(id: &str, status: InputStatus, error_message: Option<&str>) -> Self {
        let error_region = match (status, error_message) {
            (InputStatus::Error, Some(message)) if !message.is_empty() => Some(ErrorRegion {
                id: error_region_id(id),
                message: message.to_string(),
            }),
            _ => None,
        };

        Self {
            invalid: status == InputStatus::Error,
            described_by: error_region.as_ref().map(|region| region.id.clone()),
            error_region,
        }
    }

    pub fn aria_invalid(&self) -> &'static str {
        if self.invalid {
            "true"
        } else {
            "false"
        }
    }
}

/// Pure input description. The id is required and must not be blank.
#[derive(Clone)]
pub struct InputView {
    id: String,
    pub input_type: String,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub style: InputStyle,
    pub required: bool,
    pub error_message: Option<String>,
    pub class_name: String,
    pub attributes: AttributeBag,
    pub on_change: Option<Rc<dyn Fn(&str)>>,
}

impl InputView {
    pub fn new(id: impl Into<String>) -> UiResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UiError::missing_association("Input", "id"));
        }
        Ok(Self {
            id,
            input_type: "text".to_string(),
            placeholder: None,
            value: None,
            default_value: None,
            style: InputStyle::default(),
            required: false,
            error_message: None,
            class_name: String::new(),
            attributes: AttributeBag::new(),
            on_change: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn status(mut self, status: InputStatus) -> Self {
        self.style.status = status;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.style.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = class.into();
        self
    }

    pub fn attributes(mut self, attributes: AttributeBag) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn on_change(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    /// Simulates a change event carrying `value`.
    pub fn change(&self, value: &str) {
        if let Some(on_change) = self.on_change.as_ref() {
            on_change(value);
        }
    }

    pub fn accessibility(&self) -> InputAccessibility {
        InputAccessibility::derive(&self.id, self.style.status, self.error_message.as_deref())
    }

    /// Class string of the `<input>` itself.
    pub fn input_class(&self) -> ComposedClass {
        self.style.compose(&self.class_name)
    }

    pub fn describe(&self) -> DescribedElement {
        let a11y = self.accessibility();
        let initial_value = self.value.clone().or_else(|| self.default_value.clone());

        let input = DescribedElement::new("input")
            .with_class(self.input_class())
            .passthrough(&self.attributes)
            .attr("id", self.id.clone())
            .attr("type", self.input_type.clone())
            .attr_opt("placeholder", self.placeholder.clone())
            .attr_opt("value", initial_value)
            .flag("disabled", self.style.disabled)
            .flag("required", self.required)
            .attr("aria-invalid", a11y.aria_invalid())
            .attr_opt("aria-describedby", a11y.described_by.clone());

        let wrapper = DescribedElement::new("div")
            .with_class(WRAPPER_CLASS)
            .child(input);

        match a11y.error_region {
            Some(region) => wrapper.child(
                DescribedElement::new("p")
                    .with_class(ERROR_MESSAGE_CLASS)
                    .attr("id", region.id)
                    .attr("role", "alert")
                    .child(region.message),
            ),
            None => wrapper,
        }
    }
}

#[component]
pub fn Input(
    #[prop(into)] id: String,

    // Common HTML attributes
    #[prop(into, default = "text".to_string())] r#type: String,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] value: Option<String>,
    #[prop(into, optional)] default_value: Option<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,

    // State
    #[prop(optional)] status: InputStatus,
    #[prop(into, optional)] error_message: Option<String>,

    // Styling
    #[prop(into, optional)] class: String,

    #[prop(optional)] on_change: Option<Callback<String>>,

    // Forwarded onto the <input>, not the wrapper
    #[prop(optional)] attributes: AttributeBag,

    // Ref for direct DOM access
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    if id.trim().is_empty() {
        warn!("<Input> rendered without an id; label and error associations will not resolve");
    }

    let style = InputStyle { status, disabled };
    let merged_class = style.compose(&class).into_string();
    let InputAccessibility {
        invalid,
        described_by,
        error_region,
    } = InputAccessibility::derive(&id, status, error_message.as_deref());
    let aria_invalid = if invalid { "true" } else { "false" };
    let initial_value = value.or(default_value);

    // `attr:` lands on the wrapper, so the bag is applied to the control once
    // it mounts.
    if !attributes.is_empty() {
        Effect::new(move |_| {
            let Some(input) = node_ref.get() else {
                return;
            };
            for (name, value) in attributes.iter_excluding(OWNED_INPUT_ATTRIBUTES) {
                if let Err(err) = input.set_attribute(name, value) {
                    warn!("could not forward {name:?} to <Input>: {err:?}");
                }
            }
        });
    }

    let on_input = move |ev: web_sys::Event| {
        if let Some(on_change) = on_change {
            on_change.run(event_target_value(&ev));
        }
    };

    view! {
        <div class=WRAPPER_CLASS>
            <input
                data-name="Input"
                id=id
                node_ref=node_ref
                type=r#type
                placeholder=placeholder
                value=initial_value
                disabled=disabled
                required=required
                aria-invalid=aria_invalid
                aria-describedby=described_by
                class=merged_class
                on:input=on_input
            />
            {error_region.map(|region| {
                view! {
                    <p id=region.id class=ERROR_MESSAGE_CLASS role="alert">
                        {region.message}
                    </p>
                }
            })}
        </div>
    }
}
