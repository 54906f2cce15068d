use leptos::logging::warn;
use leptos::prelude::*;

use crate::element::{AttributeBag, DescribedElement, Node};
use crate::error::{UiError, UiResult};
use crate::style::{compose, style_axis, ComposedClass, Conditional, StyleAxis};

const BASE: &str = "text-sm font-medium";
const SR_ONLY: &str = "sr-only";

macro_rules! required_suffix {
    () => {
        r#"after:content-["*"] after:ml-0.5 after:text-red-500"#
    };
}

/// Asterisk drawn after the label text. Purely visual: the paired control
/// still has to set its own `required` attribute.
pub const REQUIRED_SUFFIX: &str = required_suffix!();

style_axis! {
    pub enum LabelVariant("variant") {
        #[default]
        Default => "text-gray-700",
        Error => "text-red-500",
        Required => concat!("text-gray-700 ", required_suffix!()),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStyle {
    pub variant: LabelVariant,
    pub sr_only: bool,
}

impl LabelStyle {
    pub fn compose(&self, extra: &str) -> ComposedClass {
        compose(
            BASE,
            &[self.variant.token()],
            &[Conditional::when(self.sr_only, SR_ONLY)],
            extra,
        )
    }
}

/// Pure label description. Always carries `for`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    html_for: String,
    pub style: LabelStyle,
    pub class_name: String,
    pub attributes: AttributeBag,
    pub children: Vec<Node>,
}

impl LabelView {
    pub fn new(html_for: impl Into<String>, child: impl Into<Node>) -> UiResult<Self> {
        let html_for = html_for.into();
        if html_for.trim().is_empty() {
            return Err(UiError::missing_association("Label", "html_for"));
        }
        Ok(Self {
            html_for,
            style: LabelStyle::default(),
            class_name: String::new(),
            attributes: AttributeBag::new(),
            children: vec![child.into()],
        })
    }

    pub fn html_for(&self) -> &str {
        &self.html_for
    }

    pub fn variant(mut self, variant: LabelVariant) -> Self {
        self.style.variant = variant;
        self
    }

    pub fn sr_only(mut self, sr_only: bool) -> Self {
        self.style.sr_only = sr_only;
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

    pub fn describe(&self) -> DescribedElement {
        DescribedElement::new("label")
            .with_class(self.style.compose(&self.class_name))
            .passthrough(&self.attributes)
            .attr("for", self.html_for.clone())
            .children(self.children.iter().cloned())
    }
}

#[component]
pub fn Label(
    #[prop(into)] html_for: String,
    #[prop(optional)] variant: LabelVariant,
    #[prop(optional)] sr_only: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    if html_for.trim().is_empty() {
        warn!("<Label> rendered without `html_for`; it labels nothing");
    }

    let class = LabelStyle { variant, sr_only }.compose(&class).into_string();

    view! {
        <label data-name="Label" class=class r#for=html_for>
            {children()}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiErrorKind;

    #[test]
    fn test_default_label() {
        let el = LabelView::new("email", "Email Address")
            .expect("target")
            .describe();
        assert_eq!(
            el.to_string(),
            r#"<label class="text-sm font-medium text-gray-700" for="email">Email Address</label>"#
        );
    }

    #[test]
    fn test_required_variant_adds_suffix_tokens() {
        let class = LabelView::new("password", "Password")
            .expect("target")
            .variant(LabelVariant::Required)
            .describe()
            .class;
        assert!(class.contains(r#"after:content-["*"]"#));
        assert!(class.contains("after:text-red-500"));
        assert!(class.contains(REQUIRED_SUFFIX));
    }

    #[test]
    fn test_required_token_is_default_color_plus_suffix() {
        assert_eq!(
            LabelVariant::Required.token(),
            format!("{} {REQUIRED_SUFFIX}", LabelVariant::Default.token())
        );
    }

    #[test]
    fn test_required_variant_does_not_mark_anything_required() {
        let el = LabelView::new("password", "Password")
            .expect("target")
            .variant(LabelVariant::Required)
            .describe();
        assert!(!el.has_attribute("required"));
        assert!(!el.has_attribute("aria-required"));
    }

    #[test]
    fn test_sr_only_is_independent_of_variant() {
        for variant in [LabelVariant::Default, LabelVariant::Error, LabelVariant::Required] {
            let class = LabelStyle {
                variant,
                sr_only: true,
            }
            .compose("");
            assert!(class.has_class("sr-only"), "{variant}");
            assert!(class.starts_with("text-sm font-medium"));
        }
        assert!(!LabelStyle::default().compose("").has_class("sr-only"));
    }

    #[test]
    fn test_error_variant_and_extra_class() {
        let el = LabelView::new("terms", "Accept Terms and Conditions")
            .expect("target")
            .variant(LabelVariant::Error)
            .sr_only(true)
            .class_name("block")
            .describe();
        assert_eq!(el.class, "text-sm font-medium text-red-500 sr-only block");
    }

    #[test]
    fn test_for_attribute_cannot_be_overridden() {
        let bag = AttributeBag::new().with("id", "lbl").expect("allowed");
        let el = LabelView::new("email", "Email")
            .expect("target")
            .attributes(bag)
            .describe();
        assert_eq!(el.attribute("for"), Some("email"));
        assert_eq!(el.attribute("id"), Some("lbl"));
    }

    #[test]
    fn test_blank_target_is_rejected() {
        let err = LabelView::new("", "Orphan").unwrap_err();
        assert_eq!(err.kind, UiErrorKind::MissingAssociation);
    }
}
