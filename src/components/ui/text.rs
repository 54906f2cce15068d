use leptos::prelude::*;

use crate::element::{AttributeBag, DescribedElement, Node};
use crate::style::{compose, style_axis, ComposedClass, Conditional, StyleAxis};

const TRUNCATE: &str = "truncate";

/// Elements `Text` can render as.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::VariantNames,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TextTag {
    #[default]
    P,
    Span,
    Div,
    Label,
    Strong,
    Em,
    Small,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl TextTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::Span => "span",
            Self::Div => "div",
            Self::Label => "label",
            Self::Strong => "strong",
            Self::Em => "em",
            Self::Small => "small",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

style_axis! {
    pub enum TextSize("size") {
        Xs => "text-xs",
        Sm => "text-sm",
        #[default]
        Base => "text-base",
        Lg => "text-lg",
        Xl => "text-xl",
        #[strum(serialize = "2xl")]
        #[serde(rename = "2xl")]
        Xl2 => "text-2xl",
    }
}

style_axis! {
    pub enum TextWeight("weight") {
        #[default]
        Normal => "font-normal",
        Medium => "font-medium",
        Semibold => "font-semibold",
        Bold => "font-bold",
    }
}

style_axis! {
    /// Semantic color of the text. Unrelated to the structural variants of
    /// `ButtonVariant`/`CardVariant`.
    pub enum TextColorVariant("color_variant") {
        #[default]
        Default => "text-gray-900",
        Muted => "text-gray-500",
        Error => "text-red-600",
        Success => "text-green-600",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub size: TextSize,
    pub weight: TextWeight,
    pub color_variant: TextColorVariant,
    pub truncate: bool,
}

impl TextStyle {
    pub fn compose(&self, extra: &str) -> ComposedClass {
        compose(
            "",
            &[
                self.size.token(),
                self.weight.token(),
                self.color_variant.token(),
            ],
            &[Conditional::when(self.truncate, TRUNCATE)],
            extra,
        )
    }
}

/// Pure text description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextView {
    pub tag: TextTag,
    pub style: TextStyle,
    pub class_name: String,
    pub attributes: AttributeBag,
    pub children: Vec<Node>,
}

impl TextView {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            children: vec![child.into()],
            ..Self::default()
        }
    }

    pub fn tag(mut self, tag: TextTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn size(mut self, size: TextSize) -> Self {
        self.style.size = size;
        self
    }

    pub fn weight(mut self, weight: TextWeight) -> Self {
        self.style.weight = weight;
        self
    }

    pub fn color_variant(mut self, color_variant: TextColorVariant) -> Self {
        self.style.color_variant = color_variant;
        self
    }

    pub fn truncate(mut self, truncate: bool) -> Self {
        self.style.truncate = truncate;
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
        DescribedElement::new(self.tag.as_str())
            .with_class(self.style.compose(&self.class_name))
            .passthrough(&self.attributes)
            .children(self.children.iter().cloned())
    }
}

#[component]
pub fn Text(
    #[prop(optional)] tag: TextTag,
    #[prop(optional)] size: TextSize,
    #[prop(optional)] weight: TextWeight,
    #[prop(optional)] color_variant: TextColorVariant,
    #[prop(optional)] truncate: bool,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = TextStyle {
        size,
        weight,
        color_variant,
        truncate,
    }
    .compose(&class)
    .into_string();

    match tag {
        TextTag::P => view! { <p class=class>{children()}</p> }.into_any(),
        TextTag::Span => view! { <span class=class>{children()}</span> }.into_any(),
        TextTag::Div => view! { <div class=class>{children()}</div> }.into_any(),
        TextTag::Label => view! { <label class=class>{children()}</label> }.into_any(),
        TextTag::Strong => view! { <strong class=class>{children()}</strong> }.into_any(),
        TextTag::Em => view! { <em class=class>{children()}</em> }.into_any(),
        TextTag::Small => view! { <small class=class>{children()}</small> }.into_any(),
        TextTag::H1 => view! { <h1 class=class>{children()}</h1> }.into_any(),
        TextTag::H2 => view! { <h2 class=class>{children()}</h2> }.into_any(),
        TextTag::H3 => view! { <h3 class=class>{children()}</h3> }.into_any(),
        TextTag::H4 => view! { <h4 class=class>{children()}</h4> }.into_any(),
        TextTag::H5 => view! { <h5 class=class>{children()}</h5> }.into_any(),
        TextTag::H6 => view! { <h6 class=class>{children()}</h6> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_render_paragraph() {
        let el = TextView::new("Default paragraph text").describe();
        assert_eq!(el.tag, "p");
        assert_eq!(el.class, "text-base font-normal text-gray-900");
    }

    #[test]
    fn test_tag_is_independent_of_style_axes() {
        let styles = [
            TextStyle::default(),
            TextStyle {
                size: TextSize::Xl2,
                weight: TextWeight::Bold,
                color_variant: TextColorVariant::Muted,
                truncate: true,
            },
            TextStyle {
                size: TextSize::Xs,
                weight: TextWeight::Semibold,
                color_variant: TextColorVariant::Success,
                truncate: false,
            },
        ];
        for style in styles {
            let heading = TextView {
                tag: TextTag::H1,
                style,
                ..TextView::new("Heading")
            };
            let paragraph = TextView {
                tag: TextTag::P,
                ..heading.clone()
            };
            assert_eq!(heading.describe().tag, "h1");
            assert_eq!(paragraph.describe().tag, "p");
            assert_eq!(heading.describe().class, paragraph.describe().class);
        }
    }

    #[test]
    fn test_heading_with_size_and_weight() {
        let el = TextView::new("Heading")
            .tag(TextTag::H1)
            .size(TextSize::Xl2)
            .weight(TextWeight::Bold)
            .describe();
        assert_eq!(
            el.to_string(),
            r#"<h1 class="text-2xl font-bold text-gray-900">Heading</h1>"#
        );
    }

    #[test]
    fn test_color_variants() {
        let muted = TextView::new("Small muted text")
            .color_variant(TextColorVariant::Muted)
            .size(TextSize::Sm)
            .describe();
        assert_eq!(muted.class, "text-sm font-normal text-gray-500");
        let error = TextStyle {
            color_variant: TextColorVariant::Error,
            ..TextStyle::default()
        };
        assert!(error.compose("").has_class("text-red-600"));
    }

    #[test]
    fn test_truncate_precedes_extra_class() {
        let el = TextView::new("This is a very long text")
            .truncate(true)
            .class_name("max-w-xs")
            .describe();
        assert!(el.class.ends_with("truncate max-w-xs"));
    }

    #[test]
    fn test_tag_and_size_keys_parse() {
        assert_eq!("h1".parse::<TextTag>().ok(), Some(TextTag::H1));
        assert!("section".parse::<TextTag>().is_err());
        assert_eq!(TextSize::resolve(Some("2xl")), Ok(TextSize::Xl2));
        assert_eq!(TextSize::resolve(None), Ok(TextSize::Base));
        assert_eq!(TextTag::default().as_str(), "p");
    }
}
