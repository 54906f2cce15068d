use leptos::prelude::*;

use crate::element::{AttributeBag, DescribedElement, Node};
use crate::style::{compose, style_axis, ComposedClass, StyleAxis};

const BASE: &str = "rounded-lg overflow-hidden";
const TITLE_WEIGHT: &str = "font-medium";
const DIVIDER_CLASS: &str = "border-t border-gray-200";

style_axis! {
    pub enum CardVariant("variant") {
        #[default]
        Default => "bg-white",
        Bordered => "bg-white border border-gray-200",
        Elevated => "bg-white shadow-md",
    }
}

style_axis! {
    /// Padding of the content region.
    pub enum CardPadding("padding") {
        None => "p-0",
        Sm => "p-3",
        #[default]
        Md => "p-4",
        Lg => "p-6",
    }
}

impl CardPadding {
    /// Title/footer padding: the content's horizontal padding with a fixed
    /// vertical rhythm. Unpadded cards still keep `px-4` on these regions.
    pub fn edge_token(self) -> &'static str {
        match self {
            Self::None => "px-4 py-3",
            Self::Sm => "py-3 px-3",
            Self::Md => "py-3 px-4",
            Self::Lg => "py-3 px-6",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardStyle {
    pub variant: CardVariant,
    pub padding: CardPadding,
    pub no_divider: bool,
}

impl CardStyle {
    pub fn container_class(&self, extra: &str) -> ComposedClass {
        compose(BASE, &[self.variant.token()], &[], extra)
    }

    pub fn content_class(&self) -> ComposedClass {
        compose("", &[self.padding.token()], &[], "")
    }

    pub fn title_class(&self) -> ComposedClass {
        compose("", &[self.padding.edge_token()], &[], TITLE_WEIGHT)
    }

    pub fn footer_class(&self) -> ComposedClass {
        compose("", &[self.padding.edge_token()], &[], "")
    }

    /// Whether a divider follows the title and precedes the footer.
    pub fn dividers(&self, has_title: bool, has_footer: bool) -> (bool, bool) {
        (
            has_title && !self.no_divider,
            has_footer && !self.no_divider,
        )
    }
}

/// Pure card description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardView {
    pub style: CardStyle,
    pub class_name: String,
    pub title: Option<String>,
    pub footer: Option<Vec<Node>>,
    pub attributes: AttributeBag,
    pub children: Vec<Node>,
}

impl CardView {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            children: vec![child.into()],
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.style.variant = variant;
        self
    }

    pub fn padding(mut self, padding: CardPadding) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn no_divider(mut self, no_divider: bool) -> Self {
        self.style.no_divider = no_divider;
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = class.into();
        self
    }

    /// An empty title renders no title region.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn footer(mut self, footer: impl Into<Node>) -> Self {
        self.footer.get_or_insert_with(Vec::new).push(footer.into());
        self
    }

    pub fn attributes(mut self, attributes: AttributeBag) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn describe(&self) -> DescribedElement {
        let style = &self.style;
        let (title_divider, footer_divider) =
            style.dividers(self.title.is_some(), self.footer.is_some());
        let divider = || Node::from(DescribedElement::new("div").with_class(DIVIDER_CLASS));

        let mut regions = Vec::new();
        if let Some(title) = &self.title {
            regions.push(Node::from(
                DescribedElement::new("div")
                    .with_class(style.title_class())
                    .child(title.as_str()),
            ));
        }
        if title_divider {
            regions.push(divider());
        }
        regions.push(Node::from(
            DescribedElement::new("div")
                .with_class(style.content_class())
                .children(self.children.iter().cloned()),
        ));
        if footer_divider {
            regions.push(divider());
        }
        if let Some(footer) = &self.footer {
            regions.push(Node::from(
                DescribedElement::new("div")
                    .with_class(style.footer_class())
                    .children(footer.iter().cloned()),
            ));
        }

        DescribedElement::new("div")
            .with_class(style.container_class(&self.class_name))
            .passthrough(&self.attributes)
            .children(regions)
    }
}

#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] no_divider: bool,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] title: Option<String>,
    #[prop(into, optional)] footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let style = CardStyle {
        variant,
        padding,
        no_divider,
    };
    let title = title.filter(|t| !t.is_empty());
    let (title_divider, footer_divider) = style.dividers(title.is_some(), footer.is_some());

    let container_class = style.container_class(&class).into_string();
    let content_class = style.content_class().into_string();
    let title_class = style.title_class().into_string();
    let footer_class = style.footer_class().into_string();

    view! {
        <div data-name="Card" class=container_class>
            {title.map(|title| view! { <div class=title_class>{title}</div> })}
            {title_divider.then(|| view! { <div class=DIVIDER_CLASS /> })}
            <div class=content_class>{children()}</div>
            {footer_divider.then(|| view! { <div class=DIVIDER_CLASS /> })}
            {footer.map(|footer| view! { <div class=footer_class>{footer.run()}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider_count(el: &DescribedElement) -> usize {
        el.find_all(|e| e.class == DIVIDER_CLASS).len()
    }

    #[test]
    fn test_basic_card_defaults() {
        let el = CardView::new("Basic card content").describe();
        assert_eq!(el.class, "rounded-lg overflow-hidden bg-white");
        assert_eq!(el.children.len(), 1);
        assert_eq!(
            el.to_string(),
            r#"<div class="rounded-lg overflow-hidden bg-white"><div class="p-4">Basic card content</div></div>"#
        );
    }

    #[test]
    fn test_title_and_footer_get_two_dividers() {
        let el = CardView::new("Body")
            .title("Card Title")
            .footer("Action")
            .describe();
        assert_eq!(divider_count(&el), 2);
        let classes: Vec<&str> = el.child_elements().map(|c| c.class.as_str()).collect();
        assert_eq!(
            classes,
            vec![
                "py-3 px-4 font-medium",
                DIVIDER_CLASS,
                "p-4",
                DIVIDER_CLASS,
                "py-3 px-4",
            ]
        );
    }

    #[test]
    fn test_no_divider_suppresses_all_dividers() {
        let el = CardView::new("Body")
            .title("Card Title")
            .footer("Action")
            .no_divider(true)
            .describe();
        assert_eq!(divider_count(&el), 0);
        assert_eq!(el.children.len(), 3);
    }

    #[test]
    fn test_divider_count_follows_present_regions() {
        let style = CardStyle::default();
        assert_eq!(style.dividers(false, false), (false, false));
        assert_eq!(style.dividers(true, false), (true, false));
        assert_eq!(style.dividers(false, true), (false, true));
        assert_eq!(divider_count(&CardView::new("x").footer("f").describe()), 1);
    }

    #[test]
    fn test_padding_none_uses_fixed_edge_padding() {
        let el = CardView::new("Body")
            .padding(CardPadding::None)
            .title("T")
            .describe();
        let classes: Vec<&str> = el.child_elements().map(|c| c.class.as_str()).collect();
        assert_eq!(classes, vec!["px-4 py-3 font-medium", DIVIDER_CLASS, "p-0"]);
    }

    #[test]
    fn test_padding_scales_content_and_edges() {
        let style = CardStyle {
            padding: CardPadding::Lg,
            ..CardStyle::default()
        };
        assert_eq!(style.content_class().as_str(), "p-6");
        assert_eq!(style.footer_class().as_str(), "py-3 px-6");
        assert_eq!(CardPadding::Sm.edge_token(), "py-3 px-3");
    }

    #[test]
    fn test_variant_and_custom_class() {
        let el = CardView::new("Body")
            .variant(CardVariant::Elevated)
            .class_name("custom-card")
            .describe();
        assert_eq!(el.class, "rounded-lg overflow-hidden bg-white shadow-md custom-card");
    }

    #[test]
    fn test_passthrough_lands_on_container() {
        let bag = AttributeBag::new()
            .with("data-testid", "profile-card")
            .expect("allowed");
        let el = CardView::new("Body").attributes(bag).describe();
        assert_eq!(el.attribute("data-testid"), Some("profile-card"));
        assert!(el.child_elements().all(|c| !c.has_attribute("data-testid")));
    }

    #[test]
    fn test_empty_title_renders_nothing() {
        let el = CardView::new("Body").title("").describe();
        assert_eq!(el.children.len(), 1);
        assert_eq!(divider_count(&el), 0);
    }
}
