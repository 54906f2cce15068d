use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{
    Button, ButtonVariant, Card, CardPadding, CardVariant, Input, InputStatus, Label,
    LabelVariant, Text, TextColorVariant, TextSize, TextTag, TextWeight,
};
use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;

/// Showcase of every primitive, mounted by the wasm entrypoint.
#[component]
pub fn App() -> impl IntoView {
    let clicks = RwSignal::new(0u32);
    let locked = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let email_missing = Memo::new(move |_| email.get().trim().is_empty());
    let email_id = use_random_id_for("email");
    let email_ref = NodeRef::<html::Input>::new();

    let count = Callback::new(move |_| clicks.update(|c| *c += 1));
    let toggle_lock = Callback::new(move |_| locked.update(|l| *l = !*l));
    let focus_email = Callback::new(move |_| {
        if let Some(input) = email_ref.get() {
            if let Err(err) = input.focus() {
                warn!("could not focus the email input: {err:?}");
            }
        }
    });
    let on_email = Callback::new(move |value: String| email.set(value));

    // Card children are move closures, so each card owns its own copy.
    let label_for = email_id.clone();
    let input_id = email_id.clone();
    let sr_label_for = email_id;

    view! {
        <main class="mx-auto flex max-w-xl flex-col gap-6 px-4 py-8">
            <Text tag=TextTag::H1 size=TextSize::Xl2 weight=TextWeight::Bold>
                "UI primitives"
            </Text>

            <Card
                title="Buttons".to_string()
                variant=CardVariant::Bordered
                footer=ViewFn::from(move || {
                    view! {
                        <Text size=TextSize::Sm color_variant=TextColorVariant::Muted>
                            {move || format!("Clicked {} times", clicks.get())}
                        </Text>
                    }
                })
            >
                // Each button is rebuilt when the lock flips so `disabled`
                // stays a plain per-render value.
                {move || {
                    let disabled = locked.get();
                    view! {
                        <div class="flex gap-2">
                            <Button on_click=count disabled=disabled>"Count"</Button>
                            <Button
                                variant=ButtonVariant::Secondary
                                on_click=count
                                disabled=disabled
                                test_id="secondary-button"
                            >
                                "Count too"
                            </Button>
                        </div>
                    }
                }}
                <Button variant=ButtonVariant::Tertiary on_click=toggle_lock class="mt-2">
                    {move || if locked.get() { "Unlock" } else { "Lock" }}
                </Button>
            </Card>

            <Card title="Form".to_string() variant=CardVariant::Elevated padding=CardPadding::Lg>
                <Label html_for=label_for.clone() variant=LabelVariant::Required>
                    "Email"
                </Label>
                {
                    let input_id = input_id.clone();
                    move || {
                        let empty = email_missing.get();
                        view! {
                            <Input
                                id=input_id.clone()
                                r#type="email"
                                placeholder="you@example.com".to_string()
                                value=email.get_untracked()
                                required=true
                                status=if empty { InputStatus::Error } else { InputStatus::Default }
                                error_message="Email is required".to_string()
                                on_change=on_email
                                node_ref=email_ref
                            />
                        }
                    }
                }
                <Button variant=ButtonVariant::Secondary on_click=focus_email class="mt-2">
                    "Focus email"
                </Button>
            </Card>

            <Card variant=CardVariant::Default padding=CardPadding::Sm no_divider=true>
                <Text truncate=true color_variant=TextColorVariant::Success>
                    "Cards without a title or footer render only their content region."
                </Text>
                <Label html_for=sr_label_for.clone() sr_only=true>"Email (screen readers)"</Label>
            </Card>
        </main>
    }
}
