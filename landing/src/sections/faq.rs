use leptos::prelude::*;
use lollipop::content::FAQ;
use lollipop::{IconName, PageState};

use super::Icon;

/// Single-open, collapsible accordion over [`FAQ`].
#[component]
pub fn Faq(state: RwSignal<PageState>) -> impl IntoView {
    view! {
        <section id="faq" class="section section-muted">
            <div class="container container-narrow">
                <h3 class="section-title section-title-sm">"Часто задаваемые вопросы"</h3>
                <div class="accordion">
                    {FAQ
                        .into_iter()
                        .enumerate()
                        .map(|(idx, entry)| {
                            let is_open = move || state.with(|s| s.faq.is_open(idx));
                            view! {
                                <div class=move || if is_open() { "accordion-item open" } else { "accordion-item" }>
                                    <button
                                        type="button"
                                        class="accordion-trigger"
                                        aria-expanded=move || is_open().to_string()
                                        on:click=move |_| state.update(|s| s.faq.toggle(idx))
                                    >
                                        <span>{entry.question}</span>
                                        <Icon name=IconName::ChevronDown size=20 class="accordion-chevron" />
                                    </button>
                                    <Show when=is_open>
                                        <div class="accordion-content">{entry.answer}</div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
