use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lollipop::{IconName, LeadSubmission, OrderInquiry, PageState};

use super::{Icon, Toaster};

#[component]
pub fn Hero(
    state: RwSignal<PageState>,
    toaster: Toaster,
    brand: String,
    lead: String,
    image: String,
    notice: String,
) -> impl IntoView {
    let backdrop = format!(
        "background-image: linear-gradient(rgba(45, 49, 66, 0.75), rgba(45, 49, 66, 0.75)), url('{image}');"
    );

    view! {
        <section class="hero">
            <div class="hero-backdrop" style=backdrop></div>
            <div class="container hero-inner">
                <div class="hero-content fade-in">
                    <h1 class="hero-title">{brand}</h1>
                    <p class="hero-lead">{lead}</p>

                    <button
                        type="button"
                        class="btn btn-primary btn-pill btn-lg"
                        aria-expanded=move || state.with(|s| s.order_form.is_open()).to_string()
                        on:click=move |_| state.update(|s| s.toggle_order_form())
                    >
                        "Рассчитать заказ"
                        <Icon name=IconName::Calculator size=24 class="icon-after" />
                    </button>

                    <Show when=move || state.with(|s| s.order_form.is_open())>
                        <OrderInquiryForm state=state toaster=toaster notice=notice.clone() />
                    </Show>
                </div>
            </div>
        </section>
    }
}

/// Hero lead form. Its field signals belong to this component, so closing
/// the form throws the typed values away.
#[component]
fn OrderInquiryForm(state: RwSignal<PageState>, toaster: Toaster, notice: String) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (volume, set_volume) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let lead = LeadSubmission::Order(OrderInquiry {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            volume: volume.get_untracked(),
        });
        state.update(|s| {
            if let Err(err) = s.submit_lead(lead, &notice, toaster) {
                log::warn!("{err}");
            }
        });
    };

    view! {
        <div class="card card-popover scale-in">
            <div class="card-header">
                <h3 class="card-title">"Расчёт заказа"</h3>
                <p class="card-description">"Заполните форму и получите коммерческое предложение"</p>
            </div>
            <div class="card-content">
                <form class="form" on:submit=on_submit>
                    <div class="field">
                        <label for="name">"Имя"</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Иван Петров"
                            required
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=move || name.get()
                        />
                    </div>
                    <div class="field">
                        <label for="phone">"Телефон"</label>
                        <input
                            id="phone"
                            type="tel"
                            placeholder="+7 (900) 123-45-67"
                            required
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                            prop:value=move || phone.get()
                        />
                    </div>
                    <div class="field">
                        <label for="volume">"Объём заказа"</label>
                        <input
                            id="volume"
                            type="text"
                            placeholder="1000 шт или 50 кг"
                            required
                            on:input=move |ev| set_volume.set(event_target_value(&ev))
                            prop:value=move || volume.get()
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">
                        "Отправить заявку"
                    </button>
                </form>
            </div>
        </div>
    }
}
