use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lollipop::{ConsultationRequest, DesignPreference, IconName, LeadSubmission, PageState};

use super::{Icon, Toaster};

/// Closing call-to-action with the always-visible consultation form.
#[component]
pub fn ClosingForm(state: RwSignal<PageState>, toaster: Toaster, notice: String) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (region, set_region) = signal(String::new());
    let (design, set_design) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let lead = LeadSubmission::Consultation(ConsultationRequest {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            region: region.get_untracked(),
            design: DesignPreference::from_optional_key(&design.get_untracked()),
        });

        let mut accepted = false;
        state.update(|s| match s.submit_lead(lead, &notice, toaster) {
            Ok(()) => accepted = true,
            Err(err) => log::warn!("{err}"),
        });
        if accepted {
            for setter in [set_name, set_phone, set_email, set_region, set_design] {
                setter.set(String::new());
            }
        }
    };

    view! {
        <section id="order" class="section section-cta">
            <div class="container container-narrow">
                <div class="cta-heading">
                    <h2 class="section-title section-title-light">"Готовы сделать заказ сейчас?"</h2>
                    <p class="cta-lead">
                        "Оставьте заявку, и мы свяжемся с вами в течение 30 минут для уточнения деталей"
                    </p>
                </div>

                <div class="card">
                    <div class="card-content">
                        <form class="form" on:submit=on_submit>
                            <div class="form-row">
                                <div class="field">
                                    <label for="final-name">"Имя"</label>
                                    <input
                                        id="final-name"
                                        type="text"
                                        placeholder="Иван Петров"
                                        required
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                        prop:value=move || name.get()
                                    />
                                </div>
                                <div class="field">
                                    <label for="final-phone">"Телефон"</label>
                                    <input
                                        id="final-phone"
                                        type="tel"
                                        placeholder="+7 (900) 123-45-67"
                                        required
                                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                                        prop:value=move || phone.get()
                                    />
                                </div>
                            </div>
                            <div class="field">
                                <label for="final-email">"Электронная почта"</label>
                                <input
                                    id="final-email"
                                    type="email"
                                    placeholder="example@mail.ru"
                                    required
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=move || email.get()
                                />
                            </div>
                            <div class="field">
                                <label for="final-region">"Регион"</label>
                                <input
                                    id="final-region"
                                    type="text"
                                    placeholder="Москва"
                                    required
                                    on:input=move |ev| set_region.set(event_target_value(&ev))
                                    prop:value=move || region.get()
                                />
                            </div>
                            <div class="field">
                                <label for="final-design">"Нужна помощь с дизайном упаковки?"</label>
                                <select
                                    id="final-design"
                                    on:change=move |ev| set_design.set(event_target_value(&ev))
                                    prop:value=move || design.get()
                                >
                                    <option value="" disabled>"Выберите вариант"</option>
                                    {DesignPreference::ALL
                                        .into_iter()
                                        .map(|pref| view! { <option value=pref.key()>{pref.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <button type="submit" class="btn btn-secondary btn-block btn-lg">
                                "Получить бесплатный макет дизайна"
                                <Icon name=IconName::Gift size=20 class="icon-after" />
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
