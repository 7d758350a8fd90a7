use leptos::prelude::*;
use lollipop::delivery::ORIGIN_LABEL;
use lollipop::{Carrier, DeliveryRegion, DeliverySpeed, DeliveryWeight, IconName, PageState};
use web_sys::Event;

use super::Icon;

#[component]
pub fn DeliveryCalculator(state: RwSignal<PageState>) -> impl IntoView {
    let quote = Memo::new(move |_| state.with(|s| s.quote()));
    let weight = move || state.with(|s| s.delivery.weight);

    let on_region = move |ev: Event| {
        let region = DeliveryRegion::from_key_or_other(&event_target_value(&ev));
        state.update(|s| s.set_region(region));
    };
    let on_speed = move |ev: Event| {
        let speed = DeliverySpeed::from_key_or_standard(&event_target_value(&ev));
        state.update(|s| s.set_speed(speed));
    };
    let on_weight = move |ev: Event| match DeliveryWeight::parse_input(&event_target_value(&ev)) {
        Ok(weight) => state.update(|s| s.set_weight(weight)),
        Err(err) => log::warn!("{err}"),
    };

    view! {
        <section id="delivery" class="section">
            <div class="container">
                <h2 class="section-title">"Калькулятор доставки"</h2>
                <p class="section-subtitle">"Рассчитайте стоимость и сроки доставки в ваш регион"</p>

                <div class="calculator card">
                    <div class="card-content calculator-body">
                        <div class="calculator-route">
                            <div class="field">
                                <label>"Откуда"</label>
                                <input type="text" value=ORIGIN_LABEL disabled class="input-muted" />
                            </div>
                            <div class="field">
                                <label for="delivery-region">"Куда"</label>
                                <select
                                    id="delivery-region"
                                    on:change=on_region
                                    prop:value=move || state.with(|s| s.delivery.region.key())
                                >
                                    {DeliveryRegion::ALL
                                        .into_iter()
                                        .map(|region| view! { <option value=region.key()>{region.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="field">
                            <label for="delivery-weight">
                                "Вес/объём: " {move || weight().kg()} " кг"
                            </label>
                            <input
                                id="delivery-weight"
                                type="range"
                                min=DeliveryWeight::MIN.to_string()
                                max=DeliveryWeight::MAX.to_string()
                                step=DeliveryWeight::STEP.to_string()
                                prop:value=move || weight().kg().to_string()
                                on:input=on_weight
                            />
                            <div class="range-scale muted">
                                <span>{format!("{} кг", DeliveryWeight::MIN)}</span>
                                <span>{format!("{} кг", DeliveryWeight::MAX)}</span>
                            </div>
                        </div>

                        <div class="field">
                            <label for="delivery-speed">"Срочность"</label>
                            <select
                                id="delivery-speed"
                                on:change=on_speed
                                prop:value=move || state.with(|s| s.delivery.speed.key())
                            >
                                {DeliverySpeed::ALL
                                    .into_iter()
                                    .map(|speed| view! { <option value=speed.key()>{speed.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="calculator-result">
                            <h3 class="result-title">"Результат расчёта:"</h3>
                            <div class="carrier-list">
                                {Carrier::ALL
                                    .into_iter()
                                    .enumerate()
                                    .map(|(idx, carrier)| view! {
                                        <CarrierRow
                                            carrier=carrier
                                            price={Signal::derive(move || quote.with(|q| q.carriers[idx].display_price()))}
                                        />
                                    })
                                    .collect_view()}
                            </div>

                            // PDF export is not implemented; the button is decorative
                            <button type="button" class="btn btn-secondary btn-block">
                                "Скачать расчет в PDF"
                                <Icon name=IconName::Download size=20 class="icon-after" />
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CarrierRow(carrier: Carrier, price: Signal<String>) -> impl IntoView {
    let row_class = if carrier.is_primary() { "carrier-row primary" } else { "carrier-row" };
    let price_class = if carrier.is_primary() { "carrier-price primary" } else { "carrier-price" };

    view! {
        <div class=row_class>
            <div class="carrier-info">
                <Icon name=carrier.icon() size=24 class="carrier-icon" />
                <div>
                    <p class="carrier-name">{carrier.name()}</p>
                    <p class="carrier-note muted">{carrier.note()}</p>
                </div>
            </div>
            <div class="carrier-quote">
                <p class=price_class>{move || price.get()}</p>
                <p class="carrier-transit muted">{carrier.transit()}</p>
            </div>
        </div>
    }
}
