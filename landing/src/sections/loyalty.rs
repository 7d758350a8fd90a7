use leptos::prelude::*;
use lollipop::IconName;
use lollipop::content::{FEATURED_BADGE, LOYALTY_TIERS, LoyaltyTier, PILOT_OFFER};

use super::Icon;

#[component]
pub fn Loyalty() -> impl IntoView {
    view! {
        <section id="loyalty" class="section section-muted">
            <div class="container">
                <h2 class="section-title">"Программа лояльности"</h2>
                <p class="section-subtitle">"Выгодные условия для постоянных клиентов"</p>

                <div class="tier-grid">
                    {LOYALTY_TIERS
                        .into_iter()
                        .enumerate()
                        .map(|(idx, tier)| view! { <TierCard tier=tier delay_ms={idx * 100} /> })
                        .collect_view()}
                </div>

                <PilotBanner />
            </div>
        </section>
    }
}

#[component]
fn TierCard(tier: LoyaltyTier, delay_ms: usize) -> impl IntoView {
    let class = if tier.featured {
        "card tier-card featured fade-in"
    } else {
        "card tier-card fade-in"
    };

    view! {
        <div class=class style=format!("animation-delay: {delay_ms}ms;")>
            <div class="card-header">
                {tier.featured.then(|| view! { <span class="badge">{FEATURED_BADGE}</span> })}
                <div class="tier-heading">
                    <div class="icon-bubble">
                        <Icon name=tier.icon size=32 class="text-primary" />
                    </div>
                    <div>
                        <h3 class="card-title">{tier.title}</h3>
                        <p class="card-description">{tier.volume}</p>
                    </div>
                </div>
            </div>
            <div class="card-content">
                <div class="tier-discount">
                    <Icon name=IconName::TrendingDown size=20 class="text-green" />
                    <span class="tier-discount-value">{tier.discount}</span>
                    <span class="muted">"скидка"</span>
                </div>
                <div class="tier-bonus">
                    <Icon name=IconName::Gift size=20 class="text-primary" />
                    <p>{tier.bonus}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PilotBanner() -> impl IntoView {
    let offer = PILOT_OFFER;

    view! {
        <div class="card pilot-card">
            <div class="card-header">
                <div class="tier-heading">
                    <Icon name=IconName::Zap size=40 class="text-primary" />
                    <div>
                        <h3 class="card-title">{offer.title}</h3>
                        <p class="card-description">{offer.subtitle}</p>
                    </div>
                </div>
            </div>
            <div class="card-content">
                <p class="pilot-text">
                    <strong class="text-primary">{offer.highlight}</strong>
                    {offer.rest}
                    <br />
                    <span class="muted">{offer.deadline}</span>
                </p>
                // No request flow behind this button yet
                <button type="button" class="btn btn-primary btn-lg">
                    {offer.button}
                    <Icon name=IconName::ArrowRight size=20 class="icon-after" />
                </button>
            </div>
        </div>
    }
}
