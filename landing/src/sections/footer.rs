use leptos::prelude::*;
use lollipop::{Carrier, IconName, SiteConfig};

use super::Icon;

#[component]
pub fn Footer(site: SiteConfig) -> impl IntoView {
    let contacts = site.contacts;
    let tel_href = format!("tel:{}", contacts.phone.replace([' ', '(', ')', '-'], ""));
    let mail_href = format!("mailto:{}", contacts.email);

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-title">{site.short_brand}</h3>
                        <p class="footer-text">{site.tagline}</p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Контакты"</h4>
                        <div class="footer-list">
                            <p class="footer-contact">
                                <Icon name=IconName::Phone size=18 />
                                <a href=tel_href>{contacts.phone}</a>
                            </p>
                            <p class="footer-contact">
                                <Icon name=IconName::Mail size=18 />
                                <a href=mail_href>{contacts.email}</a>
                            </p>
                            <p class="footer-contact">
                                <Icon name=IconName::MapPin size=18 />
                                {contacts.address}
                            </p>
                        </div>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Партнёры доставки"</h4>
                        <div class="footer-list">
                            {Carrier::ALL
                                .into_iter()
                                .map(|carrier| view! { <p>"• " {carrier.name()}</p> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <p class="footer-copyright">{site.copyright}</p>
            </div>
        </footer>
    }
}
