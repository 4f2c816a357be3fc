use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="marketing">
            <section class="hero">
                <h1 class="hero__title">"About ARA Travels"</h1>
                <p class="hero__subtitle">
                    "We connect riders and businesses with local fleet operators. "
                    "Vendors bring cars and drivers, agents and companies book rides, "
                    "and the platform keeps pricing and payouts transparent."
                </p>
            </section>
            <section class="about">
                <h2>"How fares work"</h2>
                <p>
                    "Every vehicle category has a base fare plus per-kilometre and per-minute rates. "
                    "Each fare is split between the driver side and the platform commission, "
                    "and the two shares always add up to 100%."
                </p>
                <A href="/">"Back to home"</A>
            </section>
        </div>
    }
}
