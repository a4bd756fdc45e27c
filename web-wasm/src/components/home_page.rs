//! Landing page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Automating E-Waste Segregation using AI"</h1>
            <p>
                "Our system uses advanced AI to identify and categorize e-waste \
                 components, helping to streamline the recycling process and \
                 reduce environmental impact."
            </p>
            <div class="cta">
                <A href="/upload">"Start Now"</A>
            </div>
        </div>
    }
}
