//! Header component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="brand">
                <A href="/">"♻ E-Waste AI"</A>
            </div>
            <nav>
                <ul>
                    <li><A href="/">"Home"</A></li>
                    <li><A href="/upload">"Upload"</A></li>
                    <li><A href="/statistics">"Statistics"</A></li>
                </ul>
            </nav>
        </header>
    }
}
