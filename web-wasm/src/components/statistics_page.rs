//! Statistics dashboard
//!
//! Self-contained page with no relationship to the upload flow. The fetch
//! never leaves the page without data: the API client substitutes the fixed
//! illustrative numbers on any failure, so a chart is always shown.

use crate::api::statistics::fetch_statistics;
use ewaste_ai_common::{material_bar_chart_svg, recyclability_pie_chart_svg, StatisticsData};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let (stats, set_stats) = signal(None::<StatisticsData>);

    spawn_local(async move {
        let data = fetch_statistics().await;
        set_stats.set(Some(data));
    });

    view! {
        <div class="statistics-page">
            <h2>"E-Waste Statistics Dashboard"</h2>
            <Show
                when=move || stats.get().is_some()
                fallback=|| view! { <p class="text-muted">"Loading statistics..."</p> }
            >
                <div class="chart-grid">
                    <section class="card">
                        <h3>"Material Distribution"</h3>
                        <div
                            class="chart"
                            inner_html=move || {
                                stats
                                    .get()
                                    .map(|s| material_bar_chart_svg(&s.material_distribution))
                                    .unwrap_or_default()
                            }
                        />
                    </section>
                    <section class="card">
                        <h3>"Recyclability"</h3>
                        <div
                            class="chart"
                            inner_html=move || {
                                stats
                                    .get()
                                    .map(|s| recyclability_pie_chart_svg(&s.recyclability))
                                    .unwrap_or_default()
                            }
                        />
                    </section>
                </div>
            </Show>
            <p class="caption">
                "These charts show the distribution of materials identified in \
                 processed e-waste items and their recyclability."
            </p>
        </div>
    }
}
