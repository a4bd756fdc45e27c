//! Results page: pure rendering of the shared analysis result
//!
//! The rendering branch for the recommendation is chosen by the tagged
//! variant the normalizer decided on; nothing here re-inspects shapes.

use ewaste_ai_common::{
    format_confidence, AnalysisResult, Category, Recommendation, Recyclability,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let analysis =
        use_context::<RwSignal<Option<AnalysisResult>>>().expect("analysis result context");

    // No result survives a reload by design: bounce to the upload page
    // instead of rendering an empty state in place.
    let navigate = use_navigate();
    Effect::new(move |_| {
        if analysis.get_untracked().is_none() {
            navigate("/upload", Default::default());
        }
    });

    // The holder has an explicit lifetime: cleared on navigation away
    on_cleanup(move || analysis.set(None));

    view! {
        <div class="results-page">
            {move || analysis.get().map(|result| view! {
                <h2>"Analysis Results"</h2>
                <section class="card">
                    <h3>"Identified Components"</h3>
                    <CategoryList categories=result.categories.clone()/>
                </section>
                <section class="card">
                    <h3>"Recyclability"</h3>
                    <RecyclabilityBanner verdict=result.recyclable/>
                </section>
                <section class="card">
                    <h3>"Recommendation"</h3>
                    <RecommendationView recommendation=result.recommendation.clone()/>
                </section>
            })}
        </div>
    }
}

#[component]
fn CategoryList(categories: Vec<Category>) -> impl IntoView {
    if categories.is_empty() {
        return view! { <p class="text-muted">"No components identified."</p> }.into_any();
    }

    view! {
        <ul class="category-list">
            {categories
                .into_iter()
                .map(|category| view! {
                    <li>
                        <span>{category.name}</span>
                        {category.confidence.map(|c| view! {
                            <span class="confidence">
                                {format!("Confidence: {}", format_confidence(c))}
                            </span>
                        })}
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn RecyclabilityBanner(verdict: Recyclability) -> impl IntoView {
    let (class, icon) = match verdict {
        Recyclability::Recyclable => ("verdict verdict-yes", "✔"),
        Recyclability::NotRecyclable => ("verdict verdict-no", "✘"),
        Recyclability::Unknown => ("verdict verdict-unknown", "?"),
    };

    view! {
        <div class=class>
            <span class="verdict-icon">{icon}</span>
            <span>{verdict.to_string()}</span>
        </div>
    }
}

#[component]
fn RecommendationView(recommendation: Recommendation) -> impl IntoView {
    match recommendation {
        Recommendation::Plain(text) => view! { <p>{text}</p> }.into_any(),
        Recommendation::Structured(detail) => view! {
            <div class="recommendation">
                {detail.general_advice.map(|text| view! { <p>{text}</p> })}
                {detail.disposal_methods.map(|methods| view! {
                    <h4>"Disposal Methods"</h4>
                    <ul>
                        {methods.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                    </ul>
                })}
                {detail.recycling_centers.map(|centers| view! {
                    <h4>"Recycling Centers"</h4>
                    <ul>
                        {centers.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                    </ul>
                })}
                {detail.environmental_impact.map(|text| view! {
                    <h4>"Environmental Impact"</h4>
                    <p>{text}</p>
                })}
            </div>
        }
        .into_any(),
    }
}
