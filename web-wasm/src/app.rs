//! Application shell: routing, shared result holder, configuration banner

use crate::components::{
    header::Header, home_page::HomePage, results_page::ResultsPage,
    statistics_page::StatisticsPage, upload_page::UploadPage,
};
use crate::config::AppConfig;
use ewaste_ai_common::AnalysisResult;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Shared result holder: set on successful analysis, cleared when the
    // results page unmounts. Lost on reload by design.
    let analysis = RwSignal::new(None::<AnalysisResult>);
    provide_context(analysis);

    let config = AppConfig::load();
    let config_error = config.require_api_key().err().map(|e| e.to_string());
    provide_context(config);

    view! {
        <Router>
            <Header/>
            <main class="container">
                {config_error.map(|message| view! {
                    <div class="banner banner-config">{message}</div>
                })}
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/upload") view=UploadPage/>
                    <Route path=path!("/results") view=ResultsPage/>
                    <Route path=path!("/statistics") view=StatisticsPage/>
                </Routes>
            </main>
        </Router>
    }
}
