use crate::domain::a002_invoice::ui::edit::InvoiceEditPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Router>
                <main class="app-content">
                    <Routes fallback=|| view! { <div class="not-found">"Page not found"</div> }>
                        <Route path=path!("/apps/invoice/edit/:id") view=InvoiceEditPage />
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
