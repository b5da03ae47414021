//! Top navigation bar shown on every page.

use leptos::prelude::*;

use crate::state::routes::{HOME, NavGroup, SitePage, in_group};

fn nav_links(pages: impl Iterator<Item = &'static SitePage>) -> impl IntoView {
    pages
        .map(|page| {
            view! {
                <a class="nav-bar__link" href=page.path>
                    {page.label}
                </a>
            }
        })
        .collect_view()
}

fn nav_menu(group: NavGroup) -> impl IntoView {
    view! {
        <details class="nav-bar__menu">
            <summary class="nav-bar__menu-title">{group.label()}</summary>
            <div class="nav-bar__menu-items">{nav_links(in_group(group))}</div>
        </details>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=HOME>
                "Cropix"
            </a>
            <nav class="nav-bar__links">
                {nav_links(in_group(NavGroup::Main))}
                {nav_menu(NavGroup::Recommendations)}
                {nav_menu(NavGroup::Forecasts)}
            </nav>
        </header>
    }
}
