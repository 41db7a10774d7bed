//! Leptos application: header plus the page the route table selects.

use leptos::*;
use leptos_router::*;

use crate::shell::Shell;
use crate::views::{CartView, LandingView, ListingView, NotFoundView, PageBody};
use crate::ViewAction;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let shell = create_rw_signal(Shell::default());

    view! {
        <Router>
            <SiteHeader shell=shell/>
            <main>
                <CurrentPage shell=shell/>
            </main>
        </Router>
    }
}

fn dispatch(shell: RwSignal<Shell>, action: ViewAction) {
    shell.update(|s| {
        if let Err(err) = s.dispatch(&action) {
            logging::error!("{err}");
        }
    });
}

#[component]
fn SiteHeader(shell: RwSignal<Shell>) -> impl IntoView {
    let header = move || shell.with(|s| s.header());

    view! {
        <header class="site-header">
            <h1>{move || header().title}</h1>
            <nav>
                {move || {
                    header()
                        .links
                        .into_iter()
                        .map(|link| view! { <A href=link.href>{link.label}</A> })
                        .collect_view()
                }}
            </nav>
        </header>
    }
}

/// Keeps the shell's route in sync with the browser location and renders it.
/// Unknown locations render the not-found body.
#[component]
fn CurrentPage(shell: RwSignal<Shell>) -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        let path = location.pathname.get();
        shell.update(|s| {
            if let Err(err) = s.navigate(&path) {
                logging::warn!("{err}");
            }
        });
    });

    move || match shell.with(|s| s.render().body) {
        PageBody::Landing(model) => landing_page(model),
        PageBody::Listing(model) => listing_page(shell, model),
        PageBody::Cart(model) => cart_page(shell, model),
        PageBody::NotFound(model) => not_found_page(model),
    }
}

fn landing_page(model: LandingView) -> View {
    view! {
        <div class="landing">
            <h2>{model.heading}</h2>
            <p>{model.blurb}</p>
            <A href=model.cta.href>{model.cta.label}</A>
        </div>
    }
    .into_view()
}

fn not_found_page(model: NotFoundView) -> View {
    view! {
        <div class="not-found">
            <p>{model.message}</p>
            <A href=model.home.href>{model.home.label}</A>
        </div>
    }
    .into_view()
}

fn listing_page(shell: RwSignal<Shell>, model: ListingView) -> View {
    view! {
        <div class="product-grid">
            {model
                .cards
                .into_iter()
                .map(|card| {
                    let action = card.add_action;
                    let alt = card.name.clone();
                    view! {
                        <div class="product-card">
                            <img src=card.image alt=alt/>
                            <h3>{card.name}</h3>
                            <p class="price">{card.price}</p>
                            <p class="category">{format!("Category: {}", card.category)}</p>
                            <button
                                disabled=card.in_cart
                                on:click=move |_| {
                                    if let Some(action) = action {
                                        dispatch(shell, action);
                                    }
                                }
                            >
                                {card.button_label}
                            </button>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn cart_page(shell: RwSignal<Shell>, model: CartView) -> View {
    match model {
        CartView::Empty { message } => view! {
            <div class="cart">
                <h2>"Shopping Cart"</h2>
                <p>{message}</p>
            </div>
        }
        .into_view(),
        CartView::Filled {
            total_items,
            total_cost,
            lines,
            checkout_label,
            checkout,
        } => view! {
            <div class="cart">
                <h2>"Shopping Cart"</h2>
                <p>{format!("Total items: {total_items}")}</p>
                <p>{format!("Total cost: {total_cost}")}</p>
                {lines
                    .into_iter()
                    .map(|line| {
                        let (decrease, increase, remove) = (line.decrease, line.increase, line.remove);
                        let alt = line.name.clone();
                        view! {
                            <div class="cart-line">
                                <img src=line.image alt=alt/>
                                <div class="details">
                                    <h3>{line.name}</h3>
                                    <p>{line.price}</p>
                                </div>
                                <div class="controls">
                                    <button on:click=move |_| dispatch(shell, decrease)>"-"</button>
                                    <span>{line.quantity}</span>
                                    <button on:click=move |_| dispatch(shell, increase)>"+"</button>
                                    <button on:click=move |_| dispatch(shell, remove)>"Delete"</button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
                <button class="checkout" on:click=move |_| dispatch(shell, checkout)>
                    {checkout_label}
                </button>
            </div>
        }
        .into_view(),
    }
}
