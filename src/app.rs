use leptos::*;

use crate::{
    application::LoadPriceTableUseCase,
    config::DashboardConfig,
    domain::{
        chart::FigureRenderer,
        logging::LogComponent,
        market_data::Ticker,
        table::{PaginationState, TABLE_COLUMNS},
    },
    global_state::{
        LoadStatus, chart_error, dashboard, load_status, page_current, page_size, selected_tickers,
    },
    infrastructure::{PlotlyRenderer, PriceTableHttpClient},
    log_debug, log_warn,
};

/// 🦀 Root component of the stock dashboard
#[component]
pub fn App(#[prop(optional)] config: Option<DashboardConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    page_size().set(config.page_size);
    provide_context(config.clone());
    spawn_local(load_dashboard(config));

    view! {
        <style>
            {r#"
            .stock-dashboard {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                max-width: 1100px;
                margin: 0 auto;
                padding: 20px;
                color: #1f2d3d;
            }

            .stock-dashboard label {
                display: block;
                margin: 18px 0 6px;
                font-weight: 600;
            }

            .status {
                font-size: 13px;
                color: #5a6d83;
            }

            .ticker-picker {
                display: flex;
                flex-wrap: wrap;
                gap: 6px;
                align-items: center;
                border: 1px solid #c8d1dc;
                border-radius: 6px;
                padding: 6px;
            }

            .ticker-chip {
                background: #e8eef6;
                border-radius: 4px;
                padding: 2px 4px 2px 8px;
                font-size: 13px;
            }

            .chip-remove {
                border: none;
                background: transparent;
                cursor: pointer;
                margin-left: 4px;
            }

            .stock-chart {
                min-height: 450px;
            }

            .chart-error {
                color: #c0392b;
                font-size: 13px;
            }

            .stock-table {
                border-collapse: collapse;
                width: 100%;
            }

            .stock-table th, .stock-table td {
                border: 1px solid #dde3ea;
                padding: 6px 10px;
                text-align: left;
            }

            .pagination {
                display: flex;
                justify-content: flex-end;
                align-items: center;
                gap: 10px;
                margin-top: 8px;
                font-size: 13px;
            }
            "#}
        </style>
        <div class="stock-dashboard">
            <h1>"Stocks"</h1>
            <StatusLine />
            <label for="ticker_dropdown">"Select ticker:"</label>
            <TickerPicker />
            <label>"Chart"</label>
            <StockChart />
            <label>"Table"</label>
            <StockTable />
        </div>
    }
}

/// Load the table once and seed the selection with the default ticker
async fn load_dashboard(config: DashboardConfig) {
    load_status().set(LoadStatus::Loading);

    let use_case = LoadPriceTableUseCase::new(PriceTableHttpClient::new(config.data_url));
    match use_case.execute().await {
        Ok(service) => {
            load_status().set(LoadStatus::Ready {
                records: service.record_count(),
                tickers: service.ticker_options().len(),
            });
            selected_tickers().set(service.default_selection());
            page_current().set(0);
            dashboard().set(Some(service));
        }
        Err(e) => load_status().set(LoadStatus::Failed(e.to_string())),
    }
}

#[component]
fn StatusLine() -> impl IntoView {
    view! { <div class="status">{move || load_status().get().message()}</div> }
}

/// Multi-select: one chip per selected ticker plus a dropdown of the rest.
/// Chips keep the order tickers were picked in.
#[component]
fn TickerPicker() -> impl IntoView {
    let available = create_memo(move |_| {
        let selection = selected_tickers().get();
        dashboard()
            .with(|service| service.as_ref().map(|s| s.ticker_options()).unwrap_or_default())
            .into_iter()
            .filter(|ticker| !selection.contains(ticker))
            .collect::<Vec<_>>()
    });

    let on_pick = move |event: ev::Event| {
        let value = event_target_value(&event);
        if let Ok(ticker) = Ticker::new(value) {
            log_debug!(LogComponent::Presentation("TickerPicker"), "➕ Selected {ticker}");
            selected_tickers().update(|selection| {
                selection.add(ticker);
            });
        }
        // back to the placeholder option
        event_target::<web_sys::HtmlSelectElement>(&event).set_value("");
    };

    view! {
        <div class="ticker-picker">
            <For
                each=move || selected_tickers().get().as_slice().to_vec()
                key=|ticker| ticker.clone()
                children=move |ticker: Ticker| {
                    let label = ticker.to_string();
                    view! {
                        <span class="ticker-chip">
                            {label}
                            <button
                                class="chip-remove"
                                title="Remove"
                                on:click=move |_: ev::MouseEvent| {
                                    selected_tickers().update(|selection| {
                                        selection.remove(&ticker);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </span>
                    }
                }
            />
            <select id="ticker_dropdown" on:change=on_pick>
                <option value="" selected=true>"Add ticker…"</option>
                <For
                    each=move || available.get()
                    key=|ticker| ticker.clone()
                    children=move |ticker: Ticker| {
                        let value = ticker.to_string();
                        view! { <option value=value.clone()>{value}</option> }
                    }
                />
            </select>
        </div>
    }
}

/// 📈 Chart area; re-renders whenever the selection or the table changes
#[component]
fn StockChart() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let renderer = PlotlyRenderer::new(config.chart_element_id.clone());
    let chart_ref = create_node_ref::<html::Div>();

    let figure = create_memo(move |_| {
        let selection = selected_tickers().get();
        dashboard().with(|service| service.as_ref().map(|s| s.figure(&selection)))
    });

    create_effect(move |_| {
        let figure = figure.get();
        if chart_ref.get().is_none() {
            return;
        }
        let Some(figure) = figure else { return };

        match renderer.render(&figure) {
            Ok(()) => chart_error().set(None),
            Err(e) => {
                log_warn!(LogComponent::Presentation("StockChart"), "⚠️ Chart not rendered: {e}");
                chart_error().set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="chart-container">
            <div id=config.chart_element_id class="stock-chart" node_ref=chart_ref></div>
            <Show when=move || chart_error().with(Option::is_some)>
                <div class="chart-error">{move || chart_error().get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}

/// 📋 Adjusted close table with server-style pagination
#[component]
fn StockTable() -> impl IntoView {
    let pagination = create_memo(move |_| {
        PaginationState::new(page_current().get(), page_size().get()).unwrap_or_default()
    });

    let rows = create_memo(move |_| {
        let selection = selected_tickers().get();
        let pagination = pagination.get();
        dashboard().with(|service| {
            service.as_ref().map(|s| s.table_page(&selection, pagination)).unwrap_or_default()
        })
    });

    let total_pages = create_memo(move |_| {
        let selection = selected_tickers().get();
        let size = pagination.get().page_size();
        dashboard().with(|service| service.as_ref().map(|s| s.page_count(&selection, size)).unwrap_or(0))
    });

    let on_previous = move |_: ev::MouseEvent| {
        page_current().set(pagination.get_untracked().previous().page_current())
    };
    let on_next = move |_: ev::MouseEvent| {
        page_current().set(pagination.get_untracked().next().page_current())
    };

    view! {
        <table id="table" class="stock-table">
            <thead>
                <tr>{TABLE_COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}</tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{format!("{:.2}", row.adj_close)}</td>
                                    <td>{row.ticker.to_string()}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
        <div class="pagination">
            <button class="page-btn" on:click=on_previous prop:disabled={move || page_current().get() == 0}>
                "‹ Prev"
            </button>
            <span class="page-info">
                {move || format!("Page {} of {}", page_current().get() + 1, total_pages.get().max(1))}
            </span>
            <button
                class="page-btn"
                on:click=on_next
                prop:disabled={move || page_current().get() + 1 >= total_pages.get()}
            >
                "Next ›"
            </button>
        </div>
    }
}
