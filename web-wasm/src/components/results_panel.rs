//! Results panel component
//!
//! Renders the projected result: one titled block per page (or a single
//! block for an image), the aggregate summary, and the reset control. The
//! projection is plain data, so the panel is rebuilt whenever a new result
//! arrives.

use leptos::prelude::*;

use docprocessor_common::{ResultBlock, ResultView};

#[component]
pub fn ResultsPanel<F>(result: ResultView, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let ResultView { blocks, summary } = result;

    view! {
        <div class="results-panel">
            {blocks.into_iter().map(result_block).collect_view()}

            <div class="summary-block">
                <div class="summary-heading">{summary.heading}</div>
                <div class="summary-counts">
                    {summary
                        .counts
                        .labelled()
                        .into_iter()
                        .map(|(label, count)| {
                            view! {
                                <div class="summary-metric">
                                    <div class="metric-value">{count}</div>
                                    <div class="metric-label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="reset-row">
                <button
                    class="btn btn-reset"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Add another file"
                </button>
            </div>
        </div>
    }
}

fn result_block(block: ResultBlock) -> impl IntoView {
    let ResultBlock { title, image_url } = block;
    let alt = title.clone();

    view! {
        <div class="result-block">
            <div class="result-title">{title}</div>
            {image_url.map(|url| {
                view! {
                    <div class="result-image">
                        <img src=url alt=alt />
                    </div>
                }
            })}
        </div>
    }
}
