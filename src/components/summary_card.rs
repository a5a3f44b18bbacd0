//! Structured rendering of an article summary message.

use leptos::prelude::*;

use crate::state::summary::{ArticleSummary, NO_STRUCTURED_SUMMARY, SummarySections};

/// Summary bubble: title, source, the structured sections, and a link out.
#[component]
pub fn SummaryCard(summary: ArticleSummary) -> impl IntoView {
    let ArticleSummary { title, source, url, sections, .. } = summary;

    view! {
        <div class="summary-card">
            <h3 class="summary-card__title">{title}</h3>
            {source.map(|source| view! { <div class="summary-card__source">{source}</div> })}
            {render_sections(sections)}
            {url.map(|url| {
                view! {
                    <a class="summary-card__link" href=url target="_blank" rel="noopener noreferrer">
                        "Read full article"
                    </a>
                }
            })}
        </div>
    }
}

fn render_sections(sections: SummarySections) -> AnyView {
    match sections {
        SummarySections::Categories(categories) => view! {
            <div class="summary-card__categories">
                {categories
                    .into_iter()
                    .map(|category| {
                        view! {
                            <section class="summary-card__category">
                                <h4>{category.name}</h4>
                                <ul>
                                    {category.points.into_iter().map(|point| view! { <li>{point}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </section>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        SummarySections::KeyPoints(points) => view! {
            <ul class="summary-card__keypoints">
                {points.into_iter().map(|point| view! { <li>{point}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        SummarySections::Triad { what, why_it_matters, takeaway } => view! {
            <dl class="summary-card__triad">
                <dt>"What"</dt>
                <dd>{what}</dd>
                <dt>"Why it matters"</dt>
                <dd>{why_it_matters}</dd>
                <dt>"Takeaway"</dt>
                <dd>{takeaway}</dd>
            </dl>
        }
        .into_any(),
        SummarySections::Fallback => view! {
            <p class="summary-card__fallback">{NO_STRUCTURED_SUMMARY}</p>
        }
        .into_any(),
    }
}
