//! Plain data table.

use leptos::prelude::*;

/// Table with a header row and text cells.
#[component]
pub fn DataTable(
    /// Column headers.
    headers: Vec<&'static str>,
    /// Row cells, one `Vec` per row.
    rows: Vec<Vec<String>>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
