use leptos::prelude::*;

use crate::router::View;
use crate::router::page::MethodologyView;
use crate::ui::components::Expander;

use super::ViewHeader;

#[component]
pub fn MethodologyPage(view: MethodologyView) -> impl IntoView {
    view! {
        <div class="view view-methodology">
            <ViewHeader view=View::Methodology/>
            {view
                .stages
                .into_iter()
                .map(|stage| {
                    let description = format!("Description: {}", stage.name);
                    view! {
                        <Expander title={stage.heading()} expanded=true>
                            <p>{description}</p>
                            <ul>
                                {stage
                                    .phases
                                    .iter()
                                    .map(|phase| {
                                        let line = format!("Phase {}: {}", phase.code(), phase.name());
                                        view! { <li>{line}</li> }
                                    })
                                    .collect_view()}
                            </ul>
                        </Expander>
                    }
                })
                .collect_view()}
        </div>
    }
}
