use leptos::prelude::*;

use crate::domain::ProjectType;
use crate::router::View;
use crate::router::page::{ProjectCard, ProjectsView};
use crate::ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardHeader, CardStat, Select,
    SelectOption, TextInput,
};

use super::{SectionHeading, ViewHeader};

#[component]
pub fn ProjectsPage(view: ProjectsView) -> impl IntoView {
    view! {
        <div class="view view-projects">
            <ViewHeader view=View::Projects/>
            <section class="project-grid" style={format!("--columns: {};", ProjectsView::COLUMNS)}>
                {view
                    .cards
                    .into_iter()
                    .map(|card| view! { <ProjectCardView card=card/> })
                    .collect_view()}
            </section>
            <SectionHeading title="➕ Create Project"/>
            <CreateProjectForm project_types=view.project_types/>
        </div>
    }
}

/// One project card: name, health badge and the two headline scores.
#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let subtitle = card.subtitle();
    let badge = format!("{} {}", card.tier.icon(), card.health);
    let ai = format!("{}%", card.ai_adoption);
    let sustainability = format!("{}/100", card.sustainability);

    view! {
        <Card class="project-card" accent={card.tier.color()}>
            <CardHeader title={card.name}>
                <Badge
                    variant={BadgeVariant::from(card.tier)}
                    color={card.tier.color()}
                    title={card.tier.label()}
                >
                    {badge}
                </Badge>
            </CardHeader>
            <p class="muted">{subtitle}</p>
            <div class="card-stats">
                <CardStat label="AI" value=ai/>
                <CardStat label="Sustainability" value=sustainability/>
            </div>
        </Card>
    }
}

#[component]
fn CreateProjectForm(project_types: Vec<ProjectType>) -> impl IntoView {
    let options = project_types
        .into_iter()
        .map(|t| SelectOption::plain(t.label()))
        .collect::<Vec<_>>();

    view! {
        <form class="form" method="post" action="/projects">
            <TextInput label="Project Name" name="name"/>
            <Select label="Project Office Type" name="project_type" options=options/>
            <Button variant=ButtonVariant::Primary>"Create Project"</Button>
        </form>
    }
}
