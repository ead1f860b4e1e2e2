use leptos::prelude::*;

use crate::router::View;
use crate::router::page::SettingsView;
use crate::ui::components::{
    Button, ButtonVariant, Checkbox, Select, SelectOption, Slider, TabList, TabPanel,
};

use super::ViewHeader;

#[component]
pub fn SettingsPage(view: SettingsView) -> impl IntoView {
    let prefs = view.preferences;
    let ai = view.ai;
    let themes = view
        .themes
        .iter()
        .map(|t| SelectOption::plain(t.label()))
        .collect::<Vec<_>>();
    let rates = view
        .refresh_rates
        .iter()
        .map(|r| SelectOption::plain(r.label()))
        .collect::<Vec<_>>();

    view! {
        <div class="view view-settings">
            <ViewHeader view=View::Settings/>
            <TabList labels={vec!["Dashboard", "AI"]} ids={vec!["settings-dashboard", "settings-ai"]}/>
            <TabPanel id="settings-dashboard">
                <form class="form" method="post" action="/settings/dashboard">
                    <div class="columns">
                        <div>
                            <Select label="Theme" name="theme" options=themes selected={prefs.theme.label()}/>
                            <Select
                                label="Refresh Rate"
                                name="refresh_rate"
                                options=rates
                                selected={prefs.refresh_rate.label()}
                            />
                        </div>
                        <div>
                            <Checkbox
                                label="Show Notifications"
                                name="show_notifications"
                                checked={prefs.show_notifications}
                            />
                            <Checkbox label="Compact Mode" name="compact_mode" checked={prefs.compact_mode}/>
                        </div>
                    </div>
                    <Button variant=ButtonVariant::Primary>"Save Settings"</Button>
                </form>
            </TabPanel>
            <TabPanel id="settings-ai">
                <form class="form" method="post" action="/settings/ai">
                    <Checkbox
                        label="Benefits Prediction"
                        name="benefits_prediction"
                        checked={ai.benefits_prediction}
                    />
                    <Checkbox
                        label="Risk Intelligence"
                        name="risk_intelligence"
                        checked={ai.risk_intelligence}
                    />
                    <Checkbox
                        label="Sustainability Analytics"
                        name="sustainability_analytics"
                        checked={ai.sustainability_analytics}
                    />
                    <Slider
                        label="AI Confidence Threshold"
                        name="confidence_threshold"
                        min=0.0
                        max=1.0
                        value={ai.confidence_threshold()}
                    />
                    <Button>"Apply"</Button>
                </form>
            </TabPanel>
        </div>
    }
}
