use dioxus::prelude::*;
use serde::Deserialize;

use crate::error::LoadError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl Profile {
    pub fn summary_line(&self) -> String {
        format!("{} — {} • {}", self.name, self.role, self.location)
    }
}

/// Compact rendering used by the `#dynamic-data` panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    pub profile_line: Option<String>,
    pub skills: Option<Vec<String>>,
    pub project_names: Option<String>,
}

impl From<&PortfolioData> for SummaryView {
    fn from(data: &PortfolioData) -> Self {
        Self {
            profile_line: data.profile.as_ref().map(Profile::summary_line),
            skills: data.skills.clone(),
            project_names: data.projects.as_ref().map(|projects| {
                projects
                    .iter()
                    .map(|project| project.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" • ")
            }),
        }
    }
}

pub const PROJECT_LINK_LABEL: &str = "View Project";

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub link: String,
}

/// Sections of the `#data-output` panel. A missing field drops its section.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub profile: Option<Vec<ProfileRow>>,
    pub skills: Option<Vec<String>>,
    pub hobbies: Option<Vec<String>>,
    pub projects: Option<Vec<ProjectEntry>>,
}

impl From<PortfolioData> for DetailView {
    fn from(data: PortfolioData) -> Self {
        Self {
            profile: data.profile.map(|profile| {
                vec![
                    ProfileRow {
                        label: "Name:",
                        value: profile.name,
                    },
                    ProfileRow {
                        label: "Role:",
                        value: profile.role,
                    },
                    ProfileRow {
                        label: "Location:",
                        value: profile.location,
                    },
                ]
            }),
            skills: data.skills,
            hobbies: data.hobbies,
            projects: data.projects.map(|projects| {
                projects
                    .into_iter()
                    .map(|project| ProjectEntry {
                        name: project.name,
                        description: project.description,
                        link: project.url,
                    })
                    .collect()
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    Default,
    NoStore,
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_portfolio_data(
    url: &str,
    cache: CachePolicy,
) -> Result<PortfolioData, LoadError> {
    let mut request = gloo_net::http::Request::get(url);
    if cache == CachePolicy::NoStore {
        request = request.cache(web_sys::RequestCache::NoStore);
    }
    let response = request
        .send()
        .await
        .map_err(|err| LoadError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    response
        .json::<PortfolioData>()
        .await
        .map_err(|err| LoadError::Decode(err.to_string()))
}

/// Server renders read the bundled copy of the data file.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_portfolio_data(
    _url: &str,
    _cache: CachePolicy,
) -> Result<PortfolioData, LoadError> {
    serde_json::from_str(include_str!("../public/data.json"))
        .map_err(|err| LoadError::Decode(err.to_string()))
}

fn use_portfolio_data(
    url: String,
    cache: CachePolicy,
    flow: &'static str,
) -> Resource<Result<PortfolioData, LoadError>> {
    use_resource(move || {
        let url = url.clone();
        async move {
            let result = fetch_portfolio_data(&url, cache).await;
            match &result {
                Ok(_) => tracing::debug!("{flow}: loaded {url}"),
                Err(err) => tracing::error!("{flow}: failed to load {url}: {err}"),
            }
            result
        }
    })
}

#[component]
pub fn DynamicDataPanel(url: String) -> Element {
    let data = use_portfolio_data(url, CachePolicy::NoStore, "dynamic-data");

    match data() {
        None => rsx! {
            p { class: "data-muted", "Loading data…" }
        },
        Some(Err(err)) => rsx! {
            h3 { "Could not load data" }
            p { class: "data-muted", "{err}" }
        },
        Some(Ok(data)) => {
            let view = SummaryView::from(&data);
            rsx! {
                h3 { "Loaded profile & data" }
                if let Some(line) = view.profile_line {
                    p { class: "data-muted", "{line}" }
                }
                if let Some(skills) = view.skills {
                    ul {
                        for skill in skills {
                            li { "{skill}" }
                        }
                    }
                }
                if let Some(names) = view.project_names {
                    h4 { class: "data-heading", "Projects" }
                    p { class: "data-muted", "{names}" }
                }
            }
        }
    }
}

#[component]
pub fn DataOutput(url: String) -> Element {
    let data = use_portfolio_data(url, CachePolicy::Default, "data-output");

    match data() {
        None => rsx! {},
        Some(Err(_)) => rsx! { "Failed to load data." },
        Some(Ok(data)) => {
            let view = DetailView::from(data);
            rsx! {
                if let Some(rows) = view.profile {
                    div { class: "profile-section",
                        h3 { "👤 Profile" }
                        for row in rows {
                            p { strong { "{row.label}" } " {row.value}" }
                        }
                    }
                }
                if let Some(skills) = view.skills {
                    div { class: "skills-section",
                        h3 { "🧠 Skills" }
                        ul {
                            for skill in skills {
                                li { "{skill}" }
                            }
                        }
                    }
                }
                if let Some(hobbies) = view.hobbies {
                    div { class: "hobbies-section",
                        h3 { "🎯 Hobbies" }
                        ul {
                            for hobby in hobbies {
                                li { "{hobby}" }
                            }
                        }
                    }
                }
                if let Some(projects) = view.projects {
                    div { class: "projects-section",
                        h3 { "💼 Projects" }
                        ul {
                            for project in projects {
                                li {
                                    strong { "{project.name}" }
                                    " — {project.description}"
                                    br {}
                                    a {
                                        href: "{project.link}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "project-link",
                                        "{PROJECT_LINK_LABEL}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
