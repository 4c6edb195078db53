// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{DashboardConfig, context_id_from_path};

pub const PUBLIC_KEY_HREF: &str = "api/pub-cert.pem";
pub const LOGOUT_ROUTE: &str = "/logout";
pub const BRAND_LABEL: &str = "OpenFaaS Cloud";
pub const BRAND_HREF: &str = "https://docs.openfaas.com/openfaas-cloud/intro";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMenu {
    #[default]
    Collapsed,
    Expanded,
}

impl NavMenu {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-dashboard location.
    Route(String),
    /// Anything handed to the system opener; may be relative to the
    /// dashboard's public URL.
    External(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub title: &'static str,
    pub target: LinkTarget,
    pub active: bool,
}

pub fn is_active(current_path: &str, candidate: &str) -> bool {
    current_path == candidate
}

fn route_link(current_path: &str, segment: &str, label: &'static str) -> Option<NavLink> {
    if segment.is_empty() {
        return None;
    }
    let to = format!("/{}", segment.trim_start_matches('/'));
    Some(NavLink {
        label,
        title: "",
        active: is_active(current_path, &to),
        target: LinkTarget::Route(to),
    })
}

fn external_link(href: &str, label: &'static str, title: &'static str) -> NavLink {
    NavLink {
        label,
        title,
        target: LinkTarget::External(href.to_owned()),
        active: false,
    }
}

/// Fixed brand link in the bar title. Shown in both menu states.
pub fn brand_link() -> NavLink {
    external_link(BRAND_HREF, BRAND_LABEL, "OpenFaaS Cloud documentation")
}

/// Links shown in the expanded navigation menu, in display order.
pub fn nav_links(config: &DashboardConfig, current_path: &str) -> Vec<NavLink> {
    let mut links = Vec::new();

    if let Some(home) = context_id_from_path(current_path)
        .and_then(|context| route_link(current_path, context, "Home"))
    {
        links.push(home);
    }

    if let Some(url) = config.github_app_url.as_deref().filter(|url| !url.is_empty()) {
        links.push(external_link(
            url,
            "GitHub App",
            "Install on GitHub repo to deploy functions",
        ));
    }

    if let Some(url) = config.gitlab_url.as_deref().filter(|url| !url.is_empty()) {
        links.push(external_link(
            url,
            "GitLab",
            "GitLab instance to deploy functions",
        ));
    }

    links.push(external_link(
        PUBLIC_KEY_HREF,
        "Public Key",
        "Encrypt function secrets for use in your git repository",
    ));

    if config.signed_in
        && let Some(logout) = route_link(current_path, LOGOUT_ROUTE, "Logout")
    {
        links.push(logout);
    }

    links
}
