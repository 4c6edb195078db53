// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Deployment-level flags the dashboard is started with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardConfig {
    pub signed_in: bool,
    /// `None` when the deployment supplies no organization claims at all.
    pub known_org_ids: Option<Vec<String>>,
    pub github_app_url: Option<String>,
    pub gitlab_url: Option<String>,
}

impl DashboardConfig {
    pub fn known_org_ids(&self) -> Option<&[String]> {
        self.known_org_ids.as_deref()
    }
}

/// Splits a comma-separated organization claims string.
///
/// Entries are trimmed and blanks dropped. Absent claims stay `None` so
/// callers can tell "no claims source" apart from "member of nothing".
pub fn parse_org_claims(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?;
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|claim| !claim.is_empty())
            .map(str::to_owned)
            .collect(),
    )
}

/// Dashboard context id: the `/:user` segment of the current location.
pub fn context_id_from_path(path: &str) -> Option<&str> {
    path.split('/').find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{DashboardConfig, context_id_from_path, parse_org_claims};

    #[test]
    fn claims_split_on_commas_and_trim() {
        assert_eq!(
            parse_org_claims(Some("openfaas, alexellis ,,acme")),
            Some(vec![
                "openfaas".to_owned(),
                "alexellis".to_owned(),
                "acme".to_owned()
            ])
        );
    }

    #[test]
    fn absent_claims_stay_absent() {
        assert_eq!(parse_org_claims(None), None);
        assert_eq!(parse_org_claims(Some("")), Some(Vec::new()));
        assert_eq!(parse_org_claims(Some(" , ,")), Some(Vec::new()));
    }

    #[test]
    fn context_id_is_first_path_segment() {
        assert_eq!(context_id_from_path("/alexellis"), Some("alexellis"));
        assert_eq!(context_id_from_path("/alexellis/"), Some("alexellis"));
        assert_eq!(context_id_from_path("/alexellis/figlet"), Some("alexellis"));
        assert_eq!(context_id_from_path("alexellis"), Some("alexellis"));
        assert_eq!(context_id_from_path("/"), None);
        assert_eq!(context_id_from_path(""), None);
    }

    #[test]
    fn known_org_ids_borrows_claims() {
        let config = DashboardConfig {
            known_org_ids: Some(vec!["acme".to_owned()]),
            ..DashboardConfig::default()
        };
        assert_eq!(config.known_org_ids(), Some(&["acme".to_owned()][..]));
        assert_eq!(DashboardConfig::default().known_org_ids(), None);
    }
}
