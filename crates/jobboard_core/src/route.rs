use std::fmt;

use crate::JobId;

/// Addressable views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Listing,
    CreateJob,
    EditJob(JobId),
}

impl Route {
    /// Parses `/`, `/add-job` or `/edit-job/{id}`; trailing slashes are tolerated.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return path.starts_with('/').then_some(Route::Listing);
        }
        if trimmed == "/add-job" {
            return Some(Route::CreateJob);
        }
        let id = trimmed.strip_prefix("/edit-job/")?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::EditJob(JobId::from(id)))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Listing => f.write_str("/"),
            Route::CreateJob => f.write_str("/add-job"),
            Route::EditJob(id) => write!(f, "/edit-job/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Listing));
        assert_eq!(Route::parse("/add-job/"), Some(Route::CreateJob));
        assert_eq!(Route::parse("/edit-job/42"), Some(Route::EditJob(JobId::from("42"))));
        assert_eq!(
            Route::parse("/edit-job/65a1f0c2/"),
            Some(Route::EditJob(JobId::from("65a1f0c2")))
        );
        assert_eq!(Route::parse("/edit-job/"), None);
        assert_eq!(Route::parse("/edit-job/a/b"), None);
        assert_eq!(Route::parse("jobs"), None);
    }

    #[test]
    fn display_round_trips() {
        for route in [Route::Listing, Route::CreateJob, Route::EditJob(JobId::from("7"))] {
            assert_eq!(Route::parse(&route.to_string()), Some(route.clone()));
        }
    }
}
