use crate::{Job, JobType};

/// Editable job fields. Tags are held as one comma-delimited string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub tags: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Company,
    Location,
    JobType,
    Tags,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Company,
        FormField::Location,
        FormField::JobType,
        FormField::Tags,
    ];

    /// Wire/field name, matching the request body keys.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Company => "company",
            FormField::Location => "location",
            FormField::JobType => "job_type",
            FormField::Tags => "tags",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        FormField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(raw))
    }

    /// Tags are free text; every other field must be non-empty.
    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Tags)
    }
}

impl JobForm {
    /// Seeds a form from a fetched job, joining tags with ", ".
    ///
    /// A `job_type` the client does not recognise falls back to the default.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.parse::<JobType>().unwrap_or_default(),
            tags: job.tags.join(", "),
        }
    }

    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.title.clone(),
            FormField::Company => self.company.clone(),
            FormField::Location => self.location.clone(),
            FormField::JobType => self.job_type.as_str().to_string(),
            FormField::Tags => self.tags.clone(),
        }
    }

    /// Returns a new form with one field replaced.
    ///
    /// An unparseable job type leaves the previous selection in place.
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            FormField::Title => next.title = value,
            FormField::Company => next.company = value,
            FormField::Location => next.location = value,
            FormField::JobType => {
                if let Ok(kind) = value.parse::<JobType>() {
                    next.job_type = kind;
                }
            }
            FormField::Tags => next.tags = value,
        }
        next
    }

    /// Required fields that are currently empty, in form order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_leaves_original_untouched() {
        let form = JobForm::default();
        let next = form.with_field(FormField::Title, "Engineer");
        assert_eq!(form.title, "");
        assert_eq!(next.title, "Engineer");
    }

    #[test]
    fn invalid_job_type_is_ignored() {
        let form = JobForm::default().with_field(FormField::JobType, "Contract");
        let next = form.with_field(FormField::JobType, "Gig");
        assert_eq!(next.job_type, JobType::Contract);
    }

    #[test]
    fn tags_are_optional() {
        let form = JobForm {
            title: "t".into(),
            company: "c".into(),
            location: "l".into(),
            ..JobForm::default()
        };
        assert!(form.missing_required().is_empty());
    }
}
