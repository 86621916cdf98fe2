use crate::state::Outcome;
use crate::view_model::{FieldView, FormView};
use crate::{Effect, FormField, JobForm, JobId, JobType, Msg, Notice, Route};

pub const CREATED_TEXT: &str = "Job posted successfully!";
pub const CREATE_FAILED_TEXT: &str = "Failed to create job";
pub const UPDATED_TEXT: &str = "Job updated!";
pub const UPDATE_FAILED_TEXT: &str = "Failed to update job";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(JobId),
}

/// `Loading -> Ready -> Submitting -> Ready`; success leaves the page via redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Ready,
    Submitting,
}

/// State behind both the create and the edit page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPage {
    mode: FormMode,
    form: JobForm,
    phase: FormPhase,
    missing: Vec<FormField>,
}

impl FormPage {
    pub(crate) fn mount_create() -> (Self, Vec<Effect>) {
        let page = Self {
            mode: FormMode::Create,
            form: JobForm::default(),
            phase: FormPhase::Ready,
            missing: Vec::new(),
        };
        (page, Vec::new())
    }

    pub(crate) fn mount_edit(job_id: JobId) -> (Self, Vec<Effect>) {
        let page = Self {
            mode: FormMode::Edit(job_id.clone()),
            form: JobForm::default(),
            phase: FormPhase::Loading,
            missing: Vec::new(),
        };
        (page, vec![Effect::FetchJob { job_id }])
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> &JobForm {
        &self.form
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Required fields found empty by the last submit attempt.
    pub fn missing(&self) -> &[FormField] {
        &self.missing
    }

    pub fn route(&self) -> Route {
        match &self.mode {
            FormMode::Create => Route::CreateJob,
            FormMode::Edit(job_id) => Route::EditJob(job_id.clone()),
        }
    }

    fn is_editing(&self, job_id: &JobId) -> bool {
        matches!(&self.mode, FormMode::Edit(id) if id == job_id)
    }

    pub(crate) fn handle(&mut self, msg: Msg) -> Outcome {
        match msg {
            Msg::FieldChanged { field, value } => self.change_field(field, value),
            Msg::SubmitClicked => self.submit(),
            Msg::JobLoaded { job_id, result } => {
                if !self.is_editing(&job_id) || self.phase != FormPhase::Loading {
                    return Outcome::ignored();
                }
                // A failed load still ends loading; the form stays at its defaults.
                if let Ok(job) = result {
                    self.form = JobForm::from_job(&job);
                }
                self.phase = FormPhase::Ready;
                Outcome::changed()
            }
            Msg::JobCreated(result) if self.mode == FormMode::Create => {
                self.finish_submit(result.is_ok(), CREATED_TEXT, CREATE_FAILED_TEXT)
            }
            Msg::JobUpdated { job_id, result } if self.is_editing(&job_id) => {
                self.finish_submit(result.is_ok(), UPDATED_TEXT, UPDATE_FAILED_TEXT)
            }
            _ => Outcome::ignored(),
        }
    }

    fn change_field(&mut self, field: FormField, value: String) -> Outcome {
        if self.phase == FormPhase::Loading {
            return Outcome::ignored();
        }
        let next = self.form.with_field(field, value);
        if next == self.form {
            return Outcome::ignored();
        }
        self.form = next;
        if !self.missing.is_empty() {
            self.missing = self.form.missing_required();
        }
        Outcome::changed()
    }

    fn submit(&mut self) -> Outcome {
        if self.phase != FormPhase::Ready {
            return Outcome::ignored();
        }
        self.missing = self.form.missing_required();
        if !self.missing.is_empty() {
            return Outcome::changed();
        }
        self.phase = FormPhase::Submitting;
        let form = self.form.clone();
        let effect = match &self.mode {
            FormMode::Create => Effect::CreateJob { form },
            FormMode::Edit(job_id) => Effect::UpdateJob {
                job_id: job_id.clone(),
                form,
            },
        };
        Outcome::effect(effect)
    }

    fn finish_submit(&mut self, succeeded: bool, ok_text: &str, failed_text: &str) -> Outcome {
        if self.phase != FormPhase::Submitting {
            return Outcome::ignored();
        }
        if succeeded {
            Outcome::changed()
                .with_notice(Notice::success(ok_text))
                .with_redirect(Route::Listing)
        } else {
            self.phase = FormPhase::Ready;
            Outcome::changed().with_notice(Notice::error(failed_text))
        }
    }

    pub(crate) fn view(&self) -> FormView {
        let (heading, submit_label) = match &self.mode {
            FormMode::Create => ("Post a New Job", "Post Job"),
            FormMode::Edit(_) => ("Edit Job", "Save Changes"),
        };
        let fields = FormField::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.name().replace('_', " "),
                value: self.form.value(field),
                required: field.is_required(),
                missing: self.missing.contains(&field),
            })
            .collect();

        FormView {
            heading,
            submit_label,
            fields,
            job_type_options: JobType::ALL.to_vec(),
            loading: self.phase == FormPhase::Loading,
            submitting: self.phase == FormPhase::Submitting,
        }
    }
}
