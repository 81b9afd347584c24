use serde::Deserialize;

/// Request body for posting a job.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub employment_type: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl CreateJobRequest {
    /// First required text field that is blank, if any.
    pub fn blank_field(&self) -> Option<&'static str> {
        let fields = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("salary", &self.salary),
            ("description", &self.description),
            ("employment_type", &self.employment_type),
        ];
        fields
            .iter()
            .find(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| *name)
    }
}
