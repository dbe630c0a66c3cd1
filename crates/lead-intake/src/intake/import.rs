use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::LeadSubmission;

/// Errors raised while reading an exported lead sheet.
#[derive(Debug)]
pub enum LeadImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LeadImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadImportError::Io(err) => write!(f, "failed to read lead export: {}", err),
            LeadImportError::Csv(err) => write!(f, "invalid lead CSV data: {}", err),
        }
    }
}

impl std::error::Error for LeadImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeadImportError::Io(err) => Some(err),
            LeadImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LeadImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LeadImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reader for headed CSV exports of lead forms (form builders, spreadsheets).
///
/// Empty cells become absent fields so imported rows score exactly like
/// forms submitted over HTTP.
pub struct LeadCsvImporter;

impl LeadCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LeadSubmission>, LeadImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LeadSubmission>, LeadImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut submissions = Vec::new();
        for row in csv_reader.deserialize::<LeadRow>() {
            submissions.push(row?.into_submission());
        }

        Ok(submissions)
    }
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(rename = "First Name", default, deserialize_with = "empty_string_as_none")]
    first_name: Option<String>,
    #[serde(rename = "Last Name", default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
    #[serde(rename = "Company", default, deserialize_with = "empty_string_as_none")]
    business_info: Option<String>,
    #[serde(rename = "Niche", default, deserialize_with = "empty_string_as_none")]
    business_niche: Option<String>,
    #[serde(rename = "Budget", default, deserialize_with = "empty_string_as_none")]
    budget: Option<String>,
    #[serde(rename = "Company Size", default, deserialize_with = "empty_string_as_none")]
    company_size: Option<String>,
    #[serde(rename = "Deadline", default, deserialize_with = "empty_string_as_none")]
    deadline: Option<String>,
    #[serde(rename = "Comments", default, deserialize_with = "empty_string_as_none")]
    comments: Option<String>,
    #[serde(rename = "Contact", default, deserialize_with = "empty_string_as_none")]
    preferred_contact: Option<String>,
}

impl LeadRow {
    fn into_submission(self) -> LeadSubmission {
        LeadSubmission {
            first_name: self.first_name,
            last_name: self.last_name,
            business_info: self.business_info,
            business_niche: self.business_niche,
            budget: self.budget,
            company_size: self.company_size,
            deadline: self.deadline,
            comments: self.comments,
            preferred_contact: self.preferred_contact,
            ..Default::default()
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
