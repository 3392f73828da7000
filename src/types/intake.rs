use crate::error::{ReadinessError, Result};
use crate::types::profile::{TeamProfile, TractionProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Retail,
    Manufacturing,
    Energy,
    Other,
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub founding_year: Option<u16>,
    #[serde(default = "default_industry")]
    pub industry: Industry,
    #[serde(default)]
    pub product_description: String,
}

fn default_industry() -> Industry {
    Industry::Other
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
}

impl AddressQuery {
    pub fn formatted(&self) -> String {
        let street = self.address.trim();
        let locality = format!("{}, {} {}", self.city.trim(), self.state.trim(), self.postal_code.trim());
        if street.is_empty() {
            locality.trim_end().to_string()
        } else {
            format!("{street}, {}", locality.trim_end())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
    pub country: String,
    pub formatted: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intake {
    pub company: CompanyInfo,
    pub team: TeamProfile,
    pub traction: TractionProfile,
    pub location: AddressQuery,
}

impl Intake {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReadinessError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let intake: Intake = toml::from_str(&content)?;
        Ok(intake)
    }

    pub fn validate(&self) -> Result<()> {
        if self.company.name.trim().is_empty() {
            return Err(ReadinessError::InvalidIntake(
                "company.name must not be empty".to_string(),
            ));
        }

        let tech = self.team.tech_background_percentage;
        if !tech.is_finite() || !(0.0..=100.0).contains(&tech) {
            return Err(ReadinessError::InvalidIntake(format!(
                "team.tech_background_percentage must be between 0 and 100 (found {tech})"
            )));
        }

        for (field, value) in [
            ("traction.monthly_revenue", self.traction.monthly_revenue),
            ("traction.growth_rate", self.traction.growth_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ReadinessError::InvalidIntake(format!(
                    "{field} must be a non-negative number (found {value})"
                )));
            }
        }

        if self.location.city.trim().is_empty() || self.location.state.trim().is_empty() {
            return Err(ReadinessError::InvalidIntake(
                "location.city and location.state are required".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[company]
name = "Acme Robotics"
founding_year = 2021
industry = "Technology"
product_description = "Autonomous warehouse robots."

[team]
founder_count = 2
team_size = 8
tech_background_percentage = 60
previous_startups = 1

[traction]
monthly_revenue = 25000
user_count = 1500
growth_rate = 15

[location]
address = "1 Market St"
city = "San Francisco"
state = "CA"
postal_code = "94105"
"#;

    fn sample() -> Intake {
        toml::from_str(SAMPLE).expect("sample intake should parse")
    }

    #[test]
    fn parse_sample_intake() {
        let intake = sample();
        assert_eq!(intake.company.name, "Acme Robotics");
        assert_eq!(intake.company.industry, Industry::Technology);
        assert_eq!(intake.team.founder_count, 2);
        assert_eq!(intake.traction.user_count, 1500);
        assert!(intake.validate().is_ok());
    }

    #[test]
    fn industry_defaults_to_other() {
        let text = SAMPLE.replace("industry = \"Technology\"\n", "");
        let intake: Intake = toml::from_str(&text).expect("intake should parse");
        assert_eq!(intake.company.industry, Industry::Other);
    }

    #[test]
    fn validate_rejects_out_of_range_tech_percentage() {
        let mut intake = sample();
        intake.team.tech_background_percentage = 120.0;
        let err = intake.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("tech_background_percentage"));
    }

    #[test]
    fn validate_rejects_negative_revenue() {
        let mut intake = sample();
        intake.traction.monthly_revenue = -1.0;
        let err = intake.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("traction.monthly_revenue"));
    }

    #[test]
    fn validate_rejects_blank_company_name() {
        let mut intake = sample();
        intake.company.name = "  ".to_string();
        assert!(intake.validate().is_err());
    }

    #[test]
    fn formatted_address_joins_parts() {
        let intake = sample();
        assert_eq!(
            intake.location.formatted(),
            "1 Market St, San Francisco, CA 94105"
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Intake::load(Path::new("/nonexistent/intake.toml"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ReadinessError::PathNotFound(_)));
    }
}
