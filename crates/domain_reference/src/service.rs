//! Reference data maintenance
//!
//! `ReferenceDataService` applies the rules that sit above plain storage:
//! field validation, unique province codes and names, and the check that a
//! province's country exists before provinces are listed or created.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use core_kernel::{OperationMetadata, PortError};

use crate::country::Country;
use crate::error::ReferenceError;
use crate::ports::{CountryPort, ProvincePort};
use crate::province::Province;
use crate::validation::ReferenceValidator;

/// A country together with its provinces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceListing {
    pub country: Country,
    pub provinces: Vec<Province>,
}

/// Application service for countries and provinces
#[derive(Clone)]
pub struct ReferenceDataService {
    countries: Arc<dyn CountryPort>,
    provinces: Arc<dyn ProvincePort>,
}

impl ReferenceDataService {
    pub fn new(countries: Arc<dyn CountryPort>, provinces: Arc<dyn ProvincePort>) -> Self {
        Self { countries, provinces }
    }

    /// Lists every country ordered by name
    #[instrument(skip(self))]
    pub async fn list_countries(&self) -> Result<Vec<Country>, ReferenceError> {
        Ok(self.countries.list_countries(None).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_country(&self, code: &str) -> Result<Country, ReferenceError> {
        let code = code.trim().to_uppercase();
        self.countries
            .find_country(&code)
            .await?
            .ok_or(ReferenceError::CountryNotFound(code))
    }

    #[instrument(skip(self, country), fields(code = %country.code))]
    pub async fn create_country(&self, mut country: Country) -> Result<Country, ReferenceError> {
        country.normalize();
        Self::check_country(&country)?;

        if self.countries.find_country(&country.code).await?.is_some() {
            return Err(ReferenceError::Duplicate(vec![format!(
                "'{}' is already taken - Country Code must be unique.",
                country.code
            )]));
        }

        let created = self.countries.create_country(country, Some(Self::metadata("create_country"))).await?;
        info!(code = %created.code, "Country created");
        Ok(created)
    }

    /// Replaces the country stored under `code`
    ///
    /// A country whose own code differs from `code` is treated as not found.
    #[instrument(skip(self, country))]
    pub async fn update_country(&self, code: &str, mut country: Country) -> Result<Country, ReferenceError> {
        country.normalize();
        let code = code.trim().to_uppercase();
        if country.code != code {
            return Err(ReferenceError::CountryNotFound(code));
        }
        Self::check_country(&country)?;

        let updated = self
            .countries
            .update_country(country, Some(Self::metadata("update_country")))
            .await
            .map_err(|e| Self::country_miss(e, &code))?;
        info!(code = %updated.code, "Country updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_country(&self, code: &str) -> Result<(), ReferenceError> {
        let code = code.trim().to_uppercase();
        self.countries
            .delete_country(&code, Some(Self::metadata("delete_country")))
            .await
            .map_err(|e| Self::country_miss(e, &code))?;
        info!(code = %code, "Country deleted");
        Ok(())
    }

    /// Lists the provinces of a country ordered by name
    ///
    /// An unknown or empty country code is rejected with
    /// `ReferenceError::NoCountrySelected`.
    #[instrument(skip(self))]
    pub async fn list_provinces(&self, country_code: &str) -> Result<ProvinceListing, ReferenceError> {
        let country_code = country_code.trim().to_uppercase();
        let country = match self.countries.find_country(&country_code).await? {
            Some(country) => country,
            None => {
                debug!(country_code = %country_code, "No country selected");
                return Err(ReferenceError::NoCountrySelected);
            }
        };

        let provinces = self.provinces.list_provinces(&country.code, None).await?;
        Ok(ProvinceListing { country, provinces })
    }

    #[instrument(skip(self))]
    pub async fn get_province(&self, code: &str) -> Result<Province, ReferenceError> {
        let code = code.trim().to_uppercase();
        self.provinces
            .find_province(&code)
            .await?
            .ok_or(ReferenceError::ProvinceNotFound(code))
    }

    /// Creates a province
    ///
    /// Both the code and the name must be unused; when both are taken the two
    /// messages are reported together.
    #[instrument(skip(self, province), fields(code = %province.code))]
    pub async fn create_province(&self, mut province: Province) -> Result<Province, ReferenceError> {
        province.normalize();
        let country = self.countries.find_country(&province.country_code).await?;
        Self::check_province(&province, country.as_ref())?;
        if country.is_none() {
            return Err(ReferenceError::CountryNotFound(province.country_code));
        }

        let mut taken = Vec::new();
        if self.provinces.find_province(&province.code).await?.is_some() {
            taken.push(format!(
                "'{}' is already taken - Province Code must be unique.",
                province.code
            ));
        }
        if self
            .provinces
            .find_province_by_name(&province.name, None)
            .await?
            .is_some()
        {
            taken.push(format!(
                "'{}' is already taken - Province Name must be unique.",
                province.name
            ));
        }
        if !taken.is_empty() {
            warn!(code = %province.code, "Province rejected as duplicate");
            return Err(ReferenceError::Duplicate(taken));
        }

        let created = self
            .provinces
            .create_province(province, Some(Self::metadata("create_province")))
            .await?;
        info!(code = %created.code, "Province created");
        Ok(created)
    }

    /// Replaces the province stored under `code`
    ///
    /// The name may only be kept or changed to one no other province uses.
    #[instrument(skip(self, province))]
    pub async fn update_province(&self, code: &str, mut province: Province) -> Result<Province, ReferenceError> {
        province.normalize();
        let code = code.trim().to_uppercase();
        if province.code != code {
            return Err(ReferenceError::ProvinceNotFound(code));
        }

        let country = self.countries.find_country(&province.country_code).await?;
        Self::check_province(&province, country.as_ref())?;
        if country.is_none() {
            return Err(ReferenceError::CountryNotFound(province.country_code));
        }

        if let Some(other) = self
            .provinces
            .find_province_by_name(&province.name, None)
            .await?
        {
            if other.code != province.code {
                return Err(ReferenceError::Duplicate(vec![format!(
                    "'{}' is already taken - use a different Name.",
                    province.name
                )]));
            }
        }

        let updated = self
            .provinces
            .update_province(province, Some(Self::metadata("update_province")))
            .await
            .map_err(|e| Self::province_miss(e, &code))?;
        info!(code = %updated.code, "Province updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_province(&self, code: &str) -> Result<(), ReferenceError> {
        let code = code.trim().to_uppercase();
        self.provinces
            .delete_province(&code, Some(Self::metadata("delete_province")))
            .await
            .map_err(|e| Self::province_miss(e, &code))?;
        info!(code = %code, "Province deleted");
        Ok(())
    }

    fn check_country(country: &Country) -> Result<(), ReferenceError> {
        let result = ReferenceValidator::validate_country(country);
        for warning in &result.warnings {
            debug!(code = %country.code, "{}", warning);
        }
        if result.is_valid {
            Ok(())
        } else {
            Err(ReferenceError::ValidationFailed(result.errors))
        }
    }

    fn check_province(province: &Province, country: Option<&Country>) -> Result<(), ReferenceError> {
        let result = ReferenceValidator::validate_province(province, country);
        for warning in &result.warnings {
            debug!(code = %province.code, "{}", warning);
        }
        if result.is_valid {
            Ok(())
        } else {
            Err(ReferenceError::ValidationFailed(result.errors))
        }
    }

    fn country_miss(error: PortError, code: &str) -> ReferenceError {
        if error.is_not_found() {
            ReferenceError::CountryNotFound(code.to_string())
        } else {
            ReferenceError::Port(error)
        }
    }

    fn province_miss(error: PortError, code: &str) -> ReferenceError {
        if error.is_not_found() {
            ReferenceError::ProvinceNotFound(code.to_string())
        } else {
            ReferenceError::Port(error)
        }
    }

    fn metadata(operation: &str) -> OperationMetadata {
        OperationMetadata::default().with_context("operation", operation)
    }
}
