//! Typed decoding of the HTML form payloads.
//!
//! Form fields arrive as strings and are converted into typed inputs here, so a
//! bad value becomes a [`FormError`] instead of a generic extractor rejection.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid quantity {0:?}")]
    InvalidQuantity(String),

    #[error("invalid temperature {0:?}")]
    InvalidTemperature(String),
}

#[derive(Deserialize, Debug)]
pub struct AddItemForm {
    pub name: String,
    pub quantity: String,
    pub expiration_date: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub expiration_date: NaiveDate,
}

impl TryFrom<AddItemForm> for NewItem {
    type Error = FormError;

    fn try_from(form: AddItemForm) -> Result<Self, Self::Error> {
        let quantity = form
            .quantity
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidQuantity(form.quantity.clone()))?;

        Ok(Self {
            name: form.name,
            quantity,
            expiration_date: parse_date(&form.expiration_date)?,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct TemperatureForm {
    pub temperature: String,
}

impl TemperatureForm {
    pub fn value(&self) -> Result<f64, FormError> {
        self.temperature
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidTemperature(self.temperature.clone()))
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| FormError::InvalidDate(input.to_string()))
}
