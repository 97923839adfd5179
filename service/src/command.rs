//! Typed commands decoded from form submissions.
//!
//! Raw forms hold every field as an optional string, the way it arrived on
//! the wire. Converting one into a command performs all validation, so the
//! mutations in this crate only ever see well-formed input.

use serde::Deserialize;
use thiserror::Error;

/// Rejection of a submitted form
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: name, price, or bakery_id")]
    MissingFields,
    #[error("Price must be a valid number")]
    InvalidPrice,
    #[error("bakery_id must be a valid integer")]
    InvalidBakeryId,
}

/// Form body of `POST /baked_goods`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

/// Form body of `PATCH /bakeries/{id}`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BakeryForm {
    pub name: Option<String>,
}

/// A baked good ready to be inserted
#[derive(Clone, Debug, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i32,
}

/// Partial update of a bakery; `None` leaves the column untouched
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BakeryChanges {
    pub name: Option<String>,
}

impl TryFrom<BakedGoodForm> for NewBakedGood {
    type Error = ValidationError;

    fn try_from(form: BakedGoodForm) -> Result<Self, Self::Error> {
        let (Some(name), Some(price), Some(bakery_id)) = (
            non_empty(form.name),
            non_empty(form.price),
            non_empty(form.bakery_id),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        let price = price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or(ValidationError::InvalidPrice)?;
        let bakery_id = bakery_id
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidBakeryId)?;

        Ok(Self {
            name,
            price,
            bakery_id,
        })
    }
}

impl From<BakeryForm> for BakeryChanges {
    fn from(form: BakeryForm) -> Self {
        Self { name: form.name }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
