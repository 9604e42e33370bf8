//! Name & address DTOs

use serde::{Deserialize, Serialize};

use core_kernel::NameAddressId;
use domain_contacts::NameAddress;

/// Body of `POST /name-addresses` and `PUT /name-addresses/:id`
///
/// Missing fields are treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct NameAddressRequest {
    pub id: Option<NameAddressId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<NameAddressRequest> for NameAddress {
    fn from(request: NameAddressRequest) -> Self {
        NameAddress {
            id: request.id,
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            company_name: request.company_name.unwrap_or_default(),
            street_address: request.street_address.unwrap_or_default(),
            city: request.city.unwrap_or_default(),
            postal_code: request.postal_code.unwrap_or_default(),
            province_code: request.province_code.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NameAddressResponse {
    pub id: Option<NameAddressId>,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub province_code: String,
    pub email: String,
    pub phone: String,
}

impl From<NameAddress> for NameAddressResponse {
    fn from(record: NameAddress) -> Self {
        NameAddressResponse {
            full_name: record.full_name(),
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            company_name: record.company_name,
            street_address: record.street_address,
            city: record.city,
            postal_code: record.postal_code,
            province_code: record.province_code,
            email: record.email,
            phone: record.phone,
        }
    }
}
