//! Display field resolution.

use serde::Serialize;

use super::detail_fallbacks::FallbackCatalog;
use crate::constants::FIELD_PLACEHOLDER;
use crate::holders::AccountHolderProfile;

/// Return the first candidate that is present and non-empty, or `fallback`
/// if none qualify.
pub fn resolve_field<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
    fallback: &str,
) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// The four header fields of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFields {
    pub id: String,
    pub name: String,
    pub country: String,
    pub status: String,
}

impl DisplayFields {
    /// Resolve the header fields from the profile, the requested
    /// identifier, and the fallback catalog.
    pub fn resolve(
        profile: Option<&AccountHolderProfile>,
        requested_id: Option<&str>,
        fallbacks: &FallbackCatalog,
    ) -> Self {
        let empty = AccountHolderProfile::default();
        let profile = profile.unwrap_or(&empty);

        DisplayFields {
            id: resolve_field(
                [profile.legal_entity_id.as_deref(), requested_id],
                FIELD_PLACEHOLDER,
            ),
            name: resolve_field(
                [profile.description.as_deref(), profile.legal_name.as_deref()],
                &fallbacks.legal_name,
            ),
            country: resolve_field(
                [profile.country.as_deref(), profile.country_code.as_deref()],
                &fallbacks.country,
            ),
            status: resolve_field(
                [profile.status.as_deref(), profile.verification_status.as_deref()],
                FIELD_PLACEHOLDER,
            ),
        }
    }
}
