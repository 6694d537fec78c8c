//! Legal and compliance group.
//!
//! Unlike the other groups this one nests two further identified records:
//! identity verification and work authorization each carry their own id.

use crate::IdGenerator;
use crate::models::input::LegalAgreementsInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalAgreements {
    pub id: Uuid,
    pub agreements: Vec<AgreementConsent>,
    pub identity_verification: IdentityVerification,
    pub work_authorization: WorkAuthorization,
}

/// Consent checkbox state for one agreement document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementConsent {
    pub id: String,
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityVerification {
    pub id: Uuid,
    pub id_type: String,
    pub tax_doc_type: String,
    pub address_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkAuthorization {
    pub id: Uuid,
    pub interested: bool,
}

impl LegalAgreements {
    pub fn from_input(input: LegalAgreementsInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            agreements: input.agreements,
            identity_verification: IdentityVerification {
                id: ids.generate(),
                id_type: input.identity_verification.id_type,
                tax_doc_type: input.identity_verification.tax_doc_type,
                address_verified: input.identity_verification.address_verified,
            },
            work_authorization: WorkAuthorization {
                id: ids.generate(),
                interested: input.work_authorization.interested,
            },
        }
    }
}
