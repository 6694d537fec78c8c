//! Shared helpers for fr-server integration tests.

use fr_client::UpstreamClient;
use fr_server::AppState;
use fr_store::MemoryRegistrationStore;

use std::time::Duration;

use serde_json::{Value, json};

/// State with a fresh store and an upstream nobody listens on. Fine for
/// registration tests, which never touch the proxy routes.
#[allow(dead_code)]
pub fn test_state() -> AppState {
    test_state_with_upstream("http://127.0.0.1:9", None)
}

#[allow(dead_code)]
pub fn test_state_with_upstream(base_url: &str, api_token: Option<&str>) -> AppState {
    let store = MemoryRegistrationStore::new();
    let upstream = UpstreamClient::new(base_url, api_token, Duration::from_secs(2)).unwrap();

    AppState::new(Box::new(store), upstream)
}

/// Full intake payload as the wizard submits it.
#[allow(dead_code)]
pub fn registration_body() -> Value {
    json!({
        "whoYouAre": {
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "timeZone": "UTC+01:00",
            "country": "Germany",
            "professionalLinks": {
                "github": "https://github.com/janedoe"
            }
        },
        "coreRole": { "primaryDomain": "Web Development" },
        "eliteSkillCards": { "selectedSkills": ["Rust", "TypeScript"] },
        "toolstackProficiency": {
            "selectedTools": [
                { "category": "Backend", "tools": ["Axum", "PostgreSQL"] }
            ]
        },
        "domainExperience": {
            "roles": [{ "title": "Backend Engineer", "years": 5 }]
        },
        "industryExperience": { "selectedIndustries": ["E-commerce"] },
        "availabilityWorkflow": {
            "weeklyCommitment": 30,
            "workingHours": ["09:00-17:00"],
            "collaborationTools": ["Slack"],
            "teamStyle": "async-first",
            "screenSharing": "comfortable",
            "availabilityExceptions": ""
        },
        "softSkills": {
            "collaborationStyle": "proactive",
            "communicationFrequency": "daily",
            "conflictResolution": "direct",
            "languages": ["English", "German"],
            "teamVsSolo": "team"
        },
        "certifications": {
            "certificates": [
                { "name": "AWS Solutions Architect", "url": "https://example.com/cert/123" }
            ]
        },
        "projectQuoting": {
            "compensationPreference": "fixed",
            "smallProjectPrice": 500,
            "midProjectPrice": 2500,
            "longTermPrice": 8000,
            "milestoneTerms": "50% upfront, 50% on delivery",
            "willSubmitProposals": "yes"
        },
        "legalAgreements": {
            "agreements": [{ "id": "nda", "accepted": true }],
            "identityVerification": {
                "idType": "passport",
                "taxDocType": "w8ben",
                "addressVerified": true
            },
            "workAuthorization": { "interested": true }
        }
    })
}
