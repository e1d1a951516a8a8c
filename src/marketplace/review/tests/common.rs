use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::marketplace::review::domain::{
    ApplicantType, Application, ApplicationId, ApplicationStatus,
};
use crate::marketplace::review::repository::InMemoryApplicationRepository;
use crate::marketplace::review::service::ReviewService;

pub(super) fn applied_on(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, day, 9, 0, 0)
        .single()
        .expect("valid date")
}

pub(super) fn seller(id: &str, full_name: &str, business_name: &str, day: u32) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        full_name: full_name.to_string(),
        email: format!("{id}@petverse.example"),
        phone: "+91 98765 43210".to_string(),
        applicant_type: ApplicantType::Seller,
        business_name: Some(business_name.to_string()),
        service_type: None,
        license_url: format!("https://cdn.petverse.example/licenses/{id}.pdf"),
        date_applied: applied_on(day),
        status: ApplicationStatus::Pending,
        date_reviewed: None,
    }
}

pub(super) fn provider(id: &str, full_name: &str, service_type: &str, day: u32) -> Application {
    Application {
        applicant_type: ApplicantType::ServiceProvider,
        business_name: None,
        service_type: Some(service_type.to_string()),
        ..seller(id, full_name, "", day)
    }
}

pub(super) fn sample_applications() -> Vec<Application> {
    vec![
        seller("a1", "Asha Verma", "Paws & Claws Supplies", 3),
        seller("a2", "Rohan Iyer", "Happy Tails Kennel", 7),
        provider("a3", "Meera Nair", "Veterinary Doctor", 5),
        provider("a4", "Kabir Shah", "Dog Trainer", 9),
    ]
}

pub(super) fn build_service() -> (
    ReviewService<InMemoryApplicationRepository>,
    Arc<InMemoryApplicationRepository>,
) {
    let repository = Arc::new(InMemoryApplicationRepository::seeded(sample_applications()));
    let service = ReviewService::new(repository.clone());
    (service, repository)
}

pub(super) fn ids(applications: &[Application]) -> Vec<&str> {
    applications
        .iter()
        .map(|application| application.id.0.as_str())
        .collect()
}
