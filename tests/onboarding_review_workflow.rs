//! Integration scenarios for the onboarding review workflow: the state
//! machine exercised through the public service facade and the admin HTTP
//! router, without reaching into private modules.

mod common {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};
    use petverse_core::marketplace::review::{
        ApplicantType, Application, ApplicationId, ApplicationStatus,
        InMemoryApplicationRepository, ReviewService,
    };

    pub(crate) fn applied_on(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, day, 9, 0, 0)
            .single()
            .expect("valid date")
    }

    pub(crate) fn seller(id: &str, full_name: &str, business_name: &str, day: u32) -> Application {
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

    pub(crate) fn provider(
        id: &str,
        full_name: &str,
        service_type: &str,
        day: u32,
    ) -> Application {
        Application {
            applicant_type: ApplicantType::ServiceProvider,
            business_name: None,
            service_type: Some(service_type.to_string()),
            ..seller(id, full_name, "", day)
        }
    }

    pub(crate) fn seed() -> Vec<Application> {
        vec![
            seller("a1", "Asha Verma", "Paws & Claws Supplies", 3),
            seller("a2", "Rohan Iyer", "Happy Tails Kennel", 7),
            provider("a3", "Meera Nair", "Veterinary Doctor", 5),
        ]
    }

    pub(crate) fn build_service() -> (
        ReviewService<InMemoryApplicationRepository>,
        Arc<InMemoryApplicationRepository>,
    ) {
        let repository = Arc::new(InMemoryApplicationRepository::seeded(seed()));
        let service = ReviewService::new(repository.clone());
        (service, repository)
    }
}

mod workflow {
    use petverse_core::marketplace::review::{
        ApplicationId, ApplicationStatus, ReviewContext, ReviewError,
    };

    use super::common::build_service;

    fn id(raw: &str) -> ApplicationId {
        ApplicationId(raw.to_string())
    }

    #[test]
    fn full_lifecycle_pending_approved_removed() {
        let (service, _) = build_service();

        let approved = service.approve(&id("a1")).expect("approve succeeds");
        assert_eq!(approved.status, ApplicationStatus::Approved);
        assert!(approved.date_reviewed.is_some());

        match service.approve(&id("a1")) {
            Err(ReviewError::InvalidState { .. }) => {}
            other => panic!("expected invalid state on double approve, got {other:?}"),
        }

        service.remove(&id("a1")).expect("remove succeeds");
        for tab in [
            ApplicationStatus::Pending,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            let page = service
                .page(&ReviewContext::new(tab))
                .expect("page succeeds");
            assert!(page.items.iter().all(|application| application.id.0 != "a1"));
        }
    }

    #[test]
    fn rejected_applications_can_be_reconsidered() {
        let (service, _) = build_service();

        let rejected = service.reject(&id("a2")).expect("reject succeeds");
        let first_review = rejected.date_reviewed.expect("review date stamped");

        let rejected_tab = service
            .page(&ReviewContext::new(ApplicationStatus::Rejected))
            .expect("page succeeds");
        assert!(rejected_tab
            .items
            .iter()
            .any(|application| application.id.0 == "a2"));

        let reconsidered = service.reconsider(&id("a2")).expect("reconsider succeeds");
        assert_eq!(reconsidered.status, ApplicationStatus::Pending);
        assert!(reconsidered.date_reviewed.expect("refreshed") >= first_review);

        let pending_tab = service
            .page(&ReviewContext::new(ApplicationStatus::Pending))
            .expect("page succeeds");
        assert!(pending_tab
            .items
            .iter()
            .any(|application| application.id.0 == "a2"));
    }

    #[test]
    fn page_stays_reachable_after_a_removal_shrinks_the_tab() {
        let (service, _) = build_service();
        service.approve(&id("a1")).expect("approve succeeds");

        let mut context = ReviewContext::new(ApplicationStatus::Approved);
        context.page_size = 1;
        context.page = 1;
        let page = service.page(&context).expect("page succeeds");
        assert_eq!(page.total, 1);

        service.remove(&id("a1")).expect("remove succeeds");
        let page = service.page(&context).expect("page succeeds");
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}

mod routing {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use petverse_core::marketplace::review::{
        review_router, InMemoryApplicationRepository, ReviewService, DEFAULT_PAGE_SIZE,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::common::seed;

    fn build_router() -> axum::Router {
        let repository = Arc::new(InMemoryApplicationRepository::seeded(seed()));
        review_router(Arc::new(ReviewService::new(repository)), DEFAULT_PAGE_SIZE)
    }

    async fn dispatch(router: &axum::Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = router
            .clone()
            .oneshot(request)
            .await
            .expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json payload")
        };
        (status, payload)
    }

    #[tokio::test]
    async fn approve_moves_the_application_between_tab_queries() {
        let router = build_router();

        let (status, _) = dispatch(&router, "POST", "/api/v1/admin/applications/a1/approve").await;
        assert_eq!(status, StatusCode::OK);

        let (_, pending) = dispatch(
            &router,
            "GET",
            "/api/v1/admin/applications?status=pending",
        )
        .await;
        assert_eq!(pending.get("total").and_then(Value::as_u64), Some(2));

        let (_, approved) = dispatch(
            &router,
            "GET",
            "/api/v1/admin/applications?status=approved",
        )
        .await;
        assert_eq!(approved.get("total").and_then(Value::as_u64), Some(1));
        let items = approved
            .get("items")
            .and_then(Value::as_array)
            .expect("items array");
        assert_eq!(items[0].get("id").and_then(Value::as_str), Some("a1"));
    }

    #[tokio::test]
    async fn invalid_transitions_surface_as_conflicts() {
        let router = build_router();

        let (status, payload) =
            dispatch(&router, "POST", "/api/v1/admin/applications/a1/reconsider").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .contains("pending"));
    }
}
