use chrono::Utc;
use epoch_domain::{
    EpochId, IdentityCheckResponse, ParticipantFields, RegistrationDraft, RegistrationPayload,
    RegistrationResponse,
};
use epoch_registration::{
    Orchestrator, RegistrationError, RegistrationGateway, SubmitOutcome, SubmitPhase,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted gateway: each endpoint yields one pre-loaded result and counts
/// its calls.
#[derive(Default)]
struct MockGateway {
    verify_result: Mutex<Option<Result<IdentityCheckResponse, RegistrationError>>>,
    submit_result: Mutex<Option<Result<RegistrationResponse, RegistrationError>>>,
    verify_calls: AtomicUsize,
    submit_calls: AtomicUsize,
}

impl MockGateway {
    fn accepting(response: RegistrationResponse) -> Self {
        let gateway = Self::default();
        gateway.script_verify(Ok(IdentityCheckResponse { valid: true, invalid_ids: vec![] }));
        gateway.script_submit(Ok(response));
        gateway
    }

    fn script_verify(&self, result: Result<IdentityCheckResponse, RegistrationError>) {
        *self.verify_result.lock().unwrap() = Some(result);
    }

    fn script_submit(&self, result: Result<RegistrationResponse, RegistrationError>) {
        *self.submit_result.lock().unwrap() = Some(result);
    }
}

impl RegistrationGateway for &MockGateway {
    async fn verify_identities(
        &self,
        _ids: &[EpochId],
    ) -> Result<IdentityCheckResponse, RegistrationError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.verify_result.lock().unwrap().take().expect("unscripted identity check")
    }

    async fn submit_registration(
        &self,
        _payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, RegistrationError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submit_result.lock().unwrap().take().expect("unscripted submission")
    }
}

/// Gateway whose first call never resolves.
struct StalledGateway;

impl RegistrationGateway for StalledGateway {
    async fn verify_identities(
        &self,
        _ids: &[EpochId],
    ) -> Result<IdentityCheckResponse, RegistrationError> {
        std::future::pending().await
    }

    async fn submit_registration(
        &self,
        _payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, RegistrationError> {
        std::future::pending().await
    }
}

fn member(id: &str) -> ParticipantFields {
    ParticipantFields {
        epoch_id: id.to_owned(),
        name: "Asha".to_owned(),
        college: "GCT".to_owned(),
        mobile: "9876543210".to_owned(),
    }
}

fn solo_draft() -> RegistrationDraft {
    RegistrationDraft {
        event_id: "flipflop".to_owned(),
        team_name: None,
        paper_title: None,
        participants: vec![member("EPOCH007")],
        agreed_to_terms: true,
        submitted_at: Utc::now(),
    }
}

fn team_draft() -> RegistrationDraft {
    RegistrationDraft {
        event_id: "binary-battle".to_owned(),
        team_name: Some("Bitwise".to_owned()),
        paper_title: None,
        participants: vec![member("EPOCH007"), member("EPOCH008")],
        agreed_to_terms: true,
        submitted_at: Utc::now(),
    }
}

#[tokio::test]
async fn successful_solo_submission_runs_both_calls_once() {
    let gateway = MockGateway::accepting(RegistrationResponse {
        success: true,
        registration_id: Some("FLP-0001".to_owned()),
        event_name: Some("Flip Flop".to_owned()),
        ..Default::default()
    });
    let orchestrator = Orchestrator::new(&gateway);

    let outcome = orchestrator.submit(&solo_draft()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Success {
            registration_id: "FLP-0001".to_owned(),
            event_name: "Flip Flop".to_owned(),
            team_name: None,
        }
    );
    assert_eq!(orchestrator.phase(), SubmitPhase::Completed);
    assert!(!orchestrator.is_in_flight());
    assert_eq!(gateway.verify_calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.submit_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn team_name_is_echoed_back_for_team_events() {
    let gateway = MockGateway::accepting(RegistrationResponse {
        success: true,
        registration_id: Some("BBT-0042".to_owned()),
        team_name: Some("Bitwise".to_owned()),
        ..Default::default()
    });
    let orchestrator = Orchestrator::new(&gateway);

    match orchestrator.submit(&team_draft()).await {
        SubmitOutcome::Success { event_name, team_name, .. } => {
            // Falls back to the catalog name when the backend omits it.
            assert_eq!(event_name, "Binary Battle");
            assert_eq!(team_name.as_deref(), Some("Bitwise"));
        },
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_draft_makes_no_network_calls() {
    let gateway = MockGateway::default();
    let orchestrator = Orchestrator::new(&gateway);

    let mut draft = solo_draft();
    draft.participants[0].mobile = "12345".to_owned();

    let outcome = orchestrator.submit(&draft).await;
    assert!(matches!(outcome, SubmitOutcome::Invalid { .. }));
    assert_eq!(orchestrator.phase(), SubmitPhase::Idle);
    assert!(!orchestrator.is_in_flight());
    assert_eq!(gateway.verify_calls.load(Ordering::SeqCst), 0);
    assert_eq!(gateway.submit_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rejected_identity_check_skips_the_submission_call() {
    let gateway = MockGateway::default();
    gateway.script_verify(Ok(IdentityCheckResponse {
        valid: false,
        invalid_ids: vec!["EPOCH008".to_owned()],
    }));
    let orchestrator = Orchestrator::new(&gateway);

    let outcome = orchestrator.submit(&team_draft()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::InvalidIdentityIds { ids: vec!["EPOCH008".to_owned()] }
    );
    assert_eq!(gateway.verify_calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.submit_calls.load(Ordering::SeqCst), 0);
    assert_eq!(orchestrator.phase(), SubmitPhase::Idle);
}

#[tokio::test]
async fn server_side_cap_verdict_is_surfaced() {
    let gateway = MockGateway::accepting(RegistrationResponse {
        success: false,
        limit_exceeded: true,
        message: Some(
            "EPOCH ID EPOCH007 has already registered for 2 technical events. Maximum limit reached!"
                .to_owned(),
        ),
        ..Default::default()
    });
    let orchestrator = Orchestrator::new(&gateway);

    match orchestrator.submit(&team_draft()).await {
        SubmitOutcome::CapExceeded { message } => {
            assert!(message.contains("Maximum limit reached"));
        },
        other => panic!("expected a cap verdict, got {other:?}"),
    }
}

#[tokio::test]
async fn full_event_carries_counts() {
    let gateway = MockGateway::accepting(RegistrationResponse {
        success: false,
        event_full: true,
        current_count: Some(20),
        max_limit: Some(20),
        message: Some("Event is full.".to_owned()),
        ..Default::default()
    });
    let orchestrator = Orchestrator::new(&gateway);

    match orchestrator.submit(&team_draft()).await {
        SubmitOutcome::EventFull { event_name, current_count, max_limit, .. } => {
            assert_eq!(event_name, "Binary Battle");
            assert_eq!(current_count, 20);
            assert_eq!(max_limit, 20);
        },
        other => panic!("expected an event-full verdict, got {other:?}"),
    }
}

#[tokio::test]
async fn submission_rejected_by_the_backend_for_stale_ids() {
    // The backend re-checks IDs; its rejection maps to the same outcome as
    // the dedicated check.
    let gateway = MockGateway::accepting(RegistrationResponse {
        success: false,
        invalid_ids: Some(vec!["EPOCH007".to_owned()]),
        ..Default::default()
    });
    let orchestrator = Orchestrator::new(&gateway);

    let outcome = orchestrator.submit(&team_draft()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::InvalidIdentityIds { ids: vec!["EPOCH007".to_owned()] }
    );
}

#[tokio::test]
async fn transport_failure_releases_the_lock_for_a_retry() {
    let gateway = MockGateway::default();
    gateway.script_verify(Err(RegistrationError::Transport {
        message: "connection refused".into(),
        context: None,
    }));
    let orchestrator = Orchestrator::new(&gateway);

    let outcome = orchestrator.submit(&team_draft()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failure {
            message: "Failed to validate EPOCH IDs. Please try again.".to_owned()
        }
    );
    assert_eq!(orchestrator.phase(), SubmitPhase::Idle);
    assert!(!orchestrator.is_in_flight());

    // A fresh attempt goes through on the same orchestrator.
    gateway.script_verify(Ok(IdentityCheckResponse { valid: true, invalid_ids: vec![] }));
    gateway.script_submit(Ok(RegistrationResponse {
        success: true,
        registration_id: Some("BBT-0001".to_owned()),
        ..Default::default()
    }));
    let outcome = orchestrator.submit(&team_draft()).await;
    assert!(matches!(outcome, SubmitOutcome::Success { .. }));
}

#[tokio::test]
async fn failed_submission_call_reports_the_submit_stage_message() {
    let gateway = MockGateway::default();
    gateway.script_verify(Ok(IdentityCheckResponse { valid: true, invalid_ids: vec![] }));
    gateway.script_submit(Err(RegistrationError::Transport {
        message: "connection reset".into(),
        context: None,
    }));
    let orchestrator = Orchestrator::new(&gateway);

    let outcome = orchestrator.submit(&team_draft()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failure {
            message: "Failed to submit registration. Please try again.".to_owned()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn stalled_gateway_times_out_into_a_retryable_failure() {
    let orchestrator = Orchestrator::with_timeout(StalledGateway, Duration::from_secs(10));

    let outcome = orchestrator.submit(&solo_draft()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failure {
            message: "Failed to validate EPOCH IDs. Please try again.".to_owned()
        }
    );
    assert!(!orchestrator.is_in_flight());
}

#[tokio::test]
async fn concurrent_submission_is_rejected_while_one_is_in_flight() {
    let orchestrator = std::sync::Arc::new(Orchestrator::with_timeout(
        StalledGateway,
        Duration::from_secs(3600),
    ));

    let first = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.submit(&solo_draft()).await }
    });
    while !orchestrator.is_in_flight() {
        tokio::task::yield_now().await;
    }

    let outcome = orchestrator.submit(&solo_draft()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failure { message: "A submission is already in progress.".to_owned() }
    );
    assert!(orchestrator.is_in_flight());
    first.abort();
}
