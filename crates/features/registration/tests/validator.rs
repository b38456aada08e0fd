use chrono::Utc;
use epoch_domain::{EventCatalog, ParticipantFields, RegistrationDraft};
use epoch_registration::validator::{FormField, ParticipantSlot, validate};

fn member(id: &str, mobile: &str) -> ParticipantFields {
    ParticipantFields {
        epoch_id: id.to_owned(),
        name: "Asha".to_owned(),
        college: "GCT".to_owned(),
        mobile: mobile.to_owned(),
    }
}

fn complete(id: &str) -> ParticipantFields {
    member(id, "9876543210")
}

fn team_draft(event_id: &str) -> RegistrationDraft {
    let descriptor = EventCatalog::describe(event_id).unwrap();
    RegistrationDraft {
        event_id: event_id.to_owned(),
        team_name: descriptor.requires_team_name.then(|| "Bitwise".to_owned()),
        paper_title: descriptor.requires_paper_title.then(|| "On Flip Flops".to_owned()),
        participants: if descriptor.is_solo {
            vec![complete("EPOCH001")]
        } else {
            vec![complete("EPOCH001"), complete("EPOCH002")]
        },
        agreed_to_terms: true,
        submitted_at: Utc::now(),
    }
}

fn check(draft: &RegistrationDraft) -> Result<(), epoch_registration::FieldError> {
    let descriptor = EventCatalog::describe(&draft.event_id).unwrap();
    validate(draft, descriptor)
}

#[test]
fn complete_team_draft_passes() {
    assert!(check(&team_draft("binary-battle")).is_ok());
    assert!(check(&team_draft("paper-presentation")).is_ok());
    assert!(check(&team_draft("flipflop")).is_ok());
}

#[test]
fn missing_team_name_is_reported_before_missing_members() {
    let mut draft = team_draft("binary-battle");
    draft.team_name = Some("   ".to_owned());
    draft.participants[1] = ParticipantFields::default();

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::TeamName);
    assert_eq!(error.message, "Please enter Team Name");
}

#[test]
fn paper_title_is_required_only_where_the_event_asks_for_one() {
    let mut draft = team_draft("paper-presentation");
    draft.paper_title = None;
    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::PaperTitle);

    let mut draft = team_draft("binary-battle");
    draft.paper_title = None;
    assert!(check(&draft).is_ok());
}

#[test]
fn incomplete_leader_block_fails_before_format_checks() {
    let mut draft = team_draft("binary-battle");
    draft.participants[0].college = String::new();
    draft.participants[0].epoch_id = "nonsense".to_owned();

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::Participant(ParticipantSlot::Leader));
    assert_eq!(error.message, "Please fill all your details");
}

#[test]
fn malformed_leader_epoch_id_is_rejected_with_an_example() {
    let mut draft = team_draft("binary-battle");
    draft.participants[0].epoch_id = "EPOCH1".to_owned();

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::EpochId(ParticipantSlot::Leader));
    assert_eq!(error.message, "Please enter a valid EPOCH ID (e.g., EPOCH001)");
}

#[test]
fn short_mobile_number_is_rejected_per_slot() {
    let mut draft = team_draft("binary-battle");
    draft.participants[1].mobile = "12345".to_owned();

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::Mobile(ParticipantSlot::Second));
    assert_eq!(error.message, "Please enter a valid 10-digit mobile number for Participant 2");
}

#[test]
fn team_events_require_a_complete_second_member() {
    let mut draft = team_draft("prompt-arena");
    draft.participants[1] = ParticipantFields::default();

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::Participant(ParticipantSlot::Second));
    assert_eq!(error.message, "Please fill all Participant 2 details");
}

#[test]
fn solo_events_reject_extra_members() {
    let mut draft = team_draft("flipflop");
    draft.participants.push(complete("EPOCH002"));

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::Cardinality);
}

#[test]
fn events_without_the_third_slot_reject_a_filled_third() {
    // connection admits three on the backend but the form never offers the
    // slot, so a filled third is a cardinality violation.
    let mut draft = team_draft("connection");
    draft.participants.push(complete("EPOCH003"));

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::Cardinality);
}

#[test]
fn third_slot_acceptance_follows_the_catalog_affordance() {
    for descriptor in EventCatalog::all().iter().filter(|d| !d.is_solo) {
        let mut draft = team_draft(descriptor.id);
        draft.participants.push(complete("EPOCH003"));
        assert_eq!(
            check(&draft).is_ok(),
            descriptor.allows_third_participant,
            "{} should bound the form at effective max",
            descriptor.id
        );
    }
}

#[test]
fn empty_third_slot_counts_as_absent() {
    let mut draft = team_draft("paper-presentation");
    draft.participants.push(ParticipantFields::default());
    assert!(check(&draft).is_ok());
}

#[test]
fn partially_filled_third_slot_is_an_error_whichever_field_is_set() {
    let partials = [
        ParticipantFields { epoch_id: "EPOCH003".to_owned(), ..Default::default() },
        ParticipantFields { name: "Ravi".to_owned(), ..Default::default() },
        ParticipantFields { college: "GCT".to_owned(), ..Default::default() },
        ParticipantFields { mobile: "9876543210".to_owned(), ..Default::default() },
    ];
    for partial in partials {
        let mut draft = team_draft("paper-presentation");
        draft.participants.push(partial);

        let error = check(&draft).unwrap_err();
        assert_eq!(error.field, FormField::Participant(ParticipantSlot::Third));
        assert_eq!(
            error.message,
            "Please fill all Participant 3 details or remove the participant"
        );
    }
}

#[test]
fn complete_third_slot_still_gets_format_checks() {
    let mut draft = team_draft("prompt-arena");
    draft.participants.push(member("EPOCH003", "98765"));

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::Mobile(ParticipantSlot::Third));
}

#[test]
fn terms_checkbox_is_checked_last() {
    let mut draft = team_draft("binary-battle");
    draft.agreed_to_terms = false;

    let error = check(&draft).unwrap_err();
    assert_eq!(error.field, FormField::Terms);
    assert_eq!(error.message, "Please agree to the terms and conditions");
}
