use super::*;
use menu::Operation;

// =============================================================
// PageStatus defaults
// =============================================================

#[test]
fn page_status_default_is_loading() {
    let status = PageStatus::default();
    assert!(!status.loaded);
    assert_eq!(status.phase(&Modal::Closed), Phase::LoadingList);
}

#[test]
fn page_status_default_has_no_messages() {
    let status = PageStatus::default();
    assert!(status.notice.is_none());
    assert!(status.form_error.is_none());
}

// =============================================================
// Notices and form errors
// =============================================================

#[test]
fn report_replaces_previous_notice() {
    let mut status = PageStatus::default();
    status.report(Notice { operation: Operation::Add, message: "first".to_owned() });
    status.report(Notice { operation: Operation::Delete, message: "second".to_owned() });
    assert_eq!(status.notice.as_ref().map(|n| n.operation), Some(Operation::Delete));

    status.dismiss();
    assert!(status.notice.is_none());
}

#[test]
fn form_error_round_trip() {
    let mut status = PageStatus::default();
    status.reject_form(&FormError::Missing("name"));
    assert_eq!(status.form_error.as_deref(), Some("name is required"));

    status.clear_form_error();
    assert!(status.form_error.is_none());
}

#[test]
fn phase_tracks_modal_once_loaded() {
    let status = PageStatus { loaded: true, ..PageStatus::default() };
    assert_eq!(status.phase(&Modal::Closed), Phase::Idle);
    assert_eq!(status.phase(&Modal::Adding), Phase::AddModalOpen);
}

// =============================================================
// Dialog sessions
// =============================================================

#[test]
fn reopening_a_dialog_retires_the_previous_session() {
    let mut status = PageStatus::default();
    status.open_dialog();
    let submitted = status.dialog_seq;
    assert!(status.owns_dialog(submitted));

    status.open_dialog();
    assert!(!status.owns_dialog(submitted));
    assert!(status.owns_dialog(status.dialog_seq));
}

#[test]
fn open_dialog_clears_stale_form_error() {
    let mut status = PageStatus::default();
    status.reject_form(&FormError::Missing("price"));
    status.open_dialog();
    assert!(status.form_error.is_none());
}
