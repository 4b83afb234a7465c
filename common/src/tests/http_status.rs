use crate::HttpStatusCode;

/// **VALUE**: Verifies 404 is recognised as not-found and as a client error.
///
/// **WHY THIS MATTERS**: The fetch component maps exactly this status to
/// `FetchError::NotFound`; everything else non-2xx is a network failure.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one in the range checks or a
/// broken `is_not_found` comparison.
#[test]
fn given_404_when_classified_then_not_found_client_error() {
    // GIVEN: A 404 status
    let status = HttpStatusCode::from(404);

    // THEN: Not found, client error, not server error
    assert!(status.is_not_found());
    assert!(status.is_client_error());
    assert!(!status.is_server_error());
}

/// **VALUE**: Verifies range boundaries for server errors.
///
/// **WHY THIS MATTERS**: Upstream 5xx responses are reported with their status so
/// the page layer can say "service unavailable" rather than "not found".
///
/// **BUG THIS CATCHES**: Would catch inclusive/exclusive range mistakes.
#[test]
fn given_boundary_codes_when_classified_then_ranges_are_half_open() {
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
    assert!(!HttpStatusCode(499).is_server_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(503).is_not_found());
    assert_eq!(HttpStatusCode(503).to_string(), "503");
}
