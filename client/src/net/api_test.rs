use super::*;

#[test]
fn card_endpoint_formats_expected_path() {
    assert_eq!(card_endpoint("c-17"), "/api/cards/c-17");
}

#[test]
fn card_endpoint_escapes_reserved_characters() {
    assert_eq!(card_endpoint("a/b?c"), "/api/cards/a%2Fb%3Fc");
}

#[test]
fn cards_request_failed_message_formats_status() {
    assert_eq!(cards_request_failed_message(503), "cards request failed: 503");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_helpers_are_inert_without_hydrate() {
    let cards = block_on_ready(fetch_cards());
    assert!(cards.is_err());
    assert!(block_on_ready(fetch_card("c-1")).is_none());
}

/// Drives a future that never pends; the non-hydrate stubs return immediately.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future unexpectedly pending"),
    }
}
