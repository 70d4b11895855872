//! Form-and-List Controller integration tests
//!
//! Runs the controller against the in-memory backend double: validation state
//! machine, fetch controller, list actions, pagination and notifications.

mod common;

use std::time::{Duration, Instant};

use shortener_tui::client::{ClientError, ShortenRequest};
use shortener_tui::controller::Action;
use shortener_tui::controller::constants::{
    DUPLICATE_ALIAS, INVALID_ALIAS, INVALID_URL, LOAD_FAILED, REQUEST_REJECTED, SAVE_FAILED,
    URL_COPIED,
};

use common::{Call, MockApi, controller_with, entry, numbered_entries};

// =============================================================================
// Validation state machine
// =============================================================================

#[tokio::test]
async fn test_invalid_urls_are_never_ready() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);

    for url in ["", "invalid-url", "example.com", "//no-scheme", "http://", "not a url"] {
        controller.set_url(url);
        assert!(!controller.is_ready_for_submit(), "{url:?} should not be ready");
        controller.blur_url();
        assert!(!controller.is_ready_for_submit(), "{url:?} should not be ready");
    }
}

#[tokio::test]
async fn test_valid_url_with_empty_alias_is_ready() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);

    for url in [
        "https://example.com",
        "http://localhost:3000/a/b?c=d#e",
        "https://sub.example.org:8443/",
    ] {
        controller.set_url(url);
        assert!(controller.is_ready_for_submit(), "{url:?} should be ready");
    }
}

#[tokio::test]
async fn test_clearing_valid_url_disables_submit() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("https://example.com");
    assert!(controller.is_ready_for_submit());

    controller.set_url("");
    assert!(!controller.is_ready_for_submit());

    controller.set_url("https://example.com");
    assert!(controller.is_ready_for_submit());
}

#[tokio::test]
async fn test_url_error_appears_on_blur_not_while_typing() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("invalid-url");
    assert_eq!(controller.form().url_error, None);
    assert!(!controller.form().url_touched);

    controller.blur_url();
    assert!(controller.form().url_touched);
    assert_eq!(controller.form().url_error.as_deref(), Some(INVALID_URL));
}

#[tokio::test]
async fn test_url_error_tracks_changes_once_touched() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("invalid-url");
    controller.blur_url();
    assert_eq!(controller.form().url_error.as_deref(), Some(INVALID_URL));

    controller.set_url("https://example.com");
    assert_eq!(controller.form().url_error, None);

    controller.set_url("https://");
    assert_eq!(controller.form().url_error.as_deref(), Some(INVALID_URL));
}

#[tokio::test]
async fn test_duplicate_alias_once_touched() {
    let api = MockApi::with_urls(vec![entry("example", "https://example.com")]);
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;

    controller.set_url("https://another.example.com");
    controller.set_alias("example");
    assert_eq!(controller.form().alias_error, None);
    assert!(!controller.is_ready_for_submit());

    controller.blur_alias();
    assert_eq!(controller.form().alias_error.as_deref(), Some(DUPLICATE_ALIAS));
    assert!(!controller.is_ready_for_submit());
}

#[tokio::test]
async fn test_alias_character_class() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;

    controller.set_url("https://example.com");
    controller.set_alias("bad alias!");
    controller.blur_alias();
    assert_eq!(controller.form().alias_error.as_deref(), Some(INVALID_ALIAS));
    assert!(!controller.is_ready_for_submit());

    controller.set_alias("good_alias-1");
    assert_eq!(controller.form().alias_error, None);
    assert!(controller.is_ready_for_submit());
}

#[tokio::test]
async fn test_untouched_alias_blocks_submit() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("https://example.com");
    controller.set_alias("fresh");
    assert!(!controller.is_ready_for_submit());

    controller.blur_alias();
    assert!(controller.is_ready_for_submit());

    // clearing the alias is always fine
    controller.set_alias("");
    assert!(controller.is_ready_for_submit());
}

// =============================================================================
// Fetch controller
// =============================================================================

#[tokio::test]
async fn test_mount_loads_list_once() {
    let api = MockApi::with_urls(numbered_entries(3));
    let (mut controller, _, _) = controller_with(&api);

    controller.mount().await;

    assert_eq!(controller.urls().len(), 3);
    assert_eq!(controller.load_error(), None);
    assert_eq!(api.calls(), vec![Call::List]);
}

#[tokio::test]
async fn test_load_failure_is_retained_until_success() {
    let api = MockApi::with_urls(numbered_entries(2));
    api.fail_list(Some(ClientError::Transport("connection refused".into())));
    let (mut controller, _, _) = controller_with(&api);

    controller.mount().await;
    assert_eq!(controller.load_error(), Some(LOAD_FAILED));
    assert!(controller.urls().is_empty());

    api.fail_list(None);
    controller.list_urls().await;
    assert_eq!(controller.load_error(), None);
    assert_eq!(controller.urls().len(), 2);
}

#[tokio::test]
async fn test_non_2xx_list_is_a_load_failure() {
    let api = MockApi::new();
    api.fail_list(Some(ClientError::Status {
        status: 503,
        message: None,
    }));
    let (mut controller, _, _) = controller_with(&api);

    controller.mount().await;
    assert_eq!(controller.load_error(), Some(LOAD_FAILED));
}

#[tokio::test]
async fn test_successful_shorten_resets_form_and_refreshes() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;

    controller.set_url("https://example.com/long");
    controller.blur_url();
    controller.set_alias("ex");
    controller.blur_alias();
    assert!(controller.is_ready_for_submit());

    let action = controller.submit().await;
    assert_eq!(action, Action::RefreshUrls);
    assert_eq!(controller.form().url, "");
    assert_eq!(controller.form().alias, "");
    assert!(!controller.form().url_touched);
    assert!(!controller.form().alias_touched);
    assert_eq!(controller.form().url_error, None);
    assert_eq!(controller.form().alias_error, None);

    controller.dispatch(action).await;
    assert_eq!(controller.urls().len(), 1);
    assert_eq!(controller.urls()[0].alias, "ex");
    assert_eq!(
        api.calls(),
        vec![
            Call::List,
            Call::Shorten(ShortenRequest {
                full_url: "https://example.com/long".into(),
                custom_alias: Some("ex".into()),
            }),
            Call::List,
        ]
    );
}

#[tokio::test]
async fn test_blank_alias_is_omitted_from_request() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("https://example.com");
    let action = controller.submit().await;
    controller.dispatch(action).await;

    assert!(api.calls().contains(&Call::Shorten(ShortenRequest {
        full_url: "https://example.com".into(),
        custom_alias: None,
    })));
}

#[tokio::test]
async fn test_submit_when_not_ready_sends_nothing() {
    let api = MockApi::new();
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("invalid-url");
    let action = controller.submit().await;

    assert!(action.is_noop());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_bad_request_shows_backend_message_and_keeps_form() {
    let api = MockApi::new();
    api.fail_shorten(Some(ClientError::Status {
        status: 400,
        message: Some("Alias is reserved".into()),
    }));
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("https://example.com");
    controller.set_alias("admin");
    controller.blur_alias();
    let action = controller.submit().await;

    assert!(action.is_noop());
    assert_eq!(controller.error_notification(), Some("Alias is reserved"));
    assert_eq!(controller.form().url, "https://example.com");
    assert_eq!(controller.form().alias, "admin");
}

#[tokio::test]
async fn test_bad_request_without_message_falls_back() {
    let api = MockApi::new();
    api.fail_shorten(Some(ClientError::Status {
        status: 400,
        message: None,
    }));
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("https://example.com");
    controller.submit().await;

    assert_eq!(controller.error_notification(), Some(REQUEST_REJECTED));
}

#[tokio::test]
async fn test_other_create_failures_are_generic() {
    for err in [
        ClientError::Status {
            status: 500,
            message: None,
        },
        ClientError::Status {
            status: 409,
            message: Some("conflict".into()),
        },
        ClientError::Transport("timed out".into()),
    ] {
        let api = MockApi::new();
        api.fail_shorten(Some(err.clone()));
        let (mut controller, _, _) = controller_with(&api);

        controller.set_url("https://example.com");
        let action = controller.submit().await;

        assert!(action.is_noop(), "{err}");
        assert_eq!(controller.error_notification(), Some(SAVE_FAILED), "{err}");
        assert_eq!(controller.form().url, "https://example.com");
    }
}

#[tokio::test]
async fn test_delete_refreshes_and_empties_list() {
    let api = MockApi::with_urls(vec![entry("example", "https://example.com")]);
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;
    assert_eq!(controller.urls().len(), 1);

    let action = controller.delete_alias("example").await;
    assert_eq!(action, Action::RefreshUrls);
    // no optimistic removal
    assert_eq!(controller.urls().len(), 1);

    controller.dispatch(action).await;
    assert!(controller.urls().is_empty());
    assert_eq!(
        api.calls(),
        vec![Call::List, Call::Delete("example".into()), Call::List]
    );
}

#[tokio::test]
async fn test_delete_failure_is_silent() {
    let api = MockApi::with_urls(vec![entry("example", "https://example.com")]);
    api.fail_delete(Some(ClientError::Status {
        status: 404,
        message: None,
    }));
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;
    api.clear_calls();

    let action = controller.delete_alias("example").await;
    controller.dispatch(action).await;

    assert!(action.is_noop());
    assert_eq!(controller.error_notification(), None);
    assert_eq!(controller.load_error(), None);
    assert_eq!(controller.urls().len(), 1);
    assert_eq!(api.calls(), vec![Call::Delete("example".into())]);
}

#[tokio::test]
async fn test_list_only_changes_on_refresh() {
    let api = MockApi::with_urls(numbered_entries(2));
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;

    // backend changed behind our back; only a refresh picks it up
    let _ = shortener_tui::client::ShortenerApi::shorten(
        &api,
        &ShortenRequest::new("https://x.example", "x"),
    )
    .await;
    assert_eq!(controller.urls().len(), 2);

    controller.dispatch(Action::RefreshUrls).await;
    assert_eq!(controller.urls().len(), 3);
}

// =============================================================================
// List actions
// =============================================================================

#[tokio::test]
async fn test_copy_writes_exact_short_url() {
    let api = MockApi::new();
    let (mut controller, clipboard, _) = controller_with(&api);

    assert!(controller.copy_short_url("http://sho.rt/example"));

    assert_eq!(
        *clipboard.writes.lock().unwrap(),
        vec!["http://sho.rt/example".to_string()]
    );
    assert_eq!(controller.copied_notification(), Some(URL_COPIED));
}

#[tokio::test]
async fn test_copy_failure_shows_nothing() {
    let api = MockApi::new();
    let clipboard = common::RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let mut controller = shortener_tui::controller::Controller::new(
        std::sync::Arc::new(api),
        &shortener_tui::config::UiConfig::default(),
    )
    .with_clipboard(Box::new(clipboard));

    assert!(!controller.copy_short_url("http://sho.rt/example"));
    assert_eq!(controller.copied_notification(), None);
    assert_eq!(controller.error_notification(), None);
}

#[tokio::test]
async fn test_open_uses_new_context_without_opener_or_referrer() {
    let api = MockApi::new();
    let (controller, _, opener) = controller_with(&api);

    assert!(controller.open_short_url("http://sho.rt/example"));

    assert_eq!(
        *opener.opened.lock().unwrap(),
        vec![(
            "http://sho.rt/example".to_string(),
            "_blank".to_string(),
            "noopener,noreferrer".to_string()
        )]
    );
}

#[tokio::test]
async fn test_notification_channels_coexist() {
    let api = MockApi::new();
    api.fail_shorten(Some(ClientError::Transport("down".into())));
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("https://example.com");
    controller.submit().await;
    controller.copy_short_url("http://sho.rt/example");

    assert_eq!(controller.error_notification(), Some(SAVE_FAILED));
    assert_eq!(controller.copied_notification(), Some(URL_COPIED));

    controller.dismiss_copied();
    assert_eq!(controller.error_notification(), Some(SAVE_FAILED));

    controller.copy_short_url("http://sho.rt/example");
    controller.dismiss_error();
    assert_eq!(controller.copied_notification(), Some(URL_COPIED));
}

#[tokio::test]
async fn test_notifications_auto_hide_on_tick() {
    let api = MockApi::new();
    api.fail_shorten(Some(ClientError::Transport("down".into())));
    let (mut controller, _, _) = controller_with(&api);

    controller.set_url("https://example.com");
    controller.submit().await;
    controller.copy_short_url("http://sho.rt/example");

    let now = Instant::now();
    controller.tick(now + Duration::from_millis(1500));
    assert_eq!(controller.copied_notification(), None);
    assert_eq!(controller.error_notification(), Some(SAVE_FAILED));

    controller.tick(now + Duration::from_secs(6));
    assert_eq!(controller.error_notification(), None);
}

// =============================================================================
// Pagination
// =============================================================================

#[tokio::test]
async fn test_pagination_slices_without_fetching() {
    let api = MockApi::with_urls(numbered_entries(23));
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;
    api.clear_calls();

    assert_eq!(controller.visible_urls().len(), 10);
    assert_eq!(controller.page_count(), 3);

    assert!(controller.next_page());
    assert!(controller.next_page());
    assert!(!controller.next_page());
    assert_eq!(controller.visible_urls().len(), 3);
    assert_eq!(controller.visible_urls()[0].alias, "a20");

    assert!(controller.prev_page());
    assert_eq!(controller.visible_urls()[0].alias, "a10");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_rows_per_page_change_resets_to_first_page() {
    let api = MockApi::with_urls(numbered_entries(60));
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;

    controller.next_page();
    controller.next_page();
    assert_eq!(controller.pagination().page(), 2);

    controller.set_rows_per_page(25);
    assert_eq!(controller.pagination().page(), 0);
    assert_eq!(controller.visible_urls().len(), 25);

    controller.cycle_rows_per_page(true);
    assert_eq!(controller.pagination().rows_per_page(), 50);
    assert_eq!(controller.pagination().page(), 0);
}

#[tokio::test]
async fn test_page_clamped_after_list_shrinks() {
    let api = MockApi::with_urls(numbered_entries(11));
    let (mut controller, _, _) = controller_with(&api);
    controller.mount().await;

    assert!(controller.next_page());
    assert_eq!(controller.visible_urls().len(), 1);

    let action = controller.delete_alias("a10").await;
    controller.dispatch(action).await;

    assert_eq!(controller.pagination().page(), 0);
    assert_eq!(controller.visible_urls().len(), 10);
}
